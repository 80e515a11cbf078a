//! Type-safe price representation using decimal arithmetic.
//!
//! All marketplace amounts are Indian rupees. Arithmetic stays in
//! [`Decimal`] so cart and order totals never pick up float drift.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Highest price a listing may carry, in rupees.
    pub const MAX_LISTING_RUPEES: i64 = 10_000_000;

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A whole-rupee amount.
    #[must_use]
    pub fn rupees(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::INR)
    }

    /// Zero rupees.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::INR)
    }

    /// Parse a user-entered amount such as `"1250"` or `"1250.50"`.
    ///
    /// Returns `None` for anything that is not a strictly positive number
    /// or that exceeds [`Self::MAX_LISTING_RUPEES`].
    #[must_use]
    pub fn parse_positive(input: &str) -> Option<Self> {
        let amount: Decimal = input.trim().parse().ok()?;
        Some(Self::new(amount.round_dp(2), CurrencyCode::INR)).filter(Self::is_listable)
    }

    /// Whether a listing may carry this price: positive and within
    /// [`Self::MAX_LISTING_RUPEES`].
    #[must_use]
    pub fn is_listable(&self) -> bool {
        self.amount > Decimal::ZERO && self.amount <= Decimal::from(Self::MAX_LISTING_RUPEES)
    }

    /// Price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        self * quantity
    }

    /// Tax owed on this amount, rounded half-up to the paisa.
    #[must_use]
    pub fn tax(self, rate: TaxRate) -> Self {
        let tax = self.amount.saturating_mul(rate.as_fraction());
        Self::new(
            tax.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            self.currency_code,
        )
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

// Totals saturate at `Decimal::MAX` instead of panicking on overflow.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount.saturating_add(rhs.amount), self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(rhs)),
            self.currency_code,
        )
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
        }
    }
}

/// Tax rate in basis points (500 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Standard GST rate for handicrafts: 5%.
    pub const GST: Self = Self(500);

    /// Create a rate from basis points.
    #[must_use]
    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// Basis points.
    #[must_use]
    pub const fn bps(self) -> u32 {
        self.0
    }

    /// Whole-percent label for display, e.g. `"5%"`.
    #[must_use]
    pub fn percent_label(self) -> String {
        let pct = Decimal::from(self.0) / Decimal::from(100);
        format!("{}%", pct.normalize())
    }

    fn as_fraction(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(10_000)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::GST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_rupees() {
        assert_eq!(Price::rupees(1250).to_string(), "₹1250.00");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::rupees(100).times(2), Price::rupees(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::rupees(250));
    }

    #[test]
    fn test_gst_on_odd_amount_rounds_half_up() {
        // 5% of 10.10 = 0.505 -> 0.51
        let price = Price::new(Decimal::new(1010, 2), CurrencyCode::INR);
        assert_eq!(price.tax(TaxRate::GST).amount, Decimal::new(51, 2));
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(Price::parse_positive(" 499 "), Some(Price::rupees(499)));
        assert!(Price::parse_positive("0").is_none());
        assert!(Price::parse_positive("-10").is_none());
        assert!(Price::parse_positive("abc").is_none());
        assert!(Price::parse_positive("").is_none());
    }

    #[test]
    fn test_parse_positive_caps_listing_price() {
        assert_eq!(
            Price::parse_positive("10000000"),
            Some(Price::rupees(Price::MAX_LISTING_RUPEES))
        );
        assert!(Price::parse_positive("10000000.01").is_none());
        assert!(Price::parse_positive("79228162514264337593543950335").is_none());
        // Rounds to zero paise
        assert!(Price::parse_positive("0.001").is_none());
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Price::new(Decimal::MAX, CurrencyCode::INR);
        assert_eq!(huge.times(2).amount, Decimal::MAX);
        assert_eq!((huge + huge).amount, Decimal::MAX);
        let total: Price = [huge, huge, Price::rupees(1)].into_iter().sum();
        assert_eq!(total.amount, Decimal::MAX);
        assert!(huge.tax(TaxRate::GST).amount > Decimal::ZERO);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(TaxRate::GST.percent_label(), "5%");
        assert_eq!(TaxRate::from_bps(1250).percent_label(), "12.5%");
    }
}
