//! A visitor's shopping cart.

use serde::{Deserialize, Serialize};

use crate::models::{CartItem, Product};
use crate::types::{Price, ProductId, TaxRate};

/// Most units a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Cart lines in the order they were first added.
///
/// Lines are unique by product id and hold between 1 and
/// [`MAX_LINE_QUANTITY`] units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add one unit of `product`, merging with an existing line.
    pub fn add(&mut self, product: Product) {
        self.add_quantity(product, 1);
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    ///
    /// A zero quantity is ignored; the line is capped at [`MAX_LINE_QUANTITY`].
    pub fn add_quantity(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(quantity).min(MAX_LINE_QUANTITY);
            }
            None => self.items.push(CartItem {
                product,
                quantity: quantity.min(MAX_LINE_QUANTITY),
            }),
        }
    }

    /// Set the quantity of an existing line. Zero removes the line and
    /// anything above [`MAX_LINE_QUANTITY`] is capped.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        self.items
            .iter_mut()
            .find(|item| &item.product.id == product_id)
            .map(|item| item.quantity = quantity.min(MAX_LINE_QUANTITY))
            .is_some()
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.product.id != product_id);
        self.items.len() != before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Hand the lines over, leaving the cart empty.
    pub fn take(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units, shown on the navbar badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Σ line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Tax on the subtotal.
    #[must_use]
    pub fn tax(&self, rate: TaxRate) -> Price {
        self.subtotal().tax(rate)
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self, rate: TaxRate) -> Price {
        self.subtotal() + self.tax(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, UserId};

    fn product(id: &str, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            seller_id: UserId::new("a1"),
            title: format!("Item {id}"),
            description: String::new(),
            price: Price::rupees(rupees),
            category: Category::Handicrafts,
            images: vec!["img".to_string()],
            stock: 10,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_add_merges_by_product_id() {
        let mut cart = Cart::new();
        cart.add(product("1", 100));
        cart.add(product("1", 100));
        cart.add(product("2", 50));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items().first().map(|i| i.quantity), Some(2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let mut cart = Cart::new();
        cart.add_quantity(product("1", 120), 3);
        cart.add(product("2", 45));

        let lines: Price = cart.items().iter().map(CartItem::line_total).sum();
        assert_eq!(cart.subtotal(), lines);
        assert_eq!(cart.subtotal(), Price::rupees(405));
    }

    #[test]
    fn test_total_adds_gst() {
        let mut cart = Cart::new();
        cart.add_quantity(product("1", 1000), 2);
        assert_eq!(cart.tax(TaxRate::GST), Price::rupees(100));
        assert_eq!(cart.total(TaxRate::GST), Price::rupees(2100));
    }

    #[test]
    fn test_zero_quantity_add_is_ignored() {
        let mut cart = Cart::new();
        cart.add_quantity(product("1", 10), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(product("1", 10));
        assert!(cart.set_quantity(&ProductId::new("1"), 0));
        assert!(cart.is_empty());
        assert!(!cart.set_quantity(&ProductId::new("1"), 2));
    }

    #[test]
    fn test_quantities_are_capped_per_line() {
        let mut cart = Cart::new();
        cart.add(product("1", 10));
        cart.add(product("2", 20));
        assert!(cart.set_quantity(&ProductId::new("1"), u32::MAX));
        assert_eq!(cart.item_count(), MAX_LINE_QUANTITY + 1);

        cart.add_quantity(product("2", 20), u32::MAX);
        assert_eq!(cart.item_count(), MAX_LINE_QUANTITY * 2);

        cart.add_quantity(product("3", 30), 500);
        assert_eq!(cart.items().last().map(|i| i.quantity), Some(MAX_LINE_QUANTITY));
    }

    #[test]
    fn test_huge_price_does_not_overflow_totals() {
        let mut cart = Cart::new();
        let mut pricey = product("1", 1);
        pricey.price = Price::new(rust_decimal::Decimal::MAX, crate::types::CurrencyCode::INR);
        cart.add_quantity(pricey, 2);

        assert_eq!(cart.subtotal().amount, rust_decimal::Decimal::MAX);
        assert_eq!(cart.total(TaxRate::GST).amount, rust_decimal::Decimal::MAX);
    }

    #[test]
    fn test_remove_only_touches_one_line() {
        let mut cart = Cart::new();
        cart.add(product("1", 10));
        cart.add(product("2", 20));
        assert!(cart.remove(&ProductId::new("1")));
        assert!(!cart.remove(&ProductId::new("1")));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_take_empties_cart() {
        let mut cart = Cart::new();
        cart.add(product("1", 10));
        let items = cart.take();
        assert_eq!(items.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_survives_session_serialization() {
        let mut cart = Cart::new();
        cart.add_quantity(product("1", 99), 2);
        let json = serde_json::to_string(&cart).unwrap_or_default();
        let restored: Cart = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(restored, cart);
    }
}
