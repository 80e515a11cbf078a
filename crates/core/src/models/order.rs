//! Orders, their line items and shipping details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::types::{OrderId, OrderStatus, PaymentMethod, Price, TaxRate, UserId};

/// A product snapshot with a quantity.
///
/// The product is copied at the time it is added so later catalog edits do
/// not change what the customer saw in their cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Where an order ships to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub phone: String,
}

impl ShippingDetails {
    /// One-line address for dashboards.
    #[must_use]
    pub fn summary(&self) -> String {
        [self.address.as_str(), self.city.as_str(), self.pincode.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub items: Vec<CartItem>,
    /// Σ price × quantity at placement time, before tax.
    pub total: Price,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub shipping: Option<ShippingDetails>,
    pub payment_method: Option<PaymentMethod>,
}

impl Order {
    /// Tax on the order total.
    #[must_use]
    pub fn tax(&self, rate: TaxRate) -> Price {
        self.total.tax(rate)
    }

    /// Total including tax.
    #[must_use]
    pub fn grand_total(&self, rate: TaxRate) -> Price {
        self.total + self.tax(rate)
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Whether any line was sold by `seller`.
    #[must_use]
    pub fn includes_seller(&self, seller: &UserId) -> bool {
        self.items.iter().any(|item| &item.product.seller_id == seller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, ProductId};

    fn line(id: &str, quantity: u32) -> CartItem {
        CartItem {
            product: Product {
                id: ProductId::new(id),
                seller_id: UserId::new("a1"),
                title: format!("Item {id}"),
                description: String::new(),
                price: Price::rupees(10),
                category: Category::Handicrafts,
                images: Vec::new(),
                stock: 1,
                reviews: Vec::new(),
            },
            quantity,
        }
    }

    #[test]
    fn test_unit_count_saturates() {
        let order = Order {
            id: OrderId::new("ORD-1"),
            customer_id: UserId::new("c1"),
            items: vec![line("1", u32::MAX), line("2", 3)],
            total: Price::zero(),
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
            shipping: None,
            payment_method: None,
        };
        assert_eq!(order.unit_count(), u32::MAX);
        assert_eq!(
            order.items.first().map(CartItem::line_total),
            Some(Price::rupees(i64::from(u32::MAX) * 10))
        );
    }

    #[test]
    fn test_summary_skips_blank_parts() {
        let shipping = ShippingDetails {
            full_name: "Priya Sharma".to_string(),
            address: "12 MG Road".to_string(),
            city: String::new(),
            pincode: "411001".to_string(),
            phone: "9876500000".to_string(),
        };
        assert_eq!(shipping.summary(), "12 MG Road, 411001");
    }
}
