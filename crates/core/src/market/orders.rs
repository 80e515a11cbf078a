//! Order book.

use crate::models::Order;
use crate::types::{OrderId, OrderStatus, UserId};

use super::MarketError;

/// Every placed order, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Every order.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look up an order.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Insert at the front.
    pub fn push(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Orders placed by one customer.
    pub fn for_customer<'a>(
        &'a self,
        customer: &'a UserId,
    ) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |o| &o.customer_id == customer)
    }

    /// Orders containing at least one line sold by `seller`.
    pub fn for_seller<'a>(&'a self, seller: &'a UserId) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |o| o.includes_seller(seller))
    }

    /// Orders currently in `status`.
    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }

    /// Number of orders in `status`.
    #[must_use]
    pub fn count_with_status(&self, status: OrderStatus) -> usize {
        self.with_status(status).count()
    }

    /// Set the status of one order, returning the previous status.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::OrderNotFound`] for an unknown id.
    pub fn set_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, MarketError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| MarketError::OrderNotFound(id.clone()))?;
        Ok(std::mem::replace(&mut order.status, status))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::Price;

    fn order(customer: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::generate(),
            customer_id: UserId::new(customer),
            items: Vec::new(),
            total: Price::rupees(100),
            status,
            placed_at: Utc::now(),
            shipping: None,
            payment_method: None,
        }
    }

    #[test]
    fn test_push_keeps_newest_first() {
        let mut book = OrderBook::default();
        let first = order("c1", OrderStatus::Pending);
        let second = order("c1", OrderStatus::Pending);
        let second_id = second.id.clone();
        book.push(first);
        book.push(second);

        assert_eq!(book.len(), 2);
        assert_eq!(book.all().first().map(|o| &o.id), Some(&second_id));
    }

    #[test]
    fn test_filters_and_counts() {
        let mut book = OrderBook::default();
        book.push(order("c1", OrderStatus::Pending));
        book.push(order("c2", OrderStatus::Pending));
        book.push(order("c1", OrderStatus::Shipped));

        let c1 = UserId::new("c1");
        assert_eq!(book.for_customer(&c1).count(), 2);
        assert_eq!(book.count_with_status(OrderStatus::Pending), 2);
        assert_eq!(book.count_with_status(OrderStatus::Delivered), 0);
    }

    #[test]
    fn test_set_status_returns_previous() {
        let mut book = OrderBook::default();
        let placed = order("c1", OrderStatus::Pending);
        let id = placed.id.clone();
        book.push(placed);

        let previous = book.set_status(&id, OrderStatus::Processing).unwrap();
        assert_eq!(previous, OrderStatus::Pending);
        assert_eq!(book.get(&id).unwrap().status, OrderStatus::Processing);

        let missing = OrderId::new("ORD-MISSING0");
        assert!(matches!(
            book.set_status(&missing, OrderStatus::Shipped),
            Err(MarketError::OrderNotFound(_))
        ));
    }
}
