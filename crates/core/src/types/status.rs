//! Status and role enums for marketplace entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// There is no enforced state machine: the admin dashboard may set any
/// status on any order. Customers may only cancel while `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in dashboard display order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire/form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a customer may still cancel the order.
    #[must_use]
    pub const fn is_customer_cancellable(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the order has reached a final state.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("invalid order status: {s}"))
    }
}

/// How the customer chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    Card,
    #[serde(rename = "netbanking")]
    NetBanking,
    #[default]
    Cod,
}

impl PaymentMethod {
    /// Every method, in checkout display order.
    pub const ALL: [Self; 4] = [Self::Upi, Self::Card, Self::NetBanking, Self::Cod];

    /// Wire/form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::Card => "card",
            Self::NetBanking => "netbanking",
            Self::Cod => "cod",
        }
    }

    /// Translation key for the method label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::Card => "card",
            Self::NetBanking => "netBanking",
            Self::Cod => "cod",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| format!("invalid payment method: {s}"))
    }
}

/// Marketplace role of a signed-in visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Guest,
    Customer,
    /// Artisan selling through the marketplace.
    Producer,
    /// The single configured host account.
    Admin,
    /// Staff account; needs admin verification before it can sign in.
    TeamMember,
}

impl UserRole {
    /// Wire/form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Customer => "customer",
            Self::Producer => "producer",
            Self::Admin => "admin",
            Self::TeamMember => "team_member",
        }
    }

    /// Whether the role may manage orders from the admin dashboard.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::TeamMember)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "customer" => Ok(Self::Customer),
            "producer" => Ok(Self::Producer),
            "admin" => Ok(Self::Admin),
            "team_member" => Ok(Self::TeamMember),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_parse() {
        assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_only_pending_is_customer_cancellable() {
        let cancellable: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.is_customer_cancellable())
            .collect();
        assert_eq!(cancellable, vec![OrderStatus::Pending]);
    }

    #[test]
    fn test_payment_method_netbanking_wire_name() {
        assert_eq!(PaymentMethod::NetBanking.as_str(), "netbanking");
        assert_eq!(
            "netbanking".parse::<PaymentMethod>(),
            Ok(PaymentMethod::NetBanking)
        );
    }

    #[test]
    fn test_user_role_roundtrip_through_str() {
        for role in [
            UserRole::Guest,
            UserRole::Customer,
            UserRole::Producer,
            UserRole::Admin,
            UserRole::TeamMember,
        ] {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
    }
}
