//! Marketplace entities.
//!
//! Plain records owned by the [`Marketplace`](crate::market::Marketplace).

pub mod order;
pub mod payout;
pub mod product;
pub mod user;

pub use order::{CartItem, Order, ShippingDetails};
pub use payout::PayoutAccount;
pub use product::{NewProduct, Product, Review};
pub use user::{DEFAULT_AVATAR, NewProducer, NewTeamMember, StaffAccount, User};
