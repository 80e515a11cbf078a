//! Core types for Tribal Art Hub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod contact;
pub mod id;
pub mod language;
pub mod price;
pub mod status;

pub use category::Category;
pub use contact::{ContactError, Email, MobileNumber};
pub use id::*;
pub use language::Language;
pub use price::{CurrencyCode, Price, TaxRate};
pub use status::*;
