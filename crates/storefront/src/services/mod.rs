//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Password hashing for staff accounts and producer OTPs
//! - `media` - In-memory store for uploaded product and profile images

pub mod auth;
pub mod media;
