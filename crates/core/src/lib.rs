//! Tribal Art Hub Core - marketplace state and shared types.
//!
//! This crate holds everything shared by the two front ends that does not
//! touch the network:
//! - `tribal-hub-storefront` - Public site, producer dashboard and admin dashboard
//! - `tribal-hub-cli` - Offline inspection of the seed catalog and translations
//!
//! # Architecture
//!
//! The core crate holds plain data and synchronous mutations only - no I/O,
//! no HTTP, no async runtime. The storefront wraps [`market::Marketplace`]
//! in a lock and keeps each visitor's [`market::Cart`] in their session.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, contacts, statuses, categories, languages
//! - [`models`] - Users, products, reviews and orders
//! - [`market`] - The in-memory store and its operations
//! - [`i18n`] - Static translation table and description drafting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod i18n;
pub mod market;
pub mod models;
pub mod types;

pub use market::{Cart, MAX_LINE_QUANTITY, MarketError, Marketplace};
pub use models::*;
pub use types::*;
