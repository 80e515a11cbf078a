//! Seed catalog inspection.
//!
//! # Usage
//!
//! ```bash
//! # Every listing, as a table
//! hub-cli catalog list
//!
//! # One category, as JSON
//! hub-cli catalog list --category paintings --json
//!
//! # The artisan directory
//! hub-cli catalog artisans
//! ```

use std::io::Write;

use serde::Serialize;

use tribal_hub_core::market::{Catalog, CategoryFilter, seed};
use tribal_hub_core::{Category, Product};

use super::CommandError;

/// Listing row for JSON output.
#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    id: &'a str,
    title: &'a str,
    category: Category,
    price: String,
    stock: u32,
    seller_id: &'a str,
    rating: f32,
    reviews: usize,
}

impl<'a> From<&'a Product> for ListingRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id.as_str(),
            title: &product.title,
            category: product.category,
            price: product.price.to_string(),
            stock: product.stock,
            seller_id: product.seller_id.as_str(),
            rating: product.average_rating(),
            reviews: product.reviews.len(),
        }
    }
}

/// Print the seed catalog, optionally limited to one category.
///
/// # Errors
///
/// Returns an error for an unknown category or if writing fails.
pub fn list(out: &mut impl Write, category: Option<&str>, json: bool) -> Result<(), CommandError> {
    let filter = match category {
        None | Some("all") => CategoryFilter::All,
        Some(value) => CategoryFilter::Only(
            value
                .parse::<Category>()
                .map_err(CommandError::InvalidArgument)?,
        ),
    };

    let catalog = Catalog::from_products(seed::products());
    let products = catalog.search(filter, "");
    tracing::debug!(count = products.len(), filter = filter.as_str(), "Listing catalog");

    if json {
        let rows: Vec<ListingRow<'_>> = products.iter().map(|p| ListingRow::from(*p)).collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<6} {:<12} {:>10} {:>6}  TITLE", "ID", "CATEGORY", "PRICE", "STOCK")?;
    for product in &products {
        writeln!(
            out,
            "{:<6} {:<12} {:>10} {:>6}  {}",
            product.id,
            product.category,
            product.price.to_string(),
            product.stock,
            product.title
        )?;
    }
    writeln!(out, "{} listing(s)", products.len())?;
    Ok(())
}

/// Print the seed artisan directory.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn artisans(out: &mut impl Write) -> Result<(), CommandError> {
    let catalog = Catalog::from_products(seed::products());

    for artisan in seed::artisans() {
        writeln!(
            out,
            "{}  {} ({})",
            artisan.id,
            artisan.name,
            artisan.shop_name.as_deref().unwrap_or("-")
        )?;
        writeln!(
            out,
            "    {} | {} | {} | {} listing(s)",
            artisan.art_type.as_deref().unwrap_or("-"),
            artisan.location.as_deref().unwrap_or("-"),
            artisan
                .contact
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
            catalog.by_seller(&artisan.id).count()
        )?;
    }
    Ok(())
}
