//! Products and their reviews.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId, ReviewId, UserId};

/// A listing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    /// Image URLs, first one is the cover.
    pub images: Vec<String>,
    pub stock: u32,
    /// Newest first.
    pub reviews: Vec<Review>,
}

impl Product {
    /// Mean rating across reviews, `0.0` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // review counts are tiny
    pub fn average_rating(&self) -> f32 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        sum as f32 / self.reviews.len() as f32
    }

    /// Cover image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether `term` occurs in the title or description, ignoring case.
    ///
    /// An empty term matches everything.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Lowest accepted rating.
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating.
    pub const MAX_RATING: u8 = 5;

    /// Build a review dated `date`, clamping the rating into 1..=5.
    #[must_use]
    pub fn new(
        user_id: UserId,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ReviewId::generate(),
            user_id,
            user_name: user_name.into(),
            rating: rating.clamp(Self::MIN_RATING, Self::MAX_RATING),
            comment: comment.into().trim().to_string(),
            date,
        }
    }
}

/// Producer-submitted listing data, validated by the catalog.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Option<Price>,
    pub category: Category,
    pub images: Vec<String>,
    /// Defaults to 1 when missing or zero.
    pub stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review::new(
            UserId::new("c1"),
            "Priya",
            rating,
            "lovely",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        )
    }

    fn product(reviews: Vec<Review>) -> Product {
        Product {
            id: ProductId::new("1"),
            seller_id: UserId::new("a1"),
            title: "Dhokra Horse".to_string(),
            description: "Lost-wax brass casting from Bastar".to_string(),
            price: Price::rupees(2400),
            category: Category::Statues,
            images: vec!["https://example.com/horse.jpg".to_string()],
            stock: 3,
            reviews,
        }
    }

    #[test]
    fn test_average_rating_without_reviews_is_zero() {
        assert!(product(Vec::new()).average_rating().abs() < f32::EPSILON);
    }

    #[test]
    fn test_average_rating() {
        let p = product(vec![review(5), review(4)]);
        assert!((p.average_rating() - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_review_rating_is_clamped() {
        assert_eq!(review(0).rating, 1);
        assert_eq!(review(9).rating, 5);
    }

    #[test]
    fn test_matches_term_case_insensitive_on_description() {
        let p = product(Vec::new());
        assert!(p.matches_term("BASTAR"));
        assert!(p.matches_term("horse"));
        assert!(p.matches_term(""));
        assert!(!p.matches_term("silk"));
    }
}
