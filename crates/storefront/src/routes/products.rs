//! Shop and product detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use tribal_hub_core::i18n::Translator;
use tribal_hub_core::market::CategoryFilter;
use tribal_hub_core::{Category, MarketError, Product, ProductId, Review};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::routes::{Layout, redirect_error, redirect_notice};
use crate::state::AppState;

/// Shown when a listing somehow has no image.
const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Product card data for grids.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub rating: f32,
    pub review_count: usize,
    pub in_stock: bool,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, t: Translator) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            price: product.price.to_string(),
            image: product
                .cover_image()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            category: t.category(product.category).to_string(),
            rating: product.average_rating(),
            review_count: product.reviews.len(),
            in_stock: product.stock > 0,
        }
    }
}

/// Category option for filter selects.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

impl CategoryOption {
    /// Every category, marking `selected`.
    #[must_use]
    pub fn all(t: Translator, selected: Option<Category>) -> Vec<Self> {
        Category::ALL
            .iter()
            .map(|&category| Self {
                value: category.as_str(),
                label: t.category(category).to_string(),
                selected: selected == Some(category),
            })
            .collect()
    }
}

/// Shop query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ShopTemplate {
    pub ui: Layout,
    pub products: Vec<ProductCard>,
    pub categories: Vec<CategoryOption>,
    pub all_selected: bool,
    pub term: String,
}

/// Display the catalog, filtered by category and search term.
#[instrument(skip(state, ui))]
pub async fn index(
    State(state): State<AppState>,
    ui: Layout,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    let filter = CategoryFilter::from_param(query.category.as_deref());
    let term = query.q.unwrap_or_default();
    let t = ui.translator();

    let products = {
        let market = state.market().read().await;
        market
            .catalog()
            .search(filter, &term)
            .into_iter()
            .map(|p| ProductCard::new(p, t))
            .collect::<Vec<_>>()
    };

    let selected = match filter {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => Some(category),
    };

    ShopTemplate {
        categories: CategoryOption::all(t, selected),
        all_selected: selected.is_none(),
        products,
        term,
        ui,
    }
}

/// Review display data.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            user_name: review.user_name.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            date: review.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Gallery query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    pub img: Option<usize>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub ui: Layout,
    pub product: ProductCard,
    pub description: String,
    pub images: Vec<String>,
    pub selected_image: usize,
    pub stock: u32,
    pub seller_id: String,
    pub seller_name: String,
    pub reviews: Vec<ReviewView>,
}

impl ProductShowTemplate {
    /// Image shown large in the gallery.
    #[must_use]
    pub fn main_image(&self) -> &str {
        self.images
            .get(self.selected_image)
            .map_or(self.product.image.as_str(), String::as_str)
    }
}

/// Display a product with its gallery and reviews.
#[instrument(skip(state, ui))]
pub async fn show(
    State(state): State<AppState>,
    ui: Layout,
    Path(id): Path<String>,
    Query(query): Query<GalleryQuery>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let t = ui.translator();

    let market = state.market().read().await;
    let product = market
        .product(&id)
        .ok_or_else(|| MarketError::ProductNotFound(id.clone()))?;
    let seller_name = market
        .directory()
        .artisan(&product.seller_id)
        .map(|artisan| artisan.name.clone())
        .unwrap_or_default();

    let images = product.images.clone();
    let selected_image = query.img.filter(|&i| i < images.len()).unwrap_or(0);

    let template = ProductShowTemplate {
        product: ProductCard::new(product, t),
        description: product.description.clone(),
        images,
        selected_image,
        stock: product.stock,
        seller_id: product.seller_id.to_string(),
        seller_name,
        reviews: product.reviews.iter().map(ReviewView::from).collect(),
        ui,
    };
    drop(market);

    Ok(template)
}

/// Review form data.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

/// Add a review to a product.
#[instrument(skip(state))]
pub async fn add_review(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Path(id): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    let back = format!("/products/{id}");

    let result = state.market().write().await.add_review(
        user.as_ref(),
        &id,
        form.rating,
        &form.comment,
        Utc::now().date_naive(),
    );

    match result {
        Ok(review_id) => {
            add_breadcrumb(
                "review",
                "Added review",
                Some(&[("product_id", id.as_str()), ("review_id", review_id.as_str())]),
            );
            Ok(redirect_notice(&back, "reviewAdded"))
        }
        Err(MarketError::NotSignedIn) => Ok(redirect_error("/login", "loginRequired")),
        Err(e @ MarketError::Invalid(_)) => Ok(redirect_error(&back, e.message_key())),
        Err(e) => Err(e.into()),
    }
}
