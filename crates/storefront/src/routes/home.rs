//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use tribal_hub_core::Category;
use tribal_hub_core::i18n::Translator;

use crate::filters;
use crate::routes::Layout;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Listings shown under "Featured".
const FEATURED_LIMIT: usize = 4;

/// Artisans shown in the showcase.
const SHOWCASE_LIMIT: usize = 3;

/// Category tile with a cover photo from its first listing.
#[derive(Debug, Clone)]
pub struct CategoryTile {
    pub value: &'static str,
    pub label: String,
    pub image: Option<String>,
}

/// Artisan showcase card.
#[derive(Debug, Clone)]
pub struct ArtisanCard {
    pub name: String,
    pub shop_name: String,
    pub art_type: String,
    pub location: String,
    pub avatar: String,
    pub listing_count: usize,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ui: Layout,
    pub categories: Vec<CategoryTile>,
    pub featured: Vec<ProductCard>,
    pub artisans: Vec<ArtisanCard>,
    pub product_count: usize,
    pub artisan_count: usize,
}

/// Display the home page.
#[instrument(skip(state, ui))]
pub async fn home(State(state): State<AppState>, ui: Layout) -> impl IntoResponse {
    let t: Translator = ui.translator();
    let market = state.market().read().await;
    let catalog = market.catalog();
    let directory = market.directory();

    let categories = Category::ALL
        .iter()
        .map(|&category| CategoryTile {
            value: category.as_str(),
            label: t.category(category).to_string(),
            image: catalog
                .all()
                .iter()
                .find(|p| p.category == category)
                .and_then(|p| p.cover_image())
                .map(String::from),
        })
        .collect();

    let featured = catalog
        .featured(FEATURED_LIMIT)
        .into_iter()
        .map(|p| ProductCard::new(p, t))
        .collect();

    let artisans = directory
        .artisans()
        .iter()
        .take(SHOWCASE_LIMIT)
        .map(|artisan| ArtisanCard {
            name: artisan.name.clone(),
            shop_name: artisan.shop_name.clone().unwrap_or_default(),
            art_type: artisan.art_type.clone().unwrap_or_default(),
            location: artisan.location.clone().unwrap_or_default(),
            avatar: artisan
                .avatar
                .clone()
                .unwrap_or_else(|| tribal_hub_core::DEFAULT_AVATAR.to_string()),
            listing_count: catalog.by_seller(&artisan.id).count(),
        })
        .collect();

    let template = HomeTemplate {
        product_count: catalog.len(),
        artisan_count: directory.artisans().len(),
        categories,
        featured,
        artisans,
        ui,
    };
    drop(market);
    template
}
