//! Producer dashboard route handlers.
//!
//! The add-listing form posts multipart data to `/producer/products`; its
//! "draft description" button posts the same form to `/producer/draft`,
//! which re-renders the dashboard with the drafted text filled in.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use tribal_hub_core::{Category, MarketError, NewProduct, Price, ProductId, User};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireProducer;
use crate::routes::form::{MultipartForm, media_error_key};
use crate::routes::products::CategoryOption;
use crate::routes::{Layout, redirect_error, redirect_notice};
use crate::state::AppState;

const DASHBOARD: &str = "/producer";

/// One of the producer's own listings.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub stock: u32,
    pub review_count: usize,
}

/// Values echoed back into the add-listing form.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

impl ListingDraft {
    fn from_form(form: &MultipartForm) -> Self {
        Self {
            title: form.text("title"),
            price: form.text("price"),
            stock: form.text("stock"),
            description: form.text("description"),
        }
    }
}

/// Producer dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "producer/dashboard.html")]
pub struct DashboardTemplate {
    pub ui: Layout,
    pub shop_name: String,
    pub art_type: String,
    pub listings: Vec<ListingView>,
    pub categories: Vec<CategoryOption>,
    pub draft: ListingDraft,
}

fn selected_category(form: &MultipartForm) -> Category {
    form.text("category").parse().unwrap_or_default()
}

async fn render_dashboard(
    state: &AppState,
    user: &User,
    ui: Layout,
    category: Category,
    draft: ListingDraft,
) -> DashboardTemplate {
    let t = ui.translator();
    let listings = state
        .market()
        .read()
        .await
        .catalog()
        .by_seller(&user.id)
        .map(|p| ListingView {
            id: p.id.to_string(),
            title: p.title.clone(),
            price: p.price.to_string(),
            image: p.cover_image().unwrap_or_default().to_string(),
            category: t.category(p.category).to_string(),
            stock: p.stock,
            review_count: p.reviews.len(),
        })
        .collect();

    DashboardTemplate {
        shop_name: user.shop_name.clone().unwrap_or_else(|| user.name.clone()),
        art_type: user.art_type.clone().unwrap_or_default(),
        listings,
        categories: CategoryOption::all(t, Some(category)),
        draft,
        ui,
    }
}

/// Display the producer's listings and the add-listing form.
#[instrument(skip(state, ui))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    ui: Layout,
) -> impl IntoResponse {
    render_dashboard(
        &state,
        &user,
        ui,
        Category::default(),
        ListingDraft::default(),
    )
    .await
}

/// Draft a description from the title and category in the form.
#[instrument(skip(state, ui, multipart))]
pub async fn draft_description(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    ui: Layout,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let category = selected_category(&form);
    let mut draft = ListingDraft::from_form(&form);

    let drafted = ui.translator().draft_description(&draft.title, category);
    if drafted.is_empty() {
        return Ok(redirect_error(DASHBOARD, "fillFieldsErr").into_response());
    }
    draft.description = drafted;

    Ok(render_dashboard(&state, &user, ui, category, draft)
        .await
        .into_response())
}

/// Publish a new listing with its uploaded images.
#[instrument(skip(state, multipart))]
pub async fn publish(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    multipart: Multipart,
) -> Result<Redirect> {
    let form = MultipartForm::read(multipart).await?;

    let images = match form.store_files("images", state.media()).await {
        Ok(urls) => urls,
        Err(e) => return Ok(redirect_error(DASHBOARD, media_error_key(&e))),
    };

    let listing = NewProduct {
        title: form.text("title"),
        description: form.text("description"),
        price: Price::parse_positive(&form.text("price")),
        category: selected_category(&form),
        images,
        stock: form.text("stock").parse().ok(),
    };

    let result = state.market().write().await.add_product(&user, listing);
    match result {
        Ok(id) => {
            add_breadcrumb("listing", "Published listing", Some(&[("product_id", id.as_str())]));
            tracing::info!(product_id = %id, seller_id = %user.id, "Listing published");
            Ok(redirect_notice(DASHBOARD, "productPublished"))
        }
        Err(e @ MarketError::Invalid(_)) => Ok(redirect_error(DASHBOARD, e.message_key())),
        Err(e) => Err(e.into()),
    }
}

/// Delete one of the producer's own listings.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    let result = state.market().write().await.delete_product(&user, &id);

    match result {
        Ok(product) => {
            tracing::info!(product_id = %id, title = %product.title, "Listing deleted");
            Ok(redirect_notice(DASHBOARD, "productDeleted"))
        }
        Err(e @ (MarketError::Forbidden(_) | MarketError::ProductNotFound(_))) => {
            Ok(redirect_error(DASHBOARD, e.message_key()))
        }
        Err(e) => Err(e.into()),
    }
}
