//! Admin dashboard route handlers.
//!
//! The dashboard has four tabs selected with `?tab=`: orders, bank,
//! producers and team. Verified team members only see the orders tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tribal_hub_core::{
    MarketError, OrderId, OrderStatus, PayoutAccount, ProductId, UserId, UserRole,
};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{RequireAdmin, RequireStaff};
use crate::models::session::set_pending_seen;
use crate::routes::orders::OrderView;
use crate::routes::{Layout, redirect_error, redirect_notice, safe_next};
use crate::state::AppState;

// =============================================================================
// Tabs
// =============================================================================

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Orders,
    Bank,
    Producers,
    Team,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Orders, Self::Bank, Self::Producers, Self::Team];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Bank => "bank",
            Self::Producers => "producers",
            Self::Team => "team",
        }
    }

    /// Translation key of the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Orders => "orderManagement",
            Self::Bank => "bankDetails",
            Self::Producers => "producers",
            Self::Team => "team",
        }
    }

    fn from_param(param: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| Some(tab.as_str()) == param)
            .unwrap_or_default()
    }

    fn path(self) -> String {
        format!("/admin?tab={}", self.as_str())
    }
}

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
}

// =============================================================================
// View data
// =============================================================================

/// Order count per status.
#[derive(Debug, Clone)]
pub struct StatusCount {
    pub status: &'static str,
    pub count: usize,
}

/// Saved payout account, masked for display.
#[derive(Debug, Clone, Default)]
pub struct BankView {
    pub account_name: String,
    pub bank_name: String,
    pub masked_number: String,
    pub ifsc: String,
    pub upi: String,
    pub updated_at: String,
}

impl From<&PayoutAccount> for BankView {
    fn from(account: &PayoutAccount) -> Self {
        Self {
            account_name: account.account_name.clone(),
            bank_name: account.bank_name.clone(),
            masked_number: account.masked_account_number(),
            ifsc: account.ifsc.clone(),
            upi: account.upi.clone().unwrap_or_default(),
            updated_at: account
                .updated_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// A listing in the producers tab.
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub id: String,
    pub title: String,
    pub price: String,
    pub stock: u32,
}

/// An artisan and their listings.
#[derive(Debug, Clone)]
pub struct ProducerView {
    pub id: String,
    pub name: String,
    pub shop_name: String,
    pub art_type: String,
    pub location: String,
    pub contact: String,
    pub avatar: String,
    pub listings: Vec<ListingSummary>,
}

/// A team member account.
#[derive(Debug, Clone)]
pub struct TeamMemberView {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub contact: String,
    pub verified: bool,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub ui: Layout,
    pub tab: Tab,
    pub tabs: Vec<Tab>,
    pub orders: Vec<OrderView>,
    pub status_counts: Vec<StatusCount>,
    pub statuses: Vec<&'static str>,
    pub bank: Option<BankView>,
    pub producers: Vec<ProducerView>,
    pub team: Vec<TeamMemberView>,
    pub pending_team: usize,
}

impl DashboardTemplate {
    /// Whether `tab` is the one shown.
    #[must_use]
    pub fn is_tab(&self, tab: &str) -> bool {
        self.tab.as_str() == tab
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Display the admin dashboard.
#[instrument(skip(state, ui))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    ui: Layout,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let is_admin = user.role == UserRole::Admin;
    let tab = match Tab::from_param(query.tab.as_deref()) {
        tab if is_admin => tab,
        _ => Tab::Orders,
    };
    let tabs = if is_admin {
        Tab::ALL.to_vec()
    } else {
        vec![Tab::Orders]
    };
    let gst = state.config().gst;

    let market = state.market().read().await;
    let orders = market
        .orders()
        .all()
        .iter()
        .map(|order| OrderView::new(order, gst))
        .collect();
    let status_counts = OrderStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status: status.as_str(),
            count: market.orders().count_with_status(status),
        })
        .collect();

    let (bank, producers, team, pending_team) = if is_admin {
        let directory = market.directory();
        let producers = directory
            .artisans()
            .iter()
            .map(|artisan| ProducerView {
                id: artisan.id.to_string(),
                name: artisan.name.clone(),
                shop_name: artisan.shop_name.clone().unwrap_or_default(),
                art_type: artisan.art_type.clone().unwrap_or_default(),
                location: artisan.location.clone().unwrap_or_default(),
                contact: artisan
                    .contact
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                avatar: artisan.avatar.clone().unwrap_or_default(),
                listings: market
                    .catalog()
                    .by_seller(&artisan.id)
                    .map(|p| ListingSummary {
                        id: p.id.to_string(),
                        title: p.title.clone(),
                        price: p.price.to_string(),
                        stock: p.stock,
                    })
                    .collect(),
            })
            .collect();
        let team = directory
            .team_members()
            .map(|account| TeamMemberView {
                id: account.user.id.to_string(),
                name: account.user.name.clone(),
                username: account.username.clone(),
                email: account
                    .user
                    .email
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                contact: account
                    .user
                    .contact
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                verified: account.verified,
            })
            .collect();
        (
            market.payout_account().map(BankView::from),
            producers,
            team,
            directory.pending_team_members(),
        )
    } else {
        (None, Vec::new(), Vec::new(), 0)
    };
    drop(market);

    DashboardTemplate {
        ui,
        tab,
        tabs,
        orders,
        status_counts,
        statuses: OrderStatus::ALL.iter().map(|s| s.as_str()).collect(),
        bank,
        producers,
        team,
        pending_team,
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Order status form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Set an order's status.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect> {
    let back = Tab::Orders.path();
    let Ok(status) = form.status.parse::<OrderStatus>() else {
        return Ok(redirect_error(&back, "somethingWrong"));
    };
    let id = OrderId::new(id);

    let result = state
        .market()
        .write()
        .await
        .update_order_status(&user, &id, status);

    match result {
        Ok(previous) => {
            add_breadcrumb(
                "order",
                "Status changed",
                Some(&[("order_id", id.as_str()), ("status", status.as_str())]),
            );
            tracing::info!(order_id = %id, from = %previous, to = %status, staff_id = %user.id, "Order status updated");
            Ok(redirect_notice(&back, "statusUpdated"))
        }
        Err(e @ MarketError::OrderNotFound(_)) => Ok(redirect_error(&back, e.message_key())),
        Err(e) => Err(e.into()),
    }
}

/// Dismiss form data.
#[derive(Debug, Deserialize)]
pub struct DismissForm {
    pub next: Option<String>,
}

/// Hide the new-order banner until another order arrives.
#[instrument(skip(state, session))]
pub async fn dismiss_notifications(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    session: Session,
    Form(form): Form<DismissForm>,
) -> Result<Redirect> {
    let pending = state.market().read().await.pending_order_count();
    set_pending_seen(&session, pending).await?;
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

// =============================================================================
// Bank details
// =============================================================================

/// Payout account form data.
#[derive(Debug, Deserialize)]
pub struct BankForm {
    pub account_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
    #[serde(default)]
    pub upi: String,
}

/// Save the host payout account.
#[instrument(skip(state, form))]
pub async fn save_bank(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Form(form): Form<BankForm>,
) -> Result<Redirect> {
    let back = Tab::Bank.path();
    let account = PayoutAccount {
        account_name: form.account_name,
        bank_name: form.bank_name,
        account_number: form.account_number,
        ifsc: form.ifsc,
        upi: Some(form.upi),
        updated_at: None,
    };

    tokio::time::sleep(state.config().save_delay).await;

    let result = state
        .market()
        .write()
        .await
        .set_payout_account(&user, account, Utc::now());

    match result {
        Ok(()) => {
            tracing::info!("Payout account saved");
            Ok(redirect_notice(&back, "bankSaved"))
        }
        Err(e @ MarketError::Invalid(_)) => Ok(redirect_error(&back, e.message_key())),
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Producers & team
// =============================================================================

/// Remove any listing.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let back = Tab::Producers.path();
    let id = ProductId::new(id);
    let result = state.market().write().await.delete_product(&user, &id);

    match result {
        Ok(product) => {
            tracing::info!(product_id = %id, seller_id = %product.seller_id, "Listing removed by admin");
            Ok(redirect_notice(&back, "productDeleted"))
        }
        Err(e @ MarketError::ProductNotFound(_)) => Ok(redirect_error(&back, e.message_key())),
        Err(e) => Err(e.into()),
    }
}

/// Let a registered team member sign in.
#[instrument(skip(state))]
pub async fn verify_team_member(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let back = Tab::Team.path();
    let id = UserId::new(id);
    let result = state.market().write().await.verify_team_member(&user, &id);

    match result {
        Ok(()) => {
            tracing::info!(user_id = %id, "Team member verified");
            Ok(redirect_notice(&back, "verified"))
        }
        Err(e @ MarketError::UserNotFound(_)) => Ok(redirect_error(&back, e.message_key())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_param() {
        assert_eq!(Tab::from_param(Some("bank")), Tab::Bank);
        assert_eq!(Tab::from_param(Some("team")), Tab::Team);
        assert_eq!(Tab::from_param(Some("nope")), Tab::Orders);
        assert_eq!(Tab::from_param(None), Tab::Orders);
    }

    #[test]
    fn test_tab_path() {
        assert_eq!(Tab::Producers.path(), "/admin?tab=producers");
    }
}
