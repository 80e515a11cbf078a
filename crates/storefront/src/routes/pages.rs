//! About page, language switching and the 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tribal_hub_core::Language;

use crate::error::Result;
use crate::filters;
use crate::models::session;
use crate::routes::{Layout, safe_next};

/// A member of the marketplace team on the about page.
#[derive(Debug, Clone, Copy)]
pub struct TeamProfile {
    pub name: &'static str,
    /// Translation key of the job title.
    pub role_key: &'static str,
    pub image: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub bio: &'static str,
}

/// The marketplace team.
pub const TEAM: [TeamProfile; 4] = [
    TeamProfile {
        name: "Sarah Jenkins",
        role_key: "roleOperations",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=400&auto=format&fit=crop",
        email: "sarah.j@tribalheritage.com",
        phone: "+91 98765 00001",
        address: "Mumbai, Maharashtra",
        bio: "Expert in supply chain management with 10 years working with rural artisans.",
    },
    TeamProfile {
        name: "Amit Patel",
        role_key: "roleTech",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&auto=format&fit=crop",
        email: "amit.p@tribalheritage.com",
        phone: "+91 98765 00002",
        address: "Bangalore, Karnataka",
        bio: "Tech enthusiast passionate about bringing digital equity to remote areas.",
    },
    TeamProfile {
        name: "Priya Singh",
        role_key: "roleCommunity",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=400&auto=format&fit=crop",
        email: "priya.s@tribalheritage.com",
        phone: "+91 98765 00003",
        address: "New Delhi, Delhi",
        bio: "Social worker dedicated to tribal welfare and cultural preservation.",
    },
    TeamProfile {
        name: "Rahul Verma",
        role_key: "roleMarketing",
        image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=400&auto=format&fit=crop",
        email: "rahul.v@tribalheritage.com",
        phone: "+91 98765 00004",
        address: "Pune, Maharashtra",
        bio: "Digital marketing specialist focusing on ethical brands.",
    },
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub ui: Layout,
    pub team: &'static [TeamProfile],
    /// Producers and customers do not see staff contact details.
    pub show_contacts: bool,
}

/// Display the about page.
#[instrument(skip(ui))]
pub async fn about(ui: Layout) -> impl IntoResponse {
    let show_contacts = !(ui.is_producer() || ui.is_customer());
    AboutTemplate {
        ui,
        team: &TEAM,
        show_contacts,
    }
}

/// Language switch form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub lang: String,
    pub next: Option<String>,
}

/// Switch the interface language for this visitor.
#[instrument(skip(session))]
pub async fn set_language(session: Session, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    if let Ok(language) = form.lang.parse::<Language>() {
        session::set_language(&session, language).await?;
    }
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub ui: Layout,
}

/// Fallback for unknown paths.
pub async fn not_found(ui: Layout) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate { ui })
}
