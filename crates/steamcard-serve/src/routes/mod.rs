//! Route definitions for the card service.
//!
//! ## Routes
//!
//! - `GET /` - The card page (idle, loading, loaded, or not-found view)
//! - `GET /lookup?steam_id=...` - Start a profile lookup, then redirect home
//! - `GET /card.png` - Download the rendered card as a PNG
//! - `GET /card.pdf` - Download the rendered card as a single-page PDF
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod export;
mod health;
mod home;
mod lookup;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete card service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::card_page))
        .route("/lookup", get(lookup::start_lookup))
        .route("/card.png", get(export::card_png))
        .route("/card.pdf", get(export::card_pdf))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt steering crawlers away from the heavy export routes.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nDisallow: /card.png\nDisallow: /card.pdf\n",
    )
}
