//! The card page: the lookup form plus whatever state the last lookup
//! reached.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use maud::html;

use crate::container::RequestState;
use crate::render::card;
use crate::render::components::{self, CSP_HEADER};
use crate::state::AppState;

/// Render the card page for the container's current state.
///
/// While a lookup is in flight the page carries a refresh header, so the
/// finished card appears on the next poll without any scripting.
pub async fn card_page(State(state): State<AppState>) -> Response {
    let snapshot = state.card.snapshot().await;
    let refresh = matches!(snapshot, RequestState::Loading).then_some(1);

    let body = html! {
        (components::lookup_form(&state.config.site_name))
        (card::state_view(&snapshot))
    };
    let markup = components::page_shell(
        &state.config.site_name,
        "Turn a public Steam profile into a shareable business card.",
        refresh,
        body,
        &state.config.site_name,
    );

    build_html_response(&markup.into_string())
}

/// Build an HTTP response with HTML content and security headers.
///
/// The page reflects mutable lookup state, so caches must never hold it.
fn build_html_response(html: &str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (StatusCode::OK, headers, html.to_string()).into_response()
}
