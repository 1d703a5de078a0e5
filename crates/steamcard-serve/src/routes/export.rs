//! Card downloads: the rendered card as a PNG or a single-page PDF.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::capture;
use crate::error::CardError;
use crate::state::AppState;

/// Download the loaded card as a PNG.
///
/// Without a loaded profile there is nothing to render, so the browser is
/// sent back to the card page.
pub async fn card_png(State(state): State<AppState>) -> Result<Response, CardError> {
    let Some(profile) = state.card.loaded_profile().await else {
        return Ok(Redirect::to("/").into_response());
    };

    let png = capture::capture_png(&state.http, &profile).await?;
    tracing::info!(bytes = png.len(), "png export rendered");
    Ok(download_response("image/png", "profile.png", png))
}

/// Download the loaded card as a single-page PDF.
pub async fn card_pdf(State(state): State<AppState>) -> Result<Response, CardError> {
    let Some(profile) = state.card.loaded_profile().await else {
        return Ok(Redirect::to("/").into_response());
    };

    let pdf = capture::capture_pdf(&state.http, &profile).await?;
    tracing::info!(bytes = pdf.len(), "pdf export rendered");
    Ok(download_response("application/pdf", "steam-profile.pdf", pdf))
}

/// Build an attachment response. Exports reflect mutable lookup state, so
/// caches must never hold them.
fn download_response(content_type: &'static str, filename: &str, body: Vec<u8>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Ok(val) = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\"")) {
        headers.insert(header::CONTENT_DISPOSITION, val);
    }
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (headers, body).into_response()
}
