//! Card capture: settle images, rasterize, and package for download.
//!
//! The PNG export renders the profile card as SVG and rasterizes it with
//! resvg. The PDF export wraps that same bitmap in a single page sized to
//! the card. Remote images are settled first: every fetch either resolves
//! to an embedded data URI or is dropped, so the rasterized card never
//! waits on the network and never shows a half-loaded image.

use std::collections::HashMap;
use std::time::Duration;

use printpdf::{ColorBits, ColorSpace, ImageXObject, Mm, PdfDocument, Px};
use steamcard_core::{UserProfile, game_icon_url, recent_games, top_games};

use crate::error::CardError;
use crate::render::components::is_safe_url;
use crate::render::svg::{CardImages, build_card_svg};

/// Per-image fetch deadline. A slow CDN degrades one tile to its
/// placeholder instead of stalling the export.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Limit fetched images to 5MB to avoid memory issues.
const MAX_IMAGE_BYTES: usize = 5_000_000;

/// The card is laid out in CSS pixels; exports keep that scale.
const RENDER_DPI: f64 = 96.0;

const MM_PER_INCH: f64 = 25.4;

/// Render the card for a profile and return encoded PNG bytes.
pub async fn capture_png(
    http: &reqwest::Client,
    profile: &UserProfile,
) -> Result<Vec<u8>, CardError> {
    let images = settle_images(http, profile).await;
    let svg = build_card_svg(profile, &images);
    rasterize(&svg)
}

/// Render the card for a profile and return a single-page PDF.
pub async fn capture_pdf(
    http: &reqwest::Client,
    profile: &UserProfile,
) -> Result<Vec<u8>, CardError> {
    let png = capture_png(http, profile).await?;
    pdf_from_png(&png)
}

/// Fetch the avatar and the visible game icons concurrently.
///
/// Each fetch settles independently; failures leave the corresponding
/// entry empty and the layout falls back to a placeholder.
async fn settle_images(http: &reqwest::Client, profile: &UserProfile) -> CardImages {
    // Icons for the rows the card actually shows, deduplicated by app ID
    // (a top game can also be recently played).
    let mut wanted: Vec<(u32, String)> = Vec::new();
    for game in top_games(profile) {
        wanted.push((game.app_id, game_icon_url(game.app_id, &game.icon)));
    }
    for game in recent_games(profile) {
        if !wanted.iter().any(|(id, _)| *id == game.app_id) {
            wanted.push((game.app_id, game_icon_url(game.app_id, &game.icon)));
        }
    }

    let icon_futs = wanted
        .iter()
        .map(|(app_id, url)| async move { (*app_id, fetch_image(http, url).await) });

    let (avatar, settled) = futures::join!(
        fetch_image(http, &profile.avatar),
        futures::future::join_all(icon_futs),
    );

    let icons: HashMap<u32, String> = settled
        .into_iter()
        .filter_map(|(app_id, uri)| uri.map(|uri| (app_id, uri)))
        .collect();

    CardImages { avatar, icons }
}

/// Fetch an image from a URL, with a timeout.
///
/// Returns the image as a data URI, or `None` if the fetch fails.
async fn fetch_image(http: &reqwest::Client, url: &str) -> Option<String> {
    if !is_safe_url(url) {
        return None;
    }

    let resp = http.get(url).timeout(SETTLE_TIMEOUT).send().await.ok()?;

    if !resp.status().is_success() {
        tracing::debug!(url, status = %resp.status(), "image fetch settled errored");
        return None;
    }

    let bytes = resp.bytes().await.ok()?;
    if bytes.len() > MAX_IMAGE_BYTES {
        tracing::debug!(url, len = bytes.len(), "image too large, dropping");
        return None;
    }

    let mime = detect_image_mime(&bytes);
    let b64 = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &bytes);
    Some(format!("data:{mime};base64,{b64}"))
}

/// Detect MIME type from image bytes (basic magic byte detection).
fn detect_image_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG") {
        "image/png"
    } else if bytes.starts_with(b"\xFF\xD8\xFF") {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.starts_with(b"RIFF") && bytes.get(8..12) == Some(b"WEBP") {
        "image/webp"
    } else {
        // Default to JPEG, the common case for Steam's CDN
        "image/jpeg"
    }
}

/// Parse an SVG document and render it to encoded PNG bytes.
fn rasterize(svg: &str) -> Result<Vec<u8>, CardError> {
    let mut options = resvg::usvg::Options::default();
    // Card text renders through the system font stack.
    options.fontdb_mut().load_system_fonts();

    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|e| CardError::Render(format!("SVG parse error: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| CardError::Render("failed to create pixmap".to_string()))?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| CardError::Render(format!("PNG encode error: {e}")))
}

/// Wrap an encoded PNG in a single-page PDF sized to the image.
///
/// The page dimensions convert the bitmap's pixel size at [`RENDER_DPI`],
/// so the card fills the page edge to edge. The rasterized card is fully
/// opaque, making the alpha-channel drop lossless.
fn pdf_from_png(png: &[u8]) -> Result<Vec<u8>, CardError> {
    let decoded = image::load_from_memory(png)
        .map_err(|e| CardError::Render(format!("PNG decode error: {e}")))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let page_w = Mm(MM_PER_INCH * f64::from(width) / RENDER_DPI);
    let page_h = Mm(MM_PER_INCH * f64::from(height) / RENDER_DPI);

    let (doc, page, layer) = PdfDocument::new("Steam profile card", page_w, page_h, "card");
    let layer_ref = doc.get_page(page).get_layer(layer);

    let card = printpdf::Image::from(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        clipping_bbox: None,
    });
    card.add_to_layer(layer_ref, None, None, None, None, None, Some(RENDER_DPI));

    doc.save_to_bytes()
        .map_err(|e| CardError::Render(format!("PDF assembly error: {e}")))
}
