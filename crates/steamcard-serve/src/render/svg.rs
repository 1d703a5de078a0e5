//! The export card layout as a standalone SVG document.
//!
//! This is the same card the page shows, laid out with fixed geometry so it
//! can be rasterized. All referenced images arrive pre-settled as data URIs;
//! a reference without one renders the initial-letter placeholder instead,
//! never a blank region. Every pixel of the canvas is painted opaque so the
//! bitmap also embeds cleanly in the PDF export.

use std::collections::HashMap;

use steamcard_core::{CardStats, UserProfile, format_playtime, recent_games, top_games};

use super::components::{initial, truncate};
use super::qr;

/// Canvas width; matches the page card's maximum width.
pub const CARD_WIDTH: u32 = 896;

const PAD: f64 = 24.0;
const GAP: f64 = 24.0;
const HEADER_H: f64 = 96.0;
const AVATAR_SIZE: f64 = 80.0;
const QR_TILE: f64 = 96.0;
const QR_SIZE: f64 = 80.0;
const STATS_H: f64 = 88.0;
const STAT_GAP: f64 = 16.0;
const TITLE_H: f64 = 36.0;
const ROW_H: f64 = 72.0;
const ROW_GAP: f64 = 12.0;
const ICON_SIZE: f64 = 48.0;
const COL_GAP: f64 = 24.0;

const PAGE_BG: &str = "#111827";
const PANEL: &str = "#030712";
const TILE: &str = "#1f2937";
const TILE2: &str = "#374151";
const TEXT: &str = "#ffffff";
const TEXT_SOFT: &str = "#d1d5db";
const TEXT_FAINT: &str = "#9ca3af";
const ACCENT: &str = "#a855f7";
const ACCENT_SOFT: &str = "#c084fc";
const ACCENT_FAINT: &str = "#d8b4fe";

/// Font family string for SVG text (sans single quotes that confuse `format!`).
const FONT_FAMILY: &str = "Inter, -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, sans-serif";

/// Images settled for embedding.
#[derive(Debug, Default)]
pub struct CardImages {
    /// Avatar data URI, when its fetch settled loaded.
    pub avatar: Option<String>,
    /// Game icon data URIs by app ID; a missing entry settled errored.
    pub icons: HashMap<u32, String>,
}

/// Pixel dimensions of the card for a profile.
///
/// The height varies with the number of game rows; a profile without any
/// games drops the whole section.
pub fn card_dimensions(profile: &UserProfile) -> (u32, u32) {
    let rows = top_games(profile).len().max(recent_games(profile).len());
    let mut height = PAD + HEADER_H + GAP + STATS_H + PAD;
    if rows > 0 {
        height += GAP + TITLE_H + rows as f64 * ROW_H + (rows as f64 - 1.0) * ROW_GAP;
    }
    (CARD_WIDTH, height as u32)
}

/// Build the card as an SVG document string.
pub fn build_card_svg(profile: &UserProfile, images: &CardImages) -> String {
    let stats = CardStats::from_profile(profile);
    let top: Vec<(u32, &str, u64)> = top_games(profile)
        .iter()
        .map(|g| (g.app_id, g.name.as_str(), g.playtime_minutes))
        .collect();
    let recent: Vec<(u32, &str, u64)> = recent_games(profile)
        .iter()
        .map(|g| (g.app_id, g.name.as_str(), g.recent_minutes))
        .collect();

    let (width, height) = card_dimensions(profile);
    let w = f64::from(width);
    let h = f64::from(height);

    let mut svg = String::with_capacity(16 * 1024);
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##
    ));

    // Page backdrop behind the rounded panel keeps the corners opaque.
    svg.push_str(&format!(
        r##"<rect width="{w}" height="{h}" fill="{PAGE_BG}"/><rect width="{w}" height="{h}" rx="16" fill="{PANEL}"/>"##
    ));

    push_header(&mut svg, profile, images, w);
    push_stats_strip(&mut svg, &stats, w);
    push_games_section(&mut svg, &top, &recent, images, w);

    svg.push_str("</svg>");
    svg
}

/// Avatar, identity lines, and the QR tile.
fn push_header(svg: &mut String, profile: &UserProfile, images: &CardImages, w: f64) {
    let r = AVATAR_SIZE / 2.0;
    let cx = PAD + r;
    let cy = PAD + HEADER_H / 2.0;

    match &images.avatar {
        Some(uri) => {
            svg.push_str(&format!(
                r##"<defs><clipPath id="avatar-clip"><circle cx="{cx}" cy="{cy}" r="{r}"/></clipPath></defs><image href="{uri}" x="{x}" y="{y}" width="{AVATAR_SIZE}" height="{AVATAR_SIZE}" clip-path="url(#avatar-clip)" preserveAspectRatio="xMidYMid slice"/>"##,
                x = cx - r,
                y = cy - r,
            ));
        }
        None => {
            svg.push_str(&format!(
                r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{TILE2}"/><text x="{cx}" y="{ty}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="32" font-weight="700" fill="{TEXT_SOFT}">{letter}</text>"##,
                ty = cy + 11.0,
                letter = xml_escape(&initial(&profile.username)),
            ));
        }
    }
    svg.push_str(&format!(
        r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{ACCENT}" stroke-width="2"/>"##
    ));

    let tx = PAD + AVATAR_SIZE + 16.0;
    let mut line_y = PAD + 34.0;
    svg.push_str(&format!(
        r##"<text x="{tx}" y="{line_y}" font-family="{FONT_FAMILY}" font-size="30" font-weight="700" fill="{ACCENT_SOFT}">{name}</text>"##,
        name = xml_escape(&profile.username),
    ));
    if let Some(real_name) = profile.real_name.as_deref() {
        line_y += 22.0;
        svg.push_str(&format!(
            r##"<text x="{tx}" y="{line_y}" font-family="{FONT_FAMILY}" font-size="14" fill="{TEXT_SOFT}">{text}</text>"##,
            text = xml_escape(real_name),
        ));
    }
    if let Some(country) = profile.country.as_deref() {
        line_y += 18.0;
        svg.push_str(&format!(
            r##"<text x="{tx}" y="{line_y}" font-family="{FONT_FAMILY}" font-size="12" fill="{TEXT_FAINT}">{text}</text>"##,
            text = xml_escape(country),
        ));
    }
    if let Some(status) = profile.status.as_deref() {
        line_y += 16.0;
        svg.push_str(&format!(
            r##"<text x="{tx}" y="{line_y}" font-family="{FONT_FAMILY}" font-size="12" fill="{TEXT_FAINT}">{text}</text>"##,
            text = xml_escape(status),
        ));
    }

    if !profile.profile_url.is_empty()
        && let Some(path) = qr::qr_svg_path(&profile.profile_url, QR_SIZE)
    {
        let qx = w - PAD - QR_TILE;
        let qy = PAD;
        let inset = (QR_TILE - QR_SIZE) / 2.0;
        svg.push_str(&format!(
            r##"<rect x="{qx}" y="{qy}" width="{QR_TILE}" height="{QR_TILE}" rx="12" fill="#fff"/><path transform="translate({px} {py})" d="{path}" fill="#000"/>"##,
            px = qx + inset,
            py = qy + inset,
        ));
    }
}

/// The four-tile stats strip.
fn push_stats_strip(svg: &mut String, stats: &CardStats, w: f64) {
    let y = PAD + HEADER_H + GAP;
    let tile_w = (w - 2.0 * PAD - 3.0 * STAT_GAP) / 4.0;

    let tiles = [
        ("Games", stats.total_games.to_string()),
        ("Achievements", stats.total_achievements.to_string()),
        ("Last 2 weeks", format!("{} h", stats.recent_hours)),
        ("Hours played", format!("{} h", stats.total_hours)),
    ];

    for (i, (label, value)) in tiles.iter().enumerate() {
        let x = PAD + i as f64 * (tile_w + STAT_GAP);
        let cx = x + tile_w / 2.0;
        svg.push_str(&format!(
            r##"<rect x="{x}" y="{y}" width="{tile_w}" height="{STATS_H}" rx="12" fill="{TILE}"/><text x="{cx}" y="{ly}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="14" fill="{TEXT_SOFT}">{label}</text><text x="{cx}" y="{vy}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="20" font-weight="700" fill="{TEXT}">{value}</text>"##,
            ly = y + 36.0,
            vy = y + 64.0,
            value = xml_escape(value),
        ));
    }
}

/// The two game columns; omitted entirely when both lists are empty.
fn push_games_section(
    svg: &mut String,
    top: &[(u32, &str, u64)],
    recent: &[(u32, &str, u64)],
    images: &CardImages,
    w: f64,
) {
    if top.is_empty() && recent.is_empty() {
        return;
    }

    let y = PAD + HEADER_H + GAP + STATS_H + GAP;
    let col_w = (w - 2.0 * PAD - COL_GAP) / 2.0;

    if !top.is_empty() {
        push_game_column(svg, "Top 3 Most Played", (PAD, y), col_w, top, images, "top");
    }
    if !recent.is_empty() {
        push_game_column(
            svg,
            "Recently Played",
            (PAD + col_w + COL_GAP, y),
            col_w,
            recent,
            images,
            "recent",
        );
    }
}

fn push_game_column(
    svg: &mut String,
    title: &str,
    (x, y): (f64, f64),
    col_w: f64,
    rows: &[(u32, &str, u64)],
    images: &CardImages,
    id_prefix: &str,
) {
    svg.push_str(&format!(
        r##"<text x="{x}" y="{ty}" font-family="{FONT_FAMILY}" font-size="18" font-weight="600" fill="{ACCENT_FAINT}">{title}</text>"##,
        ty = y + 20.0,
    ));

    for (j, (app_id, name, minutes)) in rows.iter().enumerate() {
        let ry = y + TITLE_H + j as f64 * (ROW_H + ROW_GAP);
        svg.push_str(&format!(
            r##"<rect x="{x}" y="{ry}" width="{col_w}" height="{ROW_H}" rx="8" fill="{TILE}"/>"##
        ));

        let ix = x + 12.0;
        let iy = ry + 12.0;
        match images.icons.get(app_id) {
            Some(uri) => {
                svg.push_str(&format!(
                    r##"<defs><clipPath id="{id_prefix}{j}-clip"><rect x="{ix}" y="{iy}" width="{ICON_SIZE}" height="{ICON_SIZE}" rx="4"/></clipPath></defs><image href="{uri}" x="{ix}" y="{iy}" width="{ICON_SIZE}" height="{ICON_SIZE}" clip-path="url(#{id_prefix}{j}-clip)" preserveAspectRatio="xMidYMid slice"/>"##
                ));
            }
            None => {
                svg.push_str(&format!(
                    r##"<rect x="{ix}" y="{iy}" width="{ICON_SIZE}" height="{ICON_SIZE}" rx="4" fill="{TILE2}"/><text x="{cx}" y="{cy}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="20" font-weight="700" fill="{ACCENT_FAINT}">{letter}</text>"##,
                    cx = ix + ICON_SIZE / 2.0,
                    cy = iy + ICON_SIZE / 2.0 + 7.0,
                    letter = xml_escape(&initial(name)),
                ));
            }
        }

        let text_x = x + 12.0 + ICON_SIZE + 12.0;
        svg.push_str(&format!(
            r##"<text x="{text_x}" y="{ny}" font-family="{FONT_FAMILY}" font-size="14" font-weight="500" fill="{TEXT}">{name}</text><text x="{text_x}" y="{py}" font-family="{FONT_FAMILY}" font-size="12" fill="{TEXT_FAINT}">{time}</text>"##,
            ny = ry + 32.0,
            py = ry + 54.0,
            name = xml_escape(&truncate(name, 42)),
            time = format_playtime(*minutes),
        ));
    }
}

/// Escape text for SVG text nodes and attribute values.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
