//! Core types and derived statistics for the steamcard service.
//!
//! This crate provides:
//! - The `UserProfile` wire model returned by the backend, with a tolerant
//!   serde boundary (unknown fields ignored, missing optionals defaulted)
//! - Derived card statistics (game/achievement totals, top played lists,
//!   hour sums) and the playtime display format
//! - Steam CDN thumbnail URL construction
//!
//! Everything here is pure: no I/O, no shared state. The HTTP service in
//! `steamcard-serve` layers fetching and rendering on top.

mod profile;
mod stats;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Base address for Steam's public app image CDN. Game thumbnails live at
/// `{base}/{appid}/{icon_hash}.jpg`.
pub const STEAM_MEDIA_CDN: &str =
    "https://media.steampowered.com/steamcommunity/public/images/apps";

/// How many games the card shows in each list (top played / recent).
pub const TOP_GAMES: usize = 3;

pub use profile::{OwnedGame, RecentGame, UserProfile, game_icon_url};
pub use stats::{CardStats, format_playtime, recent_games, top_games};
