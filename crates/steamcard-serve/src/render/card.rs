//! The card page body: one view per container state.
//!
//! The loaded view mirrors the export layout: identity header with the QR
//! code, a four-tile stats strip, and the two game columns. Sections backed
//! by empty lists are omitted entirely.

use maud::{Markup, PreEscaped, html};
use steamcard_core::{
    CardStats, OwnedGame, RecentGame, UserProfile, format_playtime, game_icon_url, recent_games,
    top_games,
};

use super::components::{initial, is_safe_url};
use super::qr;
use crate::container::RequestState;

/// Render the body for the current container state.
pub fn state_view(state: &RequestState) -> Markup {
    match state {
        RequestState::Idle => idle_view(),
        RequestState::Loading => loading_view(),
        RequestState::Loaded(profile) => loaded_view(profile),
        RequestState::NotFound => not_found_view(),
    }
}

fn idle_view() -> Markup {
    html! {
        div class="state-msg" {
            p { "Look up a Steam user to generate their card." }
            p class="hint" { "Works with a 17-digit SteamID64 or a custom profile name." }
        }
    }
}

fn loading_view() -> Markup {
    html! {
        div class="state-msg" {
            p { "Looking up the profile..." }
            p class="hint" { "This page refreshes automatically." }
        }
    }
}

fn not_found_view() -> Markup {
    html! {
        div class="state-msg" {
            p { "No profile found for that identifier." }
            p class="hint" { "Check the spelling, and make sure the profile is public." }
        }
    }
}

fn loaded_view(profile: &UserProfile) -> Markup {
    html! {
        (profile_card(profile))
        div class="exports" {
            a class="export-btn" href="/card.png" { "Download PNG" }
            a class="export-btn" href="/card.pdf" { "Download PDF" }
        }
    }
}

/// Render the business card itself.
pub fn profile_card(profile: &UserProfile) -> Markup {
    let stats = CardStats::from_profile(profile);
    let top = top_games(profile);
    let recent = recent_games(profile);

    html! {
        div class="card" {
            div class="card-header" {
                div class="card-id" {
                    div class="card-avatar" {
                        (initial(&profile.username))
                        @if is_safe_url(&profile.avatar) {
                            img src=(profile.avatar) alt=(profile.username)
                                onerror="this.style.display='none'";
                        }
                    }
                    div {
                        h2 class="card-name" { (profile.username) }
                        @if let Some(real_name) = profile.real_name.as_deref() {
                            p class="card-real" { (real_name) }
                        }
                        @if let Some(country) = profile.country.as_deref() {
                            p class="card-country" { "🌍 " (country) }
                        }
                        @if let Some(status) = profile.status.as_deref() {
                            p class="card-status" { (status) }
                        }
                    }
                }
                (qr_tile(&profile.profile_url))
            }

            div class="stats-grid" {
                (stat_tile("🎮", "Games", &stats.total_games.to_string()))
                (stat_tile("🏆", "Achievements", &stats.total_achievements.to_string()))
                (stat_tile("🕹", "Last 2 weeks", &format!("{} h", stats.recent_hours)))
                (stat_tile("⏱", "Hours played", &format!("{} h", stats.total_hours)))
            }

            @if !top.is_empty() || !recent.is_empty() {
                div class="games-grid" {
                    @if !top.is_empty() {
                        div {
                            h3 class="games-title" { "🎯 Top 3 Most Played" }
                            div class="games-list" {
                                @for game in &top {
                                    (game_row(game.app_id, &game.icon, &game.name, game.playtime_minutes))
                                }
                            }
                        }
                    }
                    @if !recent.is_empty() {
                        div {
                            h3 class="games-title" { "🕒 Recently Played" }
                            div class="games-list" {
                                @for game in recent {
                                    (game_row(game.app_id, &game.icon, &game.name, game.recent_minutes))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The white QR tile linking back to the public profile.
///
/// Omitted when the profile URL is empty or the data will not encode.
fn qr_tile(profile_url: &str) -> Markup {
    html! {
        @if !profile_url.is_empty() {
            @if let Some(path) = qr::qr_svg_path(profile_url, 80.0) {
                div class="card-qr" {
                    (PreEscaped(format!(
                        r#"<svg width="80" height="80" viewBox="0 0 80 80" role="img" aria-label="Profile QR code"><path d="{path}" fill="#000"/></svg>"#
                    )))
                }
            }
        }
    }
}

fn stat_tile(emoji: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="stat-tile" {
            p class="stat-emoji" { (emoji) }
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
        }
    }
}

fn game_row(app_id: u32, icon: &str, name: &str, minutes: u64) -> Markup {
    let icon_url = game_icon_url(app_id, icon);
    html! {
        div class="game-row" {
            div class="game-icon" {
                (initial(name))
                img src=(icon_url) alt=(name) onerror="this.style.display='none'";
            }
            div {
                p class="game-name" { (name) }
                p class="game-time" { "⏱ " (format_playtime(minutes)) }
            }
        }
    }
}
