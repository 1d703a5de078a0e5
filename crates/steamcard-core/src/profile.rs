//! The profile payload returned by the backend.
//!
//! Field names follow the backend's JSON wire format: the envelope keys are
//! camelCase, while the game entries keep Steam's raw snake_case names
//! (`appid`, `img_icon_url`, `playtime_forever`, `playtime_2weeks`). Unknown
//! fields are ignored and every non-identity field has a default, so the
//! decode boundary tolerates whatever extra data the backend passes through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::STEAM_MEDIA_CDN;

/// A game the user owns, with lifetime playtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGame {
    /// Steam application ID; unique within the list.
    #[serde(rename = "appid")]
    pub app_id: u32,
    /// Display name of the game.
    #[serde(default)]
    pub name: String,
    /// Icon hash used to build the CDN thumbnail URL.
    #[serde(rename = "img_icon_url", default)]
    pub icon: String,
    /// Total playtime in minutes.
    #[serde(rename = "playtime_forever", default)]
    pub playtime_minutes: u64,
}

/// A recently played game, with two-week playtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentGame {
    /// Steam application ID; unique within the list.
    #[serde(rename = "appid")]
    pub app_id: u32,
    /// Display name of the game.
    #[serde(default)]
    pub name: String,
    /// Icon hash used to build the CDN thumbnail URL.
    #[serde(rename = "img_icon_url", default)]
    pub icon: String,
    /// Playtime over the last two weeks, in minutes.
    #[serde(rename = "playtime_2weeks", default)]
    pub recent_minutes: u64,
}

/// One fetched profile snapshot.
///
/// Identity fields are required; everything else defaults. A new lookup
/// replaces the snapshot wholesale; nothing here is ever merged or mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Avatar image URL.
    pub avatar: String,
    /// Persona / display name.
    pub username: String,
    /// Public profile URL (what the QR code encodes).
    pub profile_url: String,
    /// Optional real name.
    #[serde(default)]
    pub real_name: Option<String>,
    /// Optional ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Optional presence status line (e.g. "Online").
    #[serde(default)]
    pub status: Option<String>,
    /// Games the user owns, in backend order.
    #[serde(default)]
    pub games_owned: Vec<OwnedGame>,
    /// Recently played games, in backend order.
    #[serde(default)]
    pub recently_played: Vec<RecentGame>,
    /// Achievement records grouped by an arbitrary category key. Only the
    /// count per category is used; the records themselves stay opaque JSON.
    #[serde(default)]
    pub achievements: BTreeMap<String, Vec<serde_json::Value>>,
}

impl UserProfile {
    /// Parse a profile from a JSON payload string.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body is not valid JSON or is missing
    /// an identity field (`avatar`, `username`, `profileUrl`).
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Build the CDN thumbnail URL for a game icon.
///
/// The URL is fully determined by the app ID and the icon hash; an empty
/// hash still produces a well-formed (if dead) URL, which the image-settle
/// step treats as an errored image.
pub fn game_icon_url(app_id: u32, icon: &str) -> String {
    format!("{STEAM_MEDIA_CDN}/{app_id}/{icon}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A trimmed version of what the backend actually returns, including the
    /// extra Steam fields the model ignores.
    const FULL_PAYLOAD: &str = r#"{
        "avatar": "https://avatars.example/full.jpg",
        "username": "gordon",
        "profileUrl": "https://steamcommunity.com/id/gordon/",
        "realName": "Gordon F.",
        "country": "US",
        "status": "Online",
        "gamesOwned": [
            {"appid": 220, "name": "Half-Life 2", "img_icon_url": "fcfb3",
             "playtime_forever": 1234, "playtime_windows_forever": 1200,
             "rtime_last_played": 1700000000},
            {"appid": 400, "name": "Portal", "img_icon_url": "cfa92",
             "playtime_forever": 310}
        ],
        "recentlyPlayed": [
            {"appid": 620, "name": "Portal 2", "img_icon_url": "d0595",
             "playtime_2weeks": 95, "playtime_forever": 2200}
        ],
        "achievements": {
            "220": [{"apiname": "HL2_KILL_ODESSAGUNSHIP", "achieved": 1}],
            "400": []
        }
    }"#;

    // -- decoding --

    #[test]
    fn decodes_full_payload() {
        let profile = UserProfile::from_json(FULL_PAYLOAD).unwrap();
        assert_eq!(profile.username, "gordon");
        assert_eq!(profile.real_name.as_deref(), Some("Gordon F."));
        assert_eq!(profile.country.as_deref(), Some("US"));
        assert_eq!(profile.status.as_deref(), Some("Online"));
        assert_eq!(profile.games_owned.len(), 2);
        assert_eq!(profile.games_owned[0].app_id, 220);
        assert_eq!(profile.games_owned[0].playtime_minutes, 1234);
        assert_eq!(profile.recently_played[0].recent_minutes, 95);
        assert_eq!(profile.achievements.len(), 2);
    }

    #[test]
    fn decodes_identity_only_payload() {
        let json = r#"{"avatar":"https://a/x.jpg","username":"u","profileUrl":"https://p/"}"#;
        let profile = UserProfile::from_json(json).unwrap();
        assert!(profile.real_name.is_none());
        assert!(profile.games_owned.is_empty());
        assert!(profile.recently_played.is_empty());
        assert!(profile.achievements.is_empty());
    }

    #[test]
    fn rejects_payload_missing_identity() {
        let json = r#"{"username":"u"}"#;
        assert!(UserProfile::from_json(json).is_err());
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(UserProfile::from_json("<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn achievement_records_may_be_arbitrary_json() {
        // Record shape is backend-defined; bare numbers must count too.
        let json = r#"{
            "avatar":"https://a/x.jpg","username":"u","profileUrl":"https://p/",
            "achievements": {"a": [1, 2], "b": [3]}
        }"#;
        let profile = UserProfile::from_json(json).unwrap();
        let total: usize = profile.achievements.values().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn null_optionals_decode_as_none() {
        let json = r#"{
            "avatar":"https://a/x.jpg","username":"u","profileUrl":"https://p/",
            "realName": null, "country": null, "status": null
        }"#;
        let profile = UserProfile::from_json(json).unwrap();
        assert!(profile.real_name.is_none());
        assert!(profile.country.is_none());
    }

    #[test]
    fn negative_playtime_is_rejected() {
        // Playtimes are non-negative by type; a negative value is a decode
        // error rather than a silently wrapped number.
        let json = r#"{
            "avatar":"https://a/x.jpg","username":"u","profileUrl":"https://p/",
            "gamesOwned": [{"appid": 1, "playtime_forever": -5}]
        }"#;
        assert!(UserProfile::from_json(json).is_err());
    }

    // -- icon URLs --

    #[test]
    fn icon_url_is_deterministic() {
        assert_eq!(
            game_icon_url(220, "fcfb3"),
            "https://media.steampowered.com/steamcommunity/public/images/apps/220/fcfb3.jpg"
        );
    }

    #[test]
    fn icon_url_with_empty_hash_is_well_formed() {
        assert_eq!(
            game_icon_url(7, ""),
            "https://media.steampowered.com/steamcommunity/public/images/apps/7/.jpg"
        );
    }
}
