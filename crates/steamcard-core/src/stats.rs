//! Derived display values for the card.
//!
//! All of this is computed fresh from a [`UserProfile`] on every render;
//! given the same profile the results are identical.

use crate::TOP_GAMES;
use crate::profile::{OwnedGame, RecentGame, UserProfile};

/// Aggregate numbers shown in the card's stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStats {
    /// Number of games owned.
    pub total_games: usize,
    /// Flattened count of achievement records across all categories.
    pub total_achievements: usize,
    /// Whole hours of lifetime playtime across all owned games.
    pub total_hours: u64,
    /// Whole hours played over the last two weeks.
    pub recent_hours: u64,
}

impl CardStats {
    /// Compute the stats strip values for a profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let total_minutes: u64 = profile
            .games_owned
            .iter()
            .map(|g| g.playtime_minutes)
            .sum();
        let recent_minutes: u64 = profile
            .recently_played
            .iter()
            .map(|g| g.recent_minutes)
            .sum();

        Self {
            total_games: profile.games_owned.len(),
            total_achievements: profile.achievements.values().map(Vec::len).sum(),
            total_hours: total_minutes / 60,
            recent_hours: recent_minutes / 60,
        }
    }
}

/// The most-played games, in descending playtime order.
///
/// The sort is stable, so games with equal playtime keep their original
/// relative order. At most [`TOP_GAMES`] entries are returned.
pub fn top_games(profile: &UserProfile) -> Vec<&OwnedGame> {
    let mut games: Vec<&OwnedGame> = profile.games_owned.iter().collect();
    games.sort_by(|a, b| b.playtime_minutes.cmp(&a.playtime_minutes));
    games.truncate(TOP_GAMES);
    games
}

/// The first [`TOP_GAMES`] recently played games, in backend order.
pub fn recent_games(profile: &UserProfile) -> &[RecentGame] {
    let n = profile.recently_played.len().min(TOP_GAMES);
    &profile.recently_played[..n]
}

/// Format a minute count for display.
///
/// `0` is "0 min"; otherwise whole hours and leftover minutes are shown,
/// omitting whichever part is zero: "2 h 5 min", "1 h", "59 min".
pub fn format_playtime(minutes: u64) -> String {
    if minutes == 0 {
        return "0 min".to_string();
    }
    let hours = minutes / 60;
    let rem = minutes % 60;
    if hours > 0 && rem > 0 {
        format!("{hours} h {rem} min")
    } else if hours > 0 {
        format!("{hours} h")
    } else {
        format!("{rem} min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(app_id: u32, name: &str, minutes: u64) -> OwnedGame {
        OwnedGame {
            app_id,
            name: name.to_string(),
            icon: String::new(),
            playtime_minutes: minutes,
        }
    }

    fn recent(app_id: u32, name: &str, minutes: u64) -> RecentGame {
        RecentGame {
            app_id,
            name: name.to_string(),
            icon: String::new(),
            recent_minutes: minutes,
        }
    }

    // -- format_playtime() --

    #[test]
    fn format_playtime_zero() {
        assert_eq!(format_playtime(0), "0 min");
    }

    #[test]
    fn format_playtime_minutes_only() {
        assert_eq!(format_playtime(59), "59 min");
    }

    #[test]
    fn format_playtime_whole_hours() {
        assert_eq!(format_playtime(60), "1 h");
        assert_eq!(format_playtime(120), "2 h");
    }

    #[test]
    fn format_playtime_hours_and_minutes() {
        assert_eq!(format_playtime(125), "2 h 5 min");
        assert_eq!(format_playtime(61), "1 h 1 min");
    }

    // -- top_games() --

    #[test]
    fn top_games_sorts_descending_and_truncates() {
        let profile = UserProfile {
            games_owned: vec![
                game(1, "a", 10),
                game(2, "b", 500),
                game(3, "c", 20),
                game(4, "d", 500),
            ],
            ..Default::default()
        };

        let top = top_games(&profile);
        assert_eq!(top.len(), 3);

        // Non-increasing playtimes.
        for pair in top.windows(2) {
            assert!(pair[0].playtime_minutes >= pair[1].playtime_minutes);
        }

        // Ties keep original order: app 2 appeared before app 4.
        assert_eq!(top[0].app_id, 2);
        assert_eq!(top[1].app_id, 4);
        assert_eq!(top[2].app_id, 3);
    }

    #[test]
    fn top_games_fewer_than_limit() {
        let profile = UserProfile {
            games_owned: vec![game(1, "a", 42)],
            ..Default::default()
        };
        let top = top_games(&profile);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].app_id, 1);
    }

    #[test]
    fn top_games_empty_list() {
        let profile = UserProfile::default();
        assert!(top_games(&profile).is_empty());
    }

    // -- recent_games() --

    #[test]
    fn recent_games_keeps_backend_order() {
        let profile = UserProfile {
            recently_played: vec![
                recent(1, "a", 5),
                recent(2, "b", 900),
                recent(3, "c", 30),
                recent(4, "d", 60),
            ],
            ..Default::default()
        };
        let rec = recent_games(&profile);
        assert_eq!(rec.len(), 3);
        // No re-sort: highest playtime stays in slot 1.
        assert_eq!(rec[0].app_id, 1);
        assert_eq!(rec[1].app_id, 2);
        assert_eq!(rec[2].app_id, 3);
    }

    #[test]
    fn recent_games_empty_list() {
        let profile = UserProfile::default();
        assert!(recent_games(&profile).is_empty());
    }

    // -- CardStats --

    #[test]
    fn stats_total_achievements_flattened() {
        let json = r#"{
            "avatar":"https://a/x.jpg","username":"u","profileUrl":"https://p/",
            "achievements": {"a": [1, 2], "b": [3]}
        }"#;
        let profile = UserProfile::from_json(json).unwrap();
        let stats = CardStats::from_profile(&profile);
        assert_eq!(stats.total_achievements, 3);
    }

    #[test]
    fn stats_hours_floor_division() {
        let profile = UserProfile {
            games_owned: vec![game(1, "a", 59), game(2, "b", 60)],
            recently_played: vec![recent(1, "a", 119)],
            ..Default::default()
        };
        let stats = CardStats::from_profile(&profile);
        // 119 total minutes -> 1 hour, floored.
        assert_eq!(stats.total_hours, 1);
        assert_eq!(stats.recent_hours, 1);
    }

    #[test]
    fn stats_empty_profile_is_all_zero() {
        let stats = CardStats::from_profile(&UserProfile::default());
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.total_achievements, 0);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.recent_hours, 0);
    }

    #[test]
    fn stats_counts_games_and_sums_hours() {
        let profile = UserProfile {
            games_owned: vec![game(1, "a", 1234), game(2, "b", 310)],
            ..Default::default()
        };
        let stats = CardStats::from_profile(&profile);
        assert_eq!(stats.total_games, 2);
        // 1544 minutes -> 25 hours.
        assert_eq!(stats.total_hours, 25);
    }
}
