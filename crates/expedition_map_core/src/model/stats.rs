//! Completion statistics derived from an uploaded save.
//!
//! # Responsibility
//! - Hold the three completion counts shown to the player.
//! - Project counts against the game's fixed totals.
//!
//! # Invariants
//! - A `StatsResult` is always recomputed from scratch, never merged.
//! - Percentages are not clamped; a save reporting more than the total
//!   yields more than 100.

use serde::{Deserialize, Serialize};

/// Number of exhibits in the game.
pub const TOTAL_EXHIBITS: usize = 162;
/// Number of huggable friends in the game.
pub const TOTAL_FRIENDS: usize = 60;

/// Completion counts extracted from one save file.
///
/// `Default` is the all-zero state shown before any upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    /// Length of `profile.exhibitsViewed`, duplicates included.
    pub exhibits_viewed_count: usize,
    /// Length of `profile.huggedFriends`, duplicates included.
    pub hugged_friends_count: usize,
    /// Distinct entries in `profile.islandsVisited`.
    pub unique_islands_visited_count: usize,
}

impl StatsResult {
    pub fn summary(&self) -> CompletionSummary {
        CompletionSummary {
            exhibits_viewed: self.exhibits_viewed_count,
            exhibits_total: TOTAL_EXHIBITS,
            exhibit_percentage: rounded_percentage(self.exhibits_viewed_count, TOTAL_EXHIBITS),
            hugged_friends: self.hugged_friends_count,
            friends_total: TOTAL_FRIENDS,
            friend_percentage: rounded_percentage(self.hugged_friends_count, TOTAL_FRIENDS),
            islands_visited: self.unique_islands_visited_count,
        }
    }
}

/// Display projection of a `StatsResult` against fixed totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub exhibits_viewed: usize,
    pub exhibits_total: usize,
    pub exhibit_percentage: u64,
    pub hugged_friends: usize,
    pub friends_total: usize,
    pub friend_percentage: u64,
    /// Islands have no known total; shown as a bare count.
    pub islands_visited: usize,
}

/// Rounds `count / total * 100` half-up.
pub fn rounded_percentage(count: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    let ratio = count as f64 / total as f64 * 100.0;
    (ratio + 0.5).floor() as u64
}
