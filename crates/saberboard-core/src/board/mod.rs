//! Leaderboard data model.
//!
//! - `SongLeaderboard` - ranked, capacity-bounded scores of one song
//! - `LeaderboardCollection` - every song leaderboard of a snapshot
//! - `KeepBest` - options for collapsing a player's records
//! - `PlayerSummary` - per-player aggregate

mod collection;
mod players;
mod song;

pub use collection::*;
pub use players::*;
pub use song::*;
