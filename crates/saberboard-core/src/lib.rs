//! Editing library for Beat Saber local leaderboards.
//!
//! Bytes of a `LocalLeaderboards.dat` file go in through [`deserialize`],
//! get edited as a [`LeaderboardCollection`], and come back out through
//! [`serialize`]. Locating files is left to the caller.

pub mod board;
pub mod config;
pub mod error;
pub mod score;
pub mod song;
pub mod storage;

pub use board::{KeepBest, LeaderboardCollection, PlayerSummary, SongLeaderboard};
pub use error::{Error, Result};
pub use score::{ScoreRecord, ScoreRow};
pub use song::{Characteristic, Difficulty, SongLabel};
pub use storage::{deserialize, serialize, serialize_pretty};
