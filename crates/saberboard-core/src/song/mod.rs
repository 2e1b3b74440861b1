//! Song identification types.
//!
//! Leaderboard ids are opaque keys for the data model. This module only
//! turns them into something readable:
//! - `Difficulty` - Easy, Normal, Hard, Expert, Expert+
//! - `Characteristic` - game mode variants (OneSaber, 360Degree, ...)
//! - `SongLabel` - title/difficulty/variant parsed from an id

mod difficulty;
mod label;

pub use difficulty::*;
pub use label::*;
