//! Score-related types.
//!
//! This module contains the atomic leaderboard entry and its display form:
//! - `ScoreRecord` - one player's validated result
//! - `ScoreRow` - a ranked, printable view of a record

mod record;
mod row;

pub(crate) use record::validate_player;
pub use record::ScoreRecord;
pub use row::*;
