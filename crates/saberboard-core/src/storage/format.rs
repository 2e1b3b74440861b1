//! `LocalLeaderboards.dat` JSON codec.
//!
//! ```text
//! { "_leaderboardsData": [ { "_leaderboardId": "...", "_scores": [ {...}, ... ] }, ... ] }
//! ```
//!
//! Score objects need `_score` and `_playerName`. `_fullCombo` and
//! `_timestamp` are read when present, and any other field is carried
//! through untouched. A `null` in either optional field reads as absent,
//! so the key is left out when the record is written back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::{info, warn};

use crate::board::{LeaderboardCollection, SongLeaderboard};
use crate::config::leaderboard::CAPACITY;
use crate::error::{Error, Result};
use crate::score::ScoreRecord;

#[derive(Debug, Serialize, Deserialize)]
struct LeaderboardFile {
    #[serde(rename = "_leaderboardsData")]
    leaderboards: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LeaderboardEntry {
    #[serde(rename = "_leaderboardId")]
    id: String,
    #[serde(rename = "_scores")]
    scores: Vec<ScoreEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreEntry {
    #[serde(rename = "_score")]
    score: i64,
    #[serde(rename = "_playerName")]
    player_name: String,
    #[serde(rename = "_fullCombo", default, skip_serializing_if = "Option::is_none")]
    full_combo: Option<bool>,
    #[serde(rename = "_timestamp", default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(flatten)]
    extra: Map<String, JsonValue>,
}

impl From<&ScoreRecord> for ScoreEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            score: i64::from(record.points()),
            player_name: record.player().to_string(),
            full_combo: record.full_combo(),
            timestamp: record.timestamp(),
            extra: record.extra().clone(),
        }
    }
}

impl LeaderboardEntry {
    fn into_leaderboard(self) -> Result<SongLeaderboard> {
        let id = self.id;
        let records = self
            .scores
            .into_iter()
            .map(|entry| {
                ScoreRecord::from_parts(
                    entry.player_name,
                    entry.score,
                    entry.full_combo,
                    entry.timestamp,
                    entry.extra,
                )
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| match e {
                Error::Validation(message) => Error::Validation(format!("{}: {}", id, message)),
                other => other,
            })?;
        Ok(SongLeaderboard::from_records(id, records))
    }

    fn from_leaderboard(leaderboard: &SongLeaderboard) -> Self {
        if leaderboard.len() > CAPACITY {
            warn!(
                "Leaderboard {} holds {} records, writing the best {}",
                leaderboard.id(),
                leaderboard.len(),
                CAPACITY
            );
        }
        Self {
            id: leaderboard.id().to_string(),
            scores: leaderboard.iter().take(CAPACITY).map(ScoreEntry::from).collect(),
        }
    }
}

/// Parse a leaderboard file.
///
/// Nothing is returned unless every leaderboard and record is valid.
pub fn deserialize(bytes: &[u8]) -> Result<LeaderboardCollection> {
    let text = std::str::from_utf8(bytes)?;
    let file: LeaderboardFile = serde_json::from_str(text)?;

    let collection = file
        .leaderboards
        .into_iter()
        .map(LeaderboardEntry::into_leaderboard)
        .collect::<Result<LeaderboardCollection>>()?;

    info!(
        "Loaded {} leaderboards ({} scores)",
        collection.len(),
        collection.total_records()
    );
    Ok(collection)
}

/// Encode a collection in the game's compact layout
pub fn serialize(collection: &LeaderboardCollection) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&to_file(collection))?)
}

/// Encode a collection with indentation, for inspection
pub fn serialize_pretty(collection: &LeaderboardCollection) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&to_file(collection))?)
}

fn to_file(collection: &LeaderboardCollection) -> LeaderboardFile {
    LeaderboardFile {
        leaderboards: collection
            .get_songs()
            .map(LeaderboardEntry::from_leaderboard)
            .collect(),
    }
}
