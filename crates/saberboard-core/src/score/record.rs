use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};

/// Keys the file format stores in dedicated fields
const RESERVED_KEYS: [&str; 4] = ["_score", "_playerName", "_fullCombo", "_timestamp"];

/// One player's result on one leaderboard.
///
/// Records are immutable: edits such as renaming produce a new record.
/// Fields the editor does not understand are kept in `extra` so that a
/// loaded file can be written back without losing information.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    player: String,
    points: u32,
    full_combo: Option<bool>,
    timestamp: Option<i64>,
    extra: Map<String, JsonValue>,
}

impl ScoreRecord {
    pub fn new(player: impl Into<String>, points: i64) -> Result<Self> {
        Self::from_parts(player.into(), points, None, None, Map::new())
    }

    pub(crate) fn from_parts(
        player: String,
        points: i64,
        full_combo: Option<bool>,
        timestamp: Option<i64>,
        extra: Map<String, JsonValue>,
    ) -> Result<Self> {
        validate_player(&player)?;
        let points = u32::try_from(points).map_err(|_| {
            Error::Validation(format!(
                "score {} of player '{}' is out of range",
                points, player
            ))
        })?;

        Ok(Self {
            player,
            points,
            full_combo,
            timestamp,
            extra,
        })
    }

    pub fn with_full_combo(mut self, full_combo: bool) -> Self {
        self.full_combo = Some(full_combo);
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Attach a field carried through untouched on save.
    ///
    /// Keys with a dedicated field (`_score`, `_playerName`, ...) are rejected.
    pub fn with_extra(mut self, key: impl Into<String>, value: JsonValue) -> Result<Self> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(Error::Validation(format!(
                "'{}' cannot be set as an extra field",
                key
            )));
        }
        self.extra.insert(key, value);
        Ok(self)
    }

    /// Whether both records describe the same entry, metadata included
    pub fn same_entry(&self, other: &Self) -> bool {
        self == other
    }

    /// Copy of this record credited to another player
    pub fn renamed(&self, player: &str) -> Result<Self> {
        validate_player(player)?;
        Ok(Self {
            player: player.to_string(),
            ..self.clone()
        })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_full_combo(&self) -> bool {
        self.full_combo.unwrap_or(false)
    }

    /// Full combo flag as stored; `None` when the source had no such field
    pub fn full_combo(&self) -> Option<bool> {
        self.full_combo
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn extra(&self) -> &Map<String, JsonValue> {
        &self.extra
    }
}

pub(crate) fn validate_player(player: &str) -> Result<()> {
    if player.is_empty() {
        return Err(Error::Validation("player name is empty".to_string()));
    }
    Ok(())
}
