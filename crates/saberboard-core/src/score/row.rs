use std::fmt;

use crate::score::ScoreRecord;

/// A ranked line of a song leaderboard, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow<'a> {
    /// 1-based position in the leaderboard
    pub rank: usize,
    pub points: u32,
    pub player: &'a str,
    pub full_combo: bool,
}

impl<'a> ScoreRow<'a> {
    pub fn new(rank: usize, record: &'a ScoreRecord) -> Self {
        Self {
            rank,
            points: record.points(),
            player: record.player(),
            full_combo: record.is_full_combo(),
        }
    }

    pub fn flags(&self) -> &'static str {
        if self.full_combo { "FC" } else { "" }
    }
}

impl fmt::Display for ScoreRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.rank,
            self.points,
            self.player,
            self.flags()
        )
    }
}
