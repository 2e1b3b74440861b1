use std::fmt;

use crate::song::{Characteristic, Difficulty};

/// Prefix the Quest build puts in front of every leaderboard id.
const QUEST_PREFIX: &str = "Quest";

/// Human-readable view of a leaderboard id.
///
/// Parsing never fails: an id without a recognizable difficulty keeps the
/// whole id as its title. Only used for display; the id itself stays the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongLabel {
    pub title: String,
    pub difficulty: Option<Difficulty>,
    pub characteristic: Option<Characteristic>,
}

impl SongLabel {
    pub fn parse(leaderboard_id: &str) -> Self {
        let Some((rest, difficulty)) = Difficulty::strip_suffix(leaderboard_id) else {
            return Self {
                title: leaderboard_id.to_string(),
                difficulty: None,
                characteristic: None,
            };
        };

        let (rest, characteristic) = match Characteristic::strip_suffix(rest) {
            Some((rest, characteristic)) => (rest, Some(characteristic)),
            None => (rest, None),
        };
        let title = rest.strip_prefix(QUEST_PREFIX).unwrap_or(rest);

        Self {
            title: title.to_string(),
            difficulty: Some(difficulty),
            characteristic,
        }
    }
}

impl fmt::Display for SongLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Song \"{}\"", self.title)?;
        match (self.difficulty, self.characteristic) {
            (Some(difficulty), Some(characteristic)) => {
                write!(f, " ({}, {})", difficulty, characteristic)
            }
            (Some(difficulty), None) => write!(f, " ({})", difficulty),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quest_id() {
        let label = SongLabel::parse("QuestBalearicPumpingExpert+");
        assert_eq!(label.title, "BalearicPumping");
        assert_eq!(label.difficulty, Some(Difficulty::ExpertPlus));
        assert_eq!(label.characteristic, None);
        assert_eq!(label.to_string(), "Song \"BalearicPumping\" (Expert+)");
    }

    #[test]
    fn test_parse_characteristic() {
        let label = SongLabel::parse("QuestEscape360DegreeHard");
        assert_eq!(label.title, "Escape");
        assert_eq!(label.difficulty, Some(Difficulty::Hard));
        assert_eq!(label.characteristic, Some(Characteristic::Degree360));
        assert_eq!(label.to_string(), "Song \"Escape\" (Hard, 360Degree)");
    }

    #[test]
    fn test_parse_without_prefix() {
        let label = SongLabel::parse("custom_level_ABCDEFNormal");
        assert_eq!(label.title, "custom_level_ABCDEF");
        assert_eq!(label.difficulty, Some(Difficulty::Normal));
    }

    #[test]
    fn test_parse_unrecognized_id() {
        let label = SongLabel::parse("SomethingElse");
        assert_eq!(label.title, "SomethingElse");
        assert_eq!(label.difficulty, None);
        assert_eq!(label.to_string(), "Song \"SomethingElse\"");
    }
}
