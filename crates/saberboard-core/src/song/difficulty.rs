use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
    #[strum(to_string = "Expert+", serialize = "ExpertPlus")]
    ExpertPlus,
}

impl Difficulty {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Spellings that can close a leaderboard id
    fn id_suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Easy => &["Easy"],
            Self::Normal => &["Normal"],
            Self::Hard => &["Hard"],
            Self::Expert => &["Expert"],
            Self::ExpertPlus => &["ExpertPlus", "Expert+"],
        }
    }

    /// Split a trailing difficulty off `id`, returning the remaining prefix.
    pub fn strip_suffix(id: &str) -> Option<(&str, Self)> {
        Self::iter().find_map(|difficulty| {
            difficulty
                .id_suffixes()
                .iter()
                .find_map(|suffix| id.strip_suffix(suffix))
                .map(|rest| (rest, difficulty))
        })
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Beatmap characteristic (game mode variant) encoded in a leaderboard id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum Characteristic {
    OneSaber,
    NoArrows,
    #[strum(serialize = "360Degree")]
    Degree360,
    #[strum(serialize = "90Degree")]
    Degree90,
    Lawless,
    Lightshow,
}

impl Characteristic {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn strip_suffix(id: &str) -> Option<(&str, Self)> {
        Self::iter().find_map(|characteristic| {
            id.strip_suffix(characteristic.short_name())
                .map(|rest| (rest, characteristic))
        })
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
