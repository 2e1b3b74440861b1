use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::board::{KeepBest, PlayerSummary, SongLeaderboard};
use crate::error::{Error, Result};
use crate::score::{ScoreRecord, validate_player};

/// All song leaderboards of one snapshot, keyed by leaderboard id.
///
/// Songs keep the order in which they were added. Edits (`remove_player`,
/// `rename_player`, `keep_best`) change the collection in place;
/// `filter` and `merge` return independent copies.
///
/// Leaderboards left without records are kept, as the game file does.
/// Call [`prune_empty`](Self::prune_empty) to drop them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardCollection {
    songs: Vec<SongLeaderboard>,
    index: HashMap<String, usize>,
}

impl LeaderboardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaderboard, merging it into an existing one with the same id
    pub fn insert_leaderboard(&mut self, leaderboard: SongLeaderboard) {
        match self.index.get(leaderboard.id()).copied() {
            Some(position) => self.songs[position].merge_from(&leaderboard),
            None => {
                self.index
                    .insert(leaderboard.id().to_string(), self.songs.len());
                self.songs.push(leaderboard);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of records over all songs
    pub fn total_records(&self) -> usize {
        self.songs.iter().map(SongLeaderboard::len).sum()
    }

    pub fn get(&self, id: &str) -> Result<&SongLeaderboard> {
        self.index
            .get(id)
            .map(|&position| &self.songs[position])
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut SongLeaderboard> {
        match self.index.get(id).copied() {
            Some(position) => Ok(&mut self.songs[position]),
            None => Err(Error::NotFound(id.to_string())),
        }
    }

    /// Songs in insertion order
    pub fn get_songs(&self) -> std::slice::Iter<'_, SongLeaderboard> {
        self.songs.iter()
    }

    /// Remove `player` from every song, returning the number of records removed
    pub fn remove_player(&mut self, player: &str) -> usize {
        let removed: usize = self
            .songs
            .iter_mut()
            .map(|song| song.remove_player(player))
            .sum();
        debug!("Removed {} records of {}", removed, player);
        removed
    }

    /// Rename `old` to `new` in every song, returning the number of records renamed.
    ///
    /// Colliding records are left as they are; call `keep_best` afterwards to collapse them.
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<usize> {
        validate_player(new)?;

        let mut renamed = 0;
        for song in &mut self.songs {
            renamed += song.rename_player(old, new)?;
        }
        debug!("Renamed {} records of {} to {}", renamed, old, new);
        Ok(renamed)
    }

    /// Keep each player's best record in every song, returning the number removed
    pub fn keep_best(&mut self) -> usize {
        self.keep_best_with(&KeepBest::default())
    }

    pub fn keep_best_with(&mut self, options: &KeepBest) -> usize {
        let removed: usize = self
            .songs
            .iter_mut()
            .map(|song| song.keep_best_with(options))
            .sum();
        debug!("keep_best removed {} records", removed);
        removed
    }

    /// Keep the best `limit` records of every song.
    ///
    /// Returns the removed records of each song, in song order.
    pub fn truncate(&mut self, limit: usize) -> Vec<Vec<ScoreRecord>> {
        self.songs
            .iter_mut()
            .map(|song| song.truncate(limit))
            .collect()
    }

    /// Whether every song fits the game's leaderboard size
    pub fn is_valid(&self) -> bool {
        self.songs.iter().all(SongLeaderboard::is_valid)
    }

    /// Drop songs without records, returning how many were dropped
    pub fn prune_empty(&mut self) -> usize {
        let before = self.songs.len();
        self.songs.retain(|song| !song.is_empty());
        self.reindex();
        before - self.songs.len()
    }

    /// New collection with only the records of `allowed` players.
    ///
    /// Every song is kept, even when none of its records remain.
    pub fn filter<S: AsRef<str>>(&self, allowed: &[S]) -> Self {
        Self {
            songs: self.songs.iter().map(|song| song.filter(allowed)).collect(),
            index: self.index.clone(),
        }
    }

    /// New collection holding the records of both.
    ///
    /// Songs found in only one side are copied as they are. Songs found in
    /// both are merged: duplicates removed, re-ranked, truncated to capacity,
    /// with `self` winning ties.
    pub fn merge(&self, other: &LeaderboardCollection) -> Self {
        let mut merged = self.clone();
        for song in &other.songs {
            merged.insert_leaderboard(song.clone());
        }
        merged
    }

    /// Merge any number of collections, earlier ones winning ties
    pub fn merge_all<'a, I>(collections: I) -> Self
    where
        I: IntoIterator<Item = &'a LeaderboardCollection>,
    {
        collections
            .into_iter()
            .fold(Self::new(), |merged, next| merged.merge(next))
    }

    /// Entries and total points per player over all songs
    pub fn get_players(&self) -> BTreeMap<String, PlayerSummary> {
        let mut players: BTreeMap<String, PlayerSummary> = BTreeMap::new();
        for record in self.songs.iter().flat_map(SongLeaderboard::iter) {
            players
                .entry(record.player().to_string())
                .or_default()
                .add(record.points());
        }
        players
    }

    /// Number of entries per player over all songs
    pub fn player_counts(&self) -> BTreeMap<String, usize> {
        self.get_players()
            .into_iter()
            .map(|(player, summary)| (player, summary.entries))
            .collect()
    }

    fn reindex(&mut self) {
        self.index = self
            .songs
            .iter()
            .enumerate()
            .map(|(position, song)| (song.id().to_string(), position))
            .collect();
    }
}

impl FromIterator<SongLeaderboard> for LeaderboardCollection {
    fn from_iter<I: IntoIterator<Item = SongLeaderboard>>(iter: I) -> Self {
        let mut collection = Self::new();
        for leaderboard in iter {
            if collection.contains(leaderboard.id()) {
                warn!("Duplicate leaderboard {}, merging", leaderboard.id());
            }
            collection.insert_leaderboard(leaderboard);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a LeaderboardCollection {
    type Item = &'a SongLeaderboard;
    type IntoIter = std::slice::Iter<'a, SongLeaderboard>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}
