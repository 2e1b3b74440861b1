use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::warn;

use crate::config::leaderboard::CAPACITY;
use crate::error::Result;
use crate::score::{ScoreRecord, ScoreRow, validate_player};
use crate::song::SongLabel;

/// Options for [`SongLeaderboard::keep_best_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepBest {
    /// Also keep a player's best full combo when their best score is not one
    pub keep_full_combo: bool,
    /// Only clean the records of this player
    pub player: Option<String>,
}

impl KeepBest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_full_combo(mut self, keep: bool) -> Self {
        self.keep_full_combo = keep;
        self
    }

    pub fn only_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }
}

/// Ranked scores of one song, difficulty and characteristic.
///
/// Records are kept sorted by descending points. Equal scores keep their
/// insertion order. The leaderboard never holds more than `capacity` records.
#[derive(Debug, Clone, PartialEq)]
pub struct SongLeaderboard {
    id: String,
    records: Vec<ScoreRecord>,
    capacity: usize,
}

impl SongLeaderboard {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_capacity(id, CAPACITY)
    }

    pub fn with_capacity(id: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            records: Vec::new(),
            capacity,
        }
    }

    /// Build a leaderboard from records in any order.
    ///
    /// Records are stably sorted, then anything past the capacity is dropped.
    pub fn from_records(id: impl Into<String>, records: Vec<ScoreRecord>) -> Self {
        let mut leaderboard = Self {
            id: id.into(),
            records,
            capacity: CAPACITY,
        };
        leaderboard.sort();

        let dropped = leaderboard.truncate(leaderboard.capacity);
        if !dropped.is_empty() {
            warn!(
                "Leaderboard {} had {} records over capacity, dropped",
                leaderboard.id,
                dropped.len()
            );
        }
        leaderboard
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRecord> {
        self.records.iter()
    }

    /// Readable title/difficulty parsed from the id
    pub fn label(&self) -> SongLabel {
        SongLabel::parse(&self.id)
    }

    /// Insert a record at its rank.
    ///
    /// Returns the record pushed off the bottom when the leaderboard was full.
    pub fn insert(&mut self, record: ScoreRecord) -> Option<ScoreRecord> {
        let position = self
            .records
            .partition_point(|existing| existing.points() >= record.points());
        self.records.insert(position, record);

        if self.records.len() > self.capacity {
            self.records.pop()
        } else {
            None
        }
    }

    /// Remove every record of `player`, returning how many were removed
    pub fn remove_player(&mut self, player: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.player() != player);
        before - self.records.len()
    }

    /// Credit every record of `old` to `new`.
    ///
    /// Points are unchanged so the order holds. Records that now share a
    /// player are not collapsed; use [`keep_best`](Self::keep_best) for that.
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<usize> {
        validate_player(new)?;

        let mut renamed = 0;
        for record in self.records.iter_mut().filter(|r| r.player() == old) {
            *record = record.renamed(new)?;
            renamed += 1;
        }
        Ok(renamed)
    }

    /// Keep only the best record of each player, returning how many were removed
    pub fn keep_best(&mut self) -> usize {
        self.keep_best_with(&KeepBest::default())
    }

    pub fn keep_best_with(&mut self, options: &KeepBest) -> usize {
        // Records are sorted, so the first one seen for a player is their best
        // and the earliest among equal scores.
        let keep: Vec<bool> = {
            let mut seen: HashMap<&str, bool> = HashMap::new();
            self.records
                .iter()
                .map(|record| {
                    if options
                        .player
                        .as_deref()
                        .is_some_and(|only| only != record.player())
                    {
                        return true;
                    }
                    match seen.entry(record.player()) {
                        Entry::Vacant(slot) => {
                            slot.insert(record.is_full_combo());
                            true
                        }
                        Entry::Occupied(mut slot) => {
                            let first_full_combo = options.keep_full_combo
                                && !*slot.get()
                                && record.is_full_combo();
                            if first_full_combo {
                                slot.insert(true);
                            }
                            first_full_combo
                        }
                    }
                })
                .collect()
        };

        let before = self.records.len();
        let mut keep = keep.into_iter();
        self.records.retain(|_| keep.next().unwrap_or(true));
        before - self.records.len()
    }

    /// New leaderboard holding only the records of `allowed` players
    pub fn filter<S: AsRef<str>>(&self, allowed: &[S]) -> Self {
        Self {
            id: self.id.clone(),
            records: self
                .records
                .iter()
                .filter(|record| allowed.iter().any(|name| name.as_ref() == record.player()))
                .cloned()
                .collect(),
            capacity: self.capacity,
        }
    }

    /// Keep the best `limit` records, returning the removed ones
    pub fn truncate(&mut self, limit: usize) -> Vec<ScoreRecord> {
        if self.records.len() > limit {
            self.records.split_off(limit)
        } else {
            Vec::new()
        }
    }

    /// Whether the game would accept this leaderboard
    pub fn is_valid(&self) -> bool {
        self.records.len() <= CAPACITY
    }

    /// Number of records held by each player
    pub fn player_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.player().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Ranked rows for display
    pub fn rows(&self) -> impl Iterator<Item = ScoreRow<'_>> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| ScoreRow::new(i + 1, record))
    }

    /// Fold `other` into this leaderboard.
    ///
    /// Own records come first among equal scores. Exact duplicates are dropped
    /// and the smaller capacity of the two applies.
    pub(crate) fn merge_from(&mut self, other: &SongLeaderboard) {
        self.capacity = self.capacity.min(other.capacity);

        let combined = std::mem::take(&mut self.records);
        let mut merged: Vec<ScoreRecord> = Vec::with_capacity(combined.len() + other.len());
        for record in combined.into_iter().chain(other.records.iter().cloned()) {
            if !merged.iter().any(|kept| kept.same_entry(&record)) {
                merged.push(record);
            }
        }
        self.records = merged;
        self.sort();
        self.truncate(self.capacity);
    }

    fn sort(&mut self) {
        // Stable: equal scores keep their relative order
        self.records.sort_by(|a, b| b.points().cmp(&a.points()));
    }
}

impl fmt::Display for SongLeaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl<'a> IntoIterator for &'a SongLeaderboard {
    type Item = &'a ScoreRecord;
    type IntoIter = std::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SONG: &str = "QuestBeatSaberExpert";

    fn record(player: &str, points: i64) -> ScoreRecord {
        ScoreRecord::new(player, points).unwrap()
    }

    fn leaderboard(entries: &[(&str, i64)]) -> SongLeaderboard {
        let mut lb = SongLeaderboard::new(SONG);
        for &(player, points) in entries {
            lb.insert(record(player, points));
        }
        lb
    }

    fn players(lb: &SongLeaderboard) -> Vec<&str> {
        lb.iter().map(|r| r.player()).collect()
    }

    fn assert_sorted(lb: &SongLeaderboard) {
        assert!(
            lb.records()
                .windows(2)
                .all(|w| w[0].points() >= w[1].points())
        );
        assert!(lb.len() <= lb.capacity());
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let lb = leaderboard(&[("a", 100), ("b", 300), ("c", 200)]);
        assert_eq!(players(&lb), vec!["b", "c", "a"]);
        assert_sorted(&lb);
    }

    #[test]
    fn test_insert_is_stable_on_ties() {
        let lb = leaderboard(&[("first", 100), ("second", 100), ("third", 100)]);
        assert_eq!(players(&lb), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_insert_truncates_at_capacity() {
        let mut lb = SongLeaderboard::new(SONG);
        for i in 0..CAPACITY as i64 {
            assert!(lb.insert(record("p", 1000 + i)).is_none());
        }
        assert_eq!(lb.len(), CAPACITY);

        // Better score evicts the lowest one
        let evicted = lb.insert(record("top", 5000)).unwrap();
        assert_eq!(evicted.points(), 1000);
        assert_eq!(lb.len(), CAPACITY);
        assert_eq!(lb.records()[0].player(), "top");

        // A score below everything is evicted immediately
        let evicted = lb.insert(record("low", 1)).unwrap();
        assert_eq!(evicted.player(), "low");
        assert_sorted(&lb);
    }

    #[test]
    fn test_insert_tie_at_capacity_evicts_newcomer() {
        let mut lb = SongLeaderboard::with_capacity(SONG, 2);
        lb.insert(record("a", 100));
        lb.insert(record("b", 100));
        let evicted = lb.insert(record("c", 100)).unwrap();
        assert_eq!(evicted.player(), "c");
    }

    #[test]
    fn test_from_records_sorts_and_truncates() {
        let records = (0..15).map(|i| record("p", i)).collect();
        let lb = SongLeaderboard::from_records(SONG, records);
        assert_eq!(lb.len(), CAPACITY);
        assert_eq!(lb.records()[0].points(), 14);
        assert_eq!(lb.records()[CAPACITY - 1].points(), 5);
        assert_sorted(&lb);
    }

    #[test]
    fn test_duplicates_preserved() {
        let lb = leaderboard(&[("a", 100), ("a", 100)]);
        assert_eq!(lb.len(), 2);
    }

    #[test]
    fn test_remove_player() {
        let mut lb = leaderboard(&[("a", 100), ("b", 90), ("a", 80)]);
        assert_eq!(lb.remove_player("a"), 2);
        assert_eq!(players(&lb), vec!["b"]);
    }

    #[test]
    fn test_remove_player_is_case_sensitive() {
        let mut lb = leaderboard(&[("Alice", 100)]);
        assert_eq!(lb.remove_player("alice"), 0);
        assert_eq!(lb.len(), 1);
    }

    #[test]
    fn test_remove_absent_player_is_noop() {
        let mut lb = leaderboard(&[("a", 100)]);
        assert_eq!(lb.remove_player("zzz"), 0);
        assert_eq!(lb.len(), 1);
    }

    #[test]
    fn test_rename_player() {
        let mut lb = leaderboard(&[("alcie", 300), ("alice", 200), ("alcie", 100)]);
        assert_eq!(lb.rename_player("alcie", "alice").unwrap(), 2);
        assert_eq!(players(&lb), vec!["alice", "alice", "alice"]);
        // No automatic collapsing
        assert_eq!(lb.len(), 3);
        assert_sorted(&lb);
    }

    #[test]
    fn test_rename_to_empty_fails_without_changes() {
        let mut lb = leaderboard(&[("alcie", 300)]);
        assert!(matches!(
            lb.rename_player("alcie", ""),
            Err(Error::Validation(_))
        ));
        assert_eq!(players(&lb), vec!["alcie"]);
    }

    #[test]
    fn test_keep_best() {
        let mut lb = leaderboard(&[("a", 100), ("b", 300), ("a", 250), ("b", 50), ("c", 10)]);
        assert_eq!(lb.keep_best(), 2);
        assert_eq!(players(&lb), vec!["b", "a", "c"]);
        assert_eq!(lb.records()[1].points(), 250);
        assert_sorted(&lb);
    }

    #[test]
    fn test_keep_best_tie_keeps_earliest() {
        let mut lb = SongLeaderboard::new(SONG);
        lb.insert(record("a", 100).with_timestamp(1));
        lb.insert(record("a", 100).with_timestamp(2));
        lb.keep_best();
        assert_eq!(lb.len(), 1);
        assert_eq!(lb.records()[0].timestamp(), Some(1));
    }

    #[test]
    fn test_keep_best_idempotent() {
        let mut lb = leaderboard(&[("a", 100), ("a", 90), ("b", 80), ("b", 95)]);
        lb.keep_best();
        let once = lb.clone();
        assert_eq!(lb.keep_best(), 0);
        assert_eq!(lb, once);
    }

    #[test]
    fn test_keep_best_with_full_combo() {
        let mut lb = SongLeaderboard::new(SONG);
        lb.insert(record("a", 300));
        lb.insert(record("a", 200).with_full_combo(true));
        lb.insert(record("a", 100).with_full_combo(true));
        lb.insert(record("b", 250).with_full_combo(true));
        lb.insert(record("b", 150).with_full_combo(true));

        let removed = lb.keep_best_with(&KeepBest::new().keep_full_combo(true));
        assert_eq!(removed, 2);
        let kept: Vec<(&str, u32)> = lb.iter().map(|r| (r.player(), r.points())).collect();
        assert_eq!(kept, vec![("a", 300), ("b", 250), ("a", 200)]);
    }

    #[test]
    fn test_keep_best_only_player() {
        let mut lb = leaderboard(&[("a", 300), ("a", 200), ("b", 250), ("b", 150)]);
        let removed = lb.keep_best_with(&KeepBest::new().only_player("a"));
        assert_eq!(removed, 1);
        assert_eq!(players(&lb), vec!["a", "b", "b"]);
    }

    #[test]
    fn test_filter_leaves_source_untouched() {
        let lb = leaderboard(&[("a", 300), ("b", 200), ("c", 100)]);
        let filtered = lb.filter(&["a", "c"]);
        assert_eq!(players(&filtered), vec!["a", "c"]);
        assert_eq!(filtered.id(), SONG);
        assert_eq!(lb.len(), 3);
    }

    #[test]
    fn test_filter_can_empty() {
        let lb = leaderboard(&[("a", 300)]);
        let filtered = lb.filter(&[String::from("zzz")]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_truncate_returns_removed() {
        let mut lb = leaderboard(&[("a", 300), ("b", 200), ("c", 100)]);
        let removed = lb.truncate(1);
        assert_eq!(players(&lb), vec!["a"]);
        assert_eq!(removed.iter().map(|r| r.player()).collect::<Vec<_>>(), vec!["b", "c"]);
        assert!(lb.truncate(5).is_empty());
    }

    #[test]
    fn test_is_valid() {
        let mut lb = SongLeaderboard::with_capacity(SONG, 20);
        for i in 0..11 {
            lb.insert(record("p", i));
        }
        assert!(!lb.is_valid());
        lb.truncate(CAPACITY);
        assert!(lb.is_valid());
    }

    #[test]
    fn test_player_counts() {
        let lb = leaderboard(&[("a", 300), ("b", 200), ("a", 100)]);
        let counts = lb.player_counts();
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
    }

    #[test]
    fn test_rows_are_ranked_and_restartable() {
        let lb = leaderboard(&[("a", 100), ("b", 300)]);
        let rows: Vec<String> = lb.rows().map(|r| r.to_string()).collect();
        assert_eq!(rows, vec!["1\t300\tb\t", "2\t100\ta\t"]);
        assert_eq!(lb.rows().count(), 2);
    }

    #[test]
    fn test_display_uses_label() {
        let lb = SongLeaderboard::new(SONG);
        assert_eq!(lb.to_string(), "Song \"BeatSaber\" (Expert)");
    }

    #[test]
    fn test_merge_from_dedups_and_truncates() {
        let mut a = leaderboard(&[("a", 300), ("b", 200)]);
        let b = leaderboard(&[("a", 300), ("c", 250)]);
        a.merge_from(&b);
        assert_eq!(players(&a), vec!["a", "c", "b"]);

        let mut big = SongLeaderboard::new(SONG);
        for i in 0..8 {
            big.insert(record("x", 100 + i));
        }
        let mut other = SongLeaderboard::new(SONG);
        for i in 0..8 {
            other.insert(record("y", 200 + i));
        }
        big.merge_from(&other);
        assert_eq!(big.len(), CAPACITY);
        assert_eq!(big.records()[CAPACITY - 1].points(), 106);
        assert_sorted(&big);
    }

    #[test]
    fn test_merge_from_ties_favor_self() {
        let mut a = leaderboard(&[("a", 100)]);
        let b = leaderboard(&[("b", 100)]);
        a.merge_from(&b);
        assert_eq!(players(&a), vec!["a", "b"]);
    }
}
