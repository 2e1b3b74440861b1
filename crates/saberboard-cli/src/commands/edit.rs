//! Edit command implementation.

use std::path::Path;

use anyhow::Result;
use saberboard_core::config::players::ANONYMOUS;
use saberboard_core::{KeepBest, LeaderboardCollection};
use tracing::info;

use super::write_output;
use crate::history;

/// Cleanup steps, applied in declaration order
#[derive(Debug, Default)]
pub struct EditPlan {
    pub remove: Vec<String>,
    pub remove_anonymous: bool,
    pub rename: Vec<(String, String)>,
    pub keep_best: bool,
    pub keep_full_combo: bool,
    pub only: Vec<String>,
    pub prune_empty: bool,
}

impl EditPlan {
    pub fn apply(&self, mut collection: LeaderboardCollection) -> Result<LeaderboardCollection> {
        let removals = self
            .remove
            .iter()
            .map(String::as_str)
            .chain(self.remove_anonymous.then_some(ANONYMOUS));
        for player in removals {
            let removed = collection.remove_player(player);
            info!("Removed {} scores of {}", removed, player);
        }

        for (old, new) in &self.rename {
            let renamed = collection.rename_player(old, new)?;
            info!("Renamed {} scores from {} to {}", renamed, old, new);
        }

        if self.keep_best {
            let options = KeepBest::new().keep_full_combo(self.keep_full_combo);
            let dropped = collection.keep_best_with(&options);
            info!("Dropped {} scores below personal bests", dropped);
        }

        if !self.only.is_empty() {
            collection = collection.filter(&self.only);
        }

        if self.prune_empty {
            let pruned = collection.prune_empty();
            info!("Dropped {} empty leaderboards", pruned);
        }
        Ok(collection)
    }
}

pub fn run(
    input: Option<&str>,
    output: Option<&str>,
    plan: &EditPlan,
    history_dir: &Path,
    backup_dir: &Path,
) -> Result<()> {
    let collection = history::resolve(input, history_dir)?;
    let edited = plan.apply(collection)?;
    write_output(&edited, output, backup_dir)
}
