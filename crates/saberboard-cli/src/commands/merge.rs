//! Merge command implementation.

use std::path::Path;

use anyhow::Result;
use saberboard_core::LeaderboardCollection;
use tracing::info;

use super::write_output;
use crate::history;

/// Merge snapshots in the given order
pub fn run(inputs: &[String], output: Option<&str>, backup_dir: &Path) -> Result<()> {
    let collections = inputs
        .iter()
        .map(|input| history::load(Path::new(input)))
        .collect::<Result<Vec<_>>>()?;

    let merged = LeaderboardCollection::merge_all(&collections);
    info!(
        "Merged {} inputs into {} leaderboards",
        collections.len(),
        merged.len()
    );
    write_output(&merged, output, backup_dir)
}
