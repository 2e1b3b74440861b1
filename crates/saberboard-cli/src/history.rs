//! Snapshot files on disk.
//!
//! History and backup folders hold `.dat` snapshots whose names start with
//! their date, so lexicographic order is chronological order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use saberboard_core::config::files;
use saberboard_core::{LeaderboardCollection, deserialize, serialize};
use tracing::{debug, info, warn};

fn is_snapshot(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == files::SNAPSHOT_EXTENSION)
}

/// Snapshot files of `dir`, oldest first
pub fn snapshot_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut snapshots = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if is_snapshot(&path) {
            snapshots.push(path);
        }
    }
    snapshots.sort();
    Ok(snapshots)
}

/// Newest snapshot of `dir`
pub fn latest_snapshot(dir: &Path) -> Result<PathBuf> {
    match snapshot_files(dir)?.pop() {
        Some(path) => Ok(path),
        None => bail!("No snapshot found in {}", dir.display()),
    }
}

pub fn load_file(path: &Path) -> Result<LeaderboardCollection> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let collection =
        deserialize(&bytes).with_context(|| format!("Failed to load {}", path.display()))?;
    debug!("Loaded {}", path.display());
    Ok(collection)
}

/// Merge every snapshot of `dir`, oldest first
pub fn load_dir(dir: &Path) -> Result<LeaderboardCollection> {
    let snapshots = snapshot_files(dir)?;
    if snapshots.is_empty() {
        warn!("No snapshot found in {}", dir.display());
    }

    let mut merged = LeaderboardCollection::new();
    for path in &snapshots {
        merged = merged.merge(&load_file(path)?);
    }
    info!("Merged {} snapshots from {}", snapshots.len(), dir.display());
    Ok(merged)
}

/// Load a snapshot file or a whole folder
pub fn load(path: &Path) -> Result<LeaderboardCollection> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Load `input`, or the newest snapshot of `history_dir` when no input is given
pub fn resolve(input: Option<&str>, history_dir: &Path) -> Result<LeaderboardCollection> {
    match input {
        Some(input) => load(Path::new(input)),
        None => {
            let latest = latest_snapshot(history_dir)?;
            info!("Using latest snapshot {}", latest.display());
            load_file(&latest)
        }
    }
}

pub fn save_file(path: &Path, collection: &LeaderboardCollection) -> Result<()> {
    if !collection.is_valid() {
        warn!(
            "{} has leaderboards over the game capacity, extra scores are not written",
            path.display()
        );
    }
    let bytes = serialize(collection)?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved {}", path.display());
    Ok(())
}

pub fn backup_name(now: DateTime<Local>) -> String {
    now.format(files::BACKUP_NAME_FORMAT).to_string()
}

/// Write `collection` as a new timestamped snapshot of `dir`
pub fn save_backup(
    dir: &Path,
    collection: &LeaderboardCollection,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(backup_name(now));
    save_file(&path, collection)?;
    Ok(path)
}
