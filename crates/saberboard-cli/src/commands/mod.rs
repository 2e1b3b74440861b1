//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod backup;
pub mod edit;
pub mod latest;
pub mod merge;
pub mod players;
pub mod show;

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use saberboard_core::LeaderboardCollection;

use crate::history;

/// Write to `output`, or to a new backup when no output is given
pub fn write_output(
    collection: &LeaderboardCollection,
    output: Option<&str>,
    backup_dir: &Path,
) -> Result<()> {
    let path = match output {
        Some(output) => {
            let path = Path::new(output);
            history::save_file(path, collection)?;
            path.to_path_buf()
        }
        None => history::save_backup(backup_dir, collection, Local::now())?,
    };
    println!("Written to: {}", path.display());
    Ok(())
}
