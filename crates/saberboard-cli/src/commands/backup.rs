//! Backup command implementation.

use std::path::Path;

use anyhow::Result;

use super::write_output;
use crate::history;

/// Store a copy of a snapshot in the backup folder
pub fn run(input: Option<&str>, history_dir: &Path, backup_dir: &Path) -> Result<()> {
    let collection = history::resolve(input, history_dir)?;
    write_output(&collection, None, backup_dir)
}
