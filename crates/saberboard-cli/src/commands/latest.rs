//! Latest command implementation.

use std::path::Path;

use anyhow::Result;

use crate::history;

pub fn run(history_dir: &Path) -> Result<()> {
    let latest = history::latest_snapshot(history_dir)?;
    println!("{}", latest.display());
    Ok(())
}
