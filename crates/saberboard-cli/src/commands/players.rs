//! Players command implementation.

use std::path::Path;

use anyhow::Result;

use crate::history;

/// Print every player, most entries first
pub fn run(input: Option<&str>, history_dir: &Path) -> Result<()> {
    let collection = history::resolve(input, history_dir)?;

    let mut players: Vec<_> = collection.get_players().into_iter().collect();
    players.sort_by(|(a_name, a), (b_name, b)| {
        b.entries.cmp(&a.entries).then_with(|| a_name.cmp(b_name))
    });

    println!("Player\tEntries\tTotal score");
    for (name, summary) in &players {
        println!("{}\t{}\t{}", name, summary.entries, summary.total_points);
    }
    println!(
        "{} players, {} scores in {} leaderboards",
        players.len(),
        collection.total_records(),
        collection.len()
    );
    Ok(())
}
