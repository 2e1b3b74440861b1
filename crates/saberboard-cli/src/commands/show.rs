//! Show command implementation.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use saberboard_core::{Difficulty, SongLeaderboard};

use crate::history;

/// Print one leaderboard or all of them
pub fn run(input: Option<&str>, song: Option<&str>, history_dir: &Path) -> Result<()> {
    let collection = history::resolve(input, history_dir)?;

    match song {
        Some(id) => print_leaderboard(collection.get(id)?),
        None => collection
            .get_songs()
            .filter(|leaderboard| !leaderboard.is_empty())
            .for_each(print_leaderboard),
    }
    Ok(())
}

fn print_leaderboard(leaderboard: &SongLeaderboard) {
    let label = leaderboard.label();
    let difficulty = label
        .difficulty
        .map(colored_difficulty)
        .unwrap_or_default();
    println!("=== {} {} ===", label.title.bold(), difficulty);

    for row in leaderboard.rows() {
        let flags = if row.full_combo {
            row.flags().green().to_string()
        } else {
            String::new()
        };
        println!(" {:>2}. {:>8}  {:<15} {}", row.rank, row.points, row.player, flags);
    }
}

fn colored_difficulty(difficulty: Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::Easy => name.green().to_string(),
        Difficulty::Normal => name.blue().to_string(),
        Difficulty::Hard => name.yellow().to_string(),
        Difficulty::Expert => name.red().to_string(),
        Difficulty::ExpertPlus => name.magenta().to_string(),
    }
}
