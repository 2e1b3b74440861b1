//! CLI argument definitions for saberboard.

use clap::{Parser, Subcommand};
use saberboard_core::config::files;

#[derive(Parser)]
#[command(name = "saberboard")]
#[command(about = "Beat Saber local leaderboard editor", version)]
pub struct Args {
    /// Folder of dated snapshots; the newest one is used when no input is given
    #[arg(long, env = "SABERBOARD_HISTORY_DIR", default_value = files::HISTORY_DIR)]
    pub history_dir: String,

    /// Folder receiving timestamped backups
    #[arg(long, env = "SABERBOARD_BACKUP_DIR", default_value = files::BACKUP_DIR)]
    pub backup_dir: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List players with their number of entries and total score
    Players {
        /// Snapshot file or folder (defaults to the newest snapshot)
        input: Option<String>,
    },
    /// Print leaderboards
    Show {
        /// Snapshot file or folder (defaults to the newest snapshot)
        input: Option<String>,
        /// Only print this leaderboard id
        #[arg(long)]
        song: Option<String>,
    },
    /// Clean up a snapshot and write the result
    Edit {
        /// Snapshot file or folder (defaults to the newest snapshot)
        input: Option<String>,
        /// Output file (defaults to a new backup)
        #[arg(short, long)]
        output: Option<String>,
        /// Remove every score of a player
        #[arg(long, value_name = "NAME")]
        remove: Vec<String>,
        /// Remove the scores recorded without a player name
        #[arg(long)]
        remove_anonymous: bool,
        /// Rename a player (OLD=NEW)
        #[arg(long, value_name = "OLD=NEW", value_parser = parse_rename)]
        rename: Vec<(String, String)>,
        /// Keep only the best score of each player per song
        #[arg(long)]
        keep_best: bool,
        /// With --keep-best, also keep each player's best full combo
        #[arg(long, requires = "keep_best")]
        keep_fc: bool,
        /// Only keep the scores of these players
        #[arg(long, value_name = "NAME")]
        only: Vec<String>,
        /// Drop leaderboards left without scores
        #[arg(long)]
        prune_empty: bool,
    },
    /// Merge snapshots into one
    Merge {
        /// Snapshot files or folders, earlier ones winning ties
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Output file (defaults to a new backup)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the path of the newest snapshot
    Latest,
    /// Copy a snapshot into the backup folder
    Backup {
        /// Snapshot file or folder (defaults to the newest snapshot)
        input: Option<String>,
    },
}

fn parse_rename(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((old, new)) if !old.is_empty() && !new.is_empty() => {
            Ok((old.to_string(), new.to_string()))
        }
        _ => Err(format!("expected OLD=NEW, got '{}'", value)),
    }
}
