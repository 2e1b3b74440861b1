//! Game constants and file conventions.
//!
//! This module groups the fixed values the rest of the workspace relies on:
//! - Leaderboard capacity (matches the in-game local leaderboard)
//! - Player name defaults
//! - Snapshot and backup file naming

/// Leaderboard sizing.
pub mod leaderboard {
    /// Number of entries the game keeps per song leaderboard.
    pub const CAPACITY: usize = 10;
}

/// Player name defaults.
pub mod players {
    /// Name the game records when no player name was entered.
    pub const ANONYMOUS: &str = "No Name";
}

/// Snapshot file conventions used by the history and backup folders.
pub mod files {
    /// Extension of leaderboard snapshot files.
    pub const SNAPSHOT_EXTENSION: &str = "dat";

    /// Default folder holding dated snapshots pulled from the headset.
    pub const HISTORY_DIR: &str = "history";

    /// Default folder for backups written by the editor.
    pub const BACKUP_DIR: &str = "backups";

    /// `chrono` format string for backup file names.
    pub const BACKUP_NAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S_LocalLeaderboards.dat";
}
