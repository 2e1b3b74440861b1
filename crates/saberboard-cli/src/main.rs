mod cli;
mod commands;
mod history;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use commands::edit::EditPlan;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("saberboard=info,saberboard_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let history_dir = Path::new(&args.history_dir);
    let backup_dir = Path::new(&args.backup_dir);

    match args.command {
        Command::Players { input } => commands::players::run(input.as_deref(), history_dir),
        Command::Show { input, song } => {
            commands::show::run(input.as_deref(), song.as_deref(), history_dir)
        }
        Command::Edit {
            input,
            output,
            remove,
            remove_anonymous,
            rename,
            keep_best,
            keep_fc,
            only,
            prune_empty,
        } => {
            let plan = EditPlan {
                remove,
                remove_anonymous,
                rename,
                keep_best,
                keep_full_combo: keep_fc,
                only,
                prune_empty,
            };
            commands::edit::run(
                input.as_deref(),
                output.as_deref(),
                &plan,
                history_dir,
                backup_dir,
            )
        }
        Command::Merge { inputs, output } => {
            commands::merge::run(&inputs, output.as_deref(), backup_dir)
        }
        Command::Latest => commands::latest::run(history_dir),
        Command::Backup { input } => {
            commands::backup::run(input.as_deref(), history_dir, backup_dir)
        }
    }
}
