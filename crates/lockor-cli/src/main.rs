//! Lockor CLI
//!
//! Command-line interface for Lockor

use clap::{Parser, Subcommand, ValueEnum};
use lockor_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;
mod notifier;

#[derive(Debug, Parser)]
#[command(name = "lockor")]
#[command(about = "Lockor - lock workspace files against edits", long_about = None)]
struct Cli {
    /// Workspace root
    #[arg(long, global = true, default_value = ".")]
    workspace: PathBuf,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lock a file
    Lock(commands::lock::PathArgs),
    /// Unlock a file
    Unlock(commands::lock::PathArgs),
    /// Lock a file if unlocked, unlock it otherwise
    Toggle(commands::lock::PathArgs),
    /// List locked files
    List,
    /// Print whether a file is locked
    IsLocked(commands::lock::PathArgs),
    /// Show lock status for a file or the workspace
    Status(commands::status::StatusArgs),
    /// Exit non-zero when saving the file would be vetoed
    CheckSave(commands::lock::PathArgs),
    /// Show or set the protection level
    Level(commands::level::LevelArgs),
    /// Re-apply the configured protection level to every locked file
    Reapply,
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let workspace = cli.workspace;
    let result = match cli.command {
        Commands::Lock(args) => commands::lock::execute_lock(&workspace, args),
        Commands::Unlock(args) => commands::lock::execute_unlock(&workspace, args),
        Commands::Toggle(args) => commands::lock::execute_toggle(&workspace, args),
        Commands::List => commands::status::execute_list(&workspace),
        Commands::IsLocked(args) => commands::status::execute_is_locked(&workspace, args),
        Commands::Status(args) => commands::status::execute_status(&workspace, args),
        Commands::CheckSave(args) => commands::lock::execute_check_save(&workspace, args),
        Commands::Level(args) => commands::level::execute(&workspace, args),
        Commands::Reapply => commands::level::execute_reapply(&workspace),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
