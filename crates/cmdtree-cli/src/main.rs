//! cmdtree CLI
//!
//! Command-line interface for the command-tree compiler

use clap::{Parser, Subcommand, ValueEnum};
use cmdtree_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cmdtree")]
#[command(about = "cmdtree - Compile command trees into verifiable operations", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(
        long,
        env = "CMDTREE_LOG_PROFILE",
        value_enum,
        default_value_t = LogProfile::Development,
        global = true
    )]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compile a command resource into operation descriptors
    Compile(commands::compile::CompileArgs),
    /// List the leaf paths of a command resource
    Paths(commands::paths::PathsArgs),
    /// Compare the identifiers of two compilation outputs
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_profile {
        LogProfile::Development => Profile::Development,
        LogProfile::Production => Profile::Production,
    });

    let result = match cli.command {
        Commands::Compile(args) => commands::compile::execute(args),
        Commands::Paths(args) => commands::paths::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
