//! sbtkit CLI
//!
//! Inspects sbt workspaces and prepares them for bloop export and BSP.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {e}", "warning".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command.clone() else {
        println!("{} sbt workspace helper", "sbtkit".green().bold());
        println!();
        println!("Run {} for available commands.", "sbtkit --help".cyan());
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "sbtkit", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = Context::from_cli(&cli)?;
    execute_command(&ctx, command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Status { json } => commands::run_status(ctx, json),
        Commands::Version => commands::run_version(ctx),
        Commands::SupportsBsp => commands::run_supports_bsp(ctx),
        Commands::InstallArgs { json } => commands::run_install_args(ctx, json),
        Commands::BspArgs { json } => commands::run_bsp_args(ctx, json),
        Commands::Provision => commands::run_provision(ctx),
        Commands::CleanLegacy => commands::run_clean_legacy(ctx),
        Commands::Completions { .. } => Ok(()),
    }
}
