//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// sbtkit - Prepare sbt workspaces for bloop export and BSP
#[derive(Parser, Debug)]
#[command(name = "sbtkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Extra configuration file, applied after the global and workspace ones
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Script to run instead of the sbt launcher
    #[arg(long, global = true, env = "SBT_SCRIPT")]
    pub sbt_script: Option<PathBuf>,

    /// Extra JVM options, whitespace separated
    #[arg(long, global = true, env = "JAVA_OPTS", allow_hyphen_values = true)]
    pub java_opts: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the workspace's sbt version and provisioning state
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the detected sbt version
    Version,

    /// Print whether sbt can serve BSP in this workspace
    ///
    /// Writes the BSP bridge into project/ when the answer is true.
    SupportsBsp,

    /// Print the bloopInstall command line
    ///
    /// Also removes the legacy global plugin and writes metals.sbt into
    /// every meta directory.
    InstallArgs {
        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the bspConfig command line
    BspArgs {
        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Write metals.sbt into every meta directory
    Provision,

    /// Remove the legacy global plugin from ~/.sbt
    CleanLegacy,

    /// Generate shell completions
    ///
    /// Examples:
    ///   sbtkit completions bash > ~/.local/share/bash-completion/completions/sbtkit
    ///   sbtkit completions zsh > ~/.zfunc/_sbtkit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
