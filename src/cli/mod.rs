//! Command-line interface.

pub mod completions;
pub mod create;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// homecfg - Scaffold ESPHome device configs and provision their secrets.
#[derive(Parser)]
#[command(
    name = "homecfg",
    about = "Scaffold ESPHome device configs and provision their secrets",
    version
)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, env = "HOMECFG_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Scaffold a device config and store its encryption key and OTA password
    #[command(alias = "new")]
    CreateDevice(CreateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of `create-device`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Friendly name of the device (e.g. "Loft Heat Pump")
    pub name: String,

    /// Show what would be created, including the generated secrets, without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Apply without asking for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Device type; devices of a type share a base package and one secret pair
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Secrets-manager executable (name on PATH or a path)
    #[arg(long, env = "HOMECFG_OP", value_name = "PATH")]
    pub op: Option<String>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, root: Option<PathBuf>) -> crate::error::Result<()> {
    match command {
        Command::CreateDevice(args) => create::execute(args, root),
        Command::Completions { shell } => completions::execute(shell),
    }
}
