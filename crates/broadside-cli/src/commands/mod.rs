//! CLI commands for broadside

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod extract;
pub mod targets;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Extract deployed contract addresses from a broadcast log
    Extract(extract::ExtractCommand),

    /// List the known extraction targets
    Targets(targets::TargetsCommand),
}

impl Command {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Command::Extract(cmd) => cmd.run(),
            Command::Targets(cmd) => cmd.run(),
        }
    }
}
