//! List the known extraction targets

use std::path::Path;

use clap::Args;
use color_eyre::eyre::Result;
use console::style;

use broadside_core::Target;

/// List the known extraction targets
#[derive(Args)]
pub struct TargetsCommand;

impl TargetsCommand {
    pub fn run(self) -> Result<()> {
        let header = format!(
            "{:<18} {:<10} {:<10} {:<16} {}",
            "Target", "Suite", "Chain ID", "Creation Types", "Artifact"
        );
        println!("{}", style(header).bold());
        println!("{}", "-".repeat(100));

        for target in Target::ALL {
            println!(
                "{:<18} {:<10} {:<10} {:<16} {}",
                target.as_str(),
                target.suite(),
                target.chain_id(),
                target.accepted_types().join(", "),
                target.broadcast_path(Path::new(".")).display()
            );
        }

        println!();
        println!("Total: {} target(s)", Target::ALL.len());

        Ok(())
    }
}
