//! Extract deployed contract addresses for one target

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use color_eyre::eyre::Result;

use broadside_core::{extract_addresses, to_json, BroadcastLog, Target};

/// Extract deployed contract addresses from a broadcast log
#[derive(Args)]
pub struct ExtractCommand {
    /// Deployment run to read
    #[arg(value_enum)]
    pub target: TargetArg,

    /// Foundry project root containing the broadcast directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl ExtractCommand {
    pub fn run(self) -> Result<()> {
        let target = Target::from(self.target);
        let path = target.broadcast_path(&self.root);

        let log = BroadcastLog::load(&path)?;
        let records = extract_addresses(&log, target.accepted_types());

        // One-shot JSON array for easy piping: broadside extract ... | jq
        println!("{}", to_json(&records)?);

        Ok(())
    }
}

/// CLI-facing target names; mirrors [`Target`] so the core crate stays
/// clap-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    MoonfishLocal,
    MoonpierLocal,
    MoonfishSepolia,
    MoonpierSepolia,
    MoonpierMumbai,
    MoonpierPolygon,
}

impl From<TargetArg> for Target {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::MoonfishLocal => Target::MoonfishLocal,
            TargetArg::MoonpierLocal => Target::MoonpierLocal,
            TargetArg::MoonfishSepolia => Target::MoonfishSepolia,
            TargetArg::MoonpierSepolia => Target::MoonpierSepolia,
            TargetArg::MoonpierMumbai => Target::MoonpierMumbai,
            TargetArg::MoonpierPolygon => Target::MoonpierPolygon,
        }
    }
}
