//! Extraction targets
//!
//! Each target pins one deployment run: a contract suite, the forge script
//! that deployed it, the chain it was broadcast to, and which transaction
//! types count as a contract creation there. The Mumbai and Polygon runs
//! used CREATE2 for some contracts, so those two targets accept it.

use std::fmt;
use std::path::{Path, PathBuf};

/// The six known deployment runs an address list can be extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    MoonfishLocal,
    MoonpierLocal,
    MoonfishSepolia,
    MoonpierSepolia,
    MoonpierMumbai,
    MoonpierPolygon,
}

impl Target {
    /// All targets, in suite-then-network order.
    pub const ALL: [Target; 6] = [
        Target::MoonfishLocal,
        Target::MoonpierLocal,
        Target::MoonfishSepolia,
        Target::MoonpierSepolia,
        Target::MoonpierMumbai,
        Target::MoonpierPolygon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::MoonfishLocal => "moonfish-local",
            Target::MoonpierLocal => "moonpier-local",
            Target::MoonfishSepolia => "moonfish-sepolia",
            Target::MoonpierSepolia => "moonpier-sepolia",
            Target::MoonpierMumbai => "moonpier-mumbai",
            Target::MoonpierPolygon => "moonpier-polygon",
        }
    }

    /// The contract suite this target belongs to.
    pub fn suite(&self) -> &'static str {
        match self {
            Target::MoonfishLocal | Target::MoonfishSepolia => "moonfish",
            Target::MoonpierLocal
            | Target::MoonpierSepolia
            | Target::MoonpierMumbai
            | Target::MoonpierPolygon => "moonpier",
        }
    }

    /// The forge script whose broadcast output this target reads.
    pub fn script(&self) -> &'static str {
        match self {
            Target::MoonfishLocal => "moonfish.s.sol",
            Target::MoonpierLocal => "moonpier.s.sol",
            Target::MoonfishSepolia => "moonfishSepolia.s.sol",
            Target::MoonpierSepolia => "moonpierSepolia.s.sol",
            Target::MoonpierMumbai => "moonpierMumbai.s.sol",
            Target::MoonpierPolygon => "moonpierPolygon.s.sol",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Target::MoonfishLocal | Target::MoonpierLocal => 31337,
            Target::MoonfishSepolia | Target::MoonpierSepolia => 11155111,
            Target::MoonpierMumbai => 80001,
            Target::MoonpierPolygon => 137,
        }
    }

    /// The transaction types that count as a contract creation for this run.
    pub fn accepted_types(&self) -> &'static [&'static str] {
        match self {
            Target::MoonpierMumbai | Target::MoonpierPolygon => &["CREATE", "CREATE2"],
            _ => &["CREATE"],
        }
    }

    /// Path to the broadcast artifact for this target, relative to the
    /// Foundry project root.
    pub fn broadcast_path(&self, project_root: &Path) -> PathBuf {
        project_root
            .join("broadcast")
            .join(self.script())
            .join(self.chain_id().to_string())
            .join("run-latest.json")
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_path() {
        let path = Target::MoonfishLocal.broadcast_path(Path::new("."));
        assert_eq!(
            path,
            PathBuf::from("./broadcast/moonfish.s.sol/31337/run-latest.json")
        );

        let path = Target::MoonpierPolygon.broadcast_path(Path::new("/repo"));
        assert_eq!(
            path,
            PathBuf::from("/repo/broadcast/moonpierPolygon.s.sol/137/run-latest.json")
        );
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Target::MoonfishLocal.chain_id(), 31337);
        assert_eq!(Target::MoonpierLocal.chain_id(), 31337);
        assert_eq!(Target::MoonfishSepolia.chain_id(), 11155111);
        assert_eq!(Target::MoonpierSepolia.chain_id(), 11155111);
        assert_eq!(Target::MoonpierMumbai.chain_id(), 80001);
        assert_eq!(Target::MoonpierPolygon.chain_id(), 137);
    }

    #[test]
    fn test_accepted_types() {
        assert_eq!(Target::MoonfishSepolia.accepted_types(), &["CREATE"]);
        assert_eq!(
            Target::MoonpierMumbai.accepted_types(),
            &["CREATE", "CREATE2"]
        );
        assert_eq!(
            Target::MoonpierPolygon.accepted_types(),
            &["CREATE", "CREATE2"]
        );
    }

    #[test]
    fn test_sepolia_targets_differ_by_suite() {
        // Same chain, different suites and scripts
        assert_eq!(
            Target::MoonfishSepolia.chain_id(),
            Target::MoonpierSepolia.chain_id()
        );
        assert_ne!(
            Target::MoonfishSepolia.suite(),
            Target::MoonpierSepolia.suite()
        );
        assert_ne!(
            Target::MoonfishSepolia.script(),
            Target::MoonpierSepolia.script()
        );
    }

    #[test]
    fn test_display_matches_all_order() {
        let names: Vec<String> = Target::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "moonfish-local",
                "moonpier-local",
                "moonfish-sepolia",
                "moonpier-sepolia",
                "moonpier-mumbai",
                "moonpier-polygon",
            ]
        );
    }
}
