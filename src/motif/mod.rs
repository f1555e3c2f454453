//! Motif census module
//!
//! Detects, for every node, how often it sits at the center of one of five
//! directed three-node patterns (S1, S4, S5, S6, S11), and accumulates the
//! counts per role class across the whole graph.

pub mod catalog;
pub mod census;
pub mod classify;
pub mod triads;

use serde::{Serialize, Deserialize};

pub use census::{run_census, MotifCensus};
pub use triads::Triad;

/// The six motif-role classes a node can be counted under.
///
/// S5 splits into two roles: its out-degree-2 node (sell side) and its
/// in-degree-2 node (buy side) within the matched triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotifRole {
    Motif1,
    Motif4,
    Motif5Buy,
    Motif5Sell,
    Motif6,
    Motif11,
}

impl MotifRole {
    /// All role classes, in canonical order
    pub const ALL: [MotifRole; 6] = [
        MotifRole::Motif1,
        MotifRole::Motif4,
        MotifRole::Motif5Buy,
        MotifRole::Motif5Sell,
        MotifRole::Motif6,
        MotifRole::Motif11,
    ];

    /// Canonical name used in output file names and report columns
    pub fn as_str(&self) -> &'static str {
        match self {
            MotifRole::Motif1 => "motif1",
            MotifRole::Motif4 => "motif4",
            MotifRole::Motif5Buy => "motif5buy",
            MotifRole::Motif5Sell => "motif5sell",
            MotifRole::Motif6 => "motif6",
            MotifRole::Motif11 => "motif11",
        }
    }

    /// Dense index into per-role count arrays
    pub fn index(&self) -> usize {
        match self {
            MotifRole::Motif1 => 0,
            MotifRole::Motif4 => 1,
            MotifRole::Motif5Buy => 2,
            MotifRole::Motif5Sell => 3,
            MotifRole::Motif6 => 4,
            MotifRole::Motif11 => 5,
        }
    }

    /// Parse a canonical role name
    pub fn from_str(name: &str) -> Option<MotifRole> {
        MotifRole::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl std::fmt::Display for MotifRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
