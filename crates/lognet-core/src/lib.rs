#![deny(missing_docs)]
#![doc = "Core types shared by the lognet flow engine: node roles, matrix aliases, errors and provenance."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, FlowError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Dense index of a node within one analysis run, in `[0, N)`.
pub type NodeIndex = usize;

/// Edge capacity. Stored signed so negative input can be detected and rejected.
pub type Capacity = i64;

/// Flow amount. Signed to carry the antisymmetric residual bookkeeping.
pub type Flow = i64;

/// Dense `N×N` capacity matrix, `capacity[i][j]` for edge `i → j`.
pub type CapacityMatrix = Vec<Vec<Capacity>>;

/// Dense `N×N` flow matrix with the same shape as its capacity matrix.
pub type FlowMatrix = Vec<Vec<Flow>>;

/// Tier a node occupies in the logistics network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Supply terminal feeding the network.
    Terminal,
    /// Intermediate hub (warehouse) between terminals and destinations.
    Hub,
    /// Demand point (store) at the end of the network.
    Destination,
}

impl NodeRole {
    /// Stable label used in hashes and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Terminal => "terminal",
            NodeRole::Hub => "hub",
            NodeRole::Destination => "destination",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allocates a zero-filled square matrix of dimension `n`.
pub fn zero_matrix(n: usize) -> Vec<Vec<i64>> {
    vec![vec![0; n]; n]
}
