#![deny(missing_docs)]

//! Maximum flow analysis of tiered logistics networks.
//!
//! A [`FlowNetwork`] holds node identities and a dense capacity matrix.
//! [`analyze`] wires every terminal behind a super-source and every
//! destination behind a super-sink ([`augment`]), solves with
//! [`edmonds_karp`], restricts the flow back to the network and derives the
//! diagnostics in [`diagnostics`].
//!
//! Dense `N × N` matrices suit networks of tens of nodes. Large sparse graphs
//! would want adjacency lists keyed by node index instead.

mod analysis;
mod augment;
mod config;
pub mod diagnostics;
mod generators;
mod hash;
mod network;
mod reference;
mod serialization;
mod solver;

pub use analysis::{analyze, NamedCut, NetworkAnalysis};
pub use augment::{augment, restrict_matrix, AugmentedGraph};
pub use config::AnalysisConfig;
pub use diagnostics::{Attribution, HubUtilization, NodeFlow};
pub use generators::{gen_tiered_network, TieredShape};
pub use hash::canonical_hash;
pub use network::{EdgeSpec, FlowNetwork, NamedEdge, NetworkSpec, NodeRecord};
pub use reference::{reference_network, reference_spec};
pub use solver::{edmonds_karp, min_cut, AugmentingPath, MinCut, SolveOutcome};

/// Re-export serialization helpers for the CLI and downstream crates.
pub use serialization::{
    analysis_from_json, analysis_to_json, load_config, load_network, network_from_json,
    network_from_yaml, network_to_yaml, write_analysis,
};
