use std::collections::BTreeSet;

use log::debug;
use lognet_core::errors::FlowError;
use lognet_core::{zero_matrix, Capacity, CapacityMatrix, FlowMatrix, NodeIndex};

use crate::network::{checked_total, ensure_square};

/// Capacity matrix extended with a synthetic super-source and super-sink.
///
/// Exists for the duration of one solve. Index `original_size` is the
/// super-source, `original_size + 1` the super-sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedGraph {
    /// The `(N + 2) × (N + 2)` capacity matrix.
    pub capacity: CapacityMatrix,
    /// Dimension `N` of the matrix before augmentation.
    pub original_size: usize,
    /// Capacity placed on every synthetic edge.
    pub super_capacity: Capacity,
}

impl AugmentedGraph {
    /// Index of the synthetic source.
    pub fn super_source(&self) -> NodeIndex {
        self.original_size
    }

    /// Index of the synthetic sink.
    pub fn super_sink(&self) -> NodeIndex {
        self.original_size + 1
    }

    /// Restricts a flow matrix computed on this graph back to the original `N × N` block.
    pub fn restrict(&self, flow: &FlowMatrix) -> FlowMatrix {
        restrict_matrix(flow, self.original_size)
    }
}

/// Wires `sources` behind a super-source and `sinks` behind a super-sink.
///
/// Every synthetic edge gets the total capacity of the original matrix plus
/// one, which exceeds any terminal's outgoing (or destination's incoming)
/// capacity, so the synthetic edges never limit the solution.
pub fn augment(
    capacity: &CapacityMatrix,
    sources: &[NodeIndex],
    sinks: &[NodeIndex],
) -> Result<AugmentedGraph, FlowError> {
    let n = ensure_square(capacity)?;
    for &idx in sources.iter().chain(sinks.iter()) {
        if idx >= n {
            return Err(
                FlowError::config("terminal-out-of-range", "terminal index outside matrix")
                    .with_context("index", idx)
                    .with_context("nodes", n),
            );
        }
    }
    let source_set: BTreeSet<NodeIndex> = sources.iter().copied().collect();
    let sink_set: BTreeSet<NodeIndex> = sinks.iter().copied().collect();
    if let Some(shared) = source_set.intersection(&sink_set).next() {
        return Err(FlowError::config(
            "terminal-overlap",
            "a node cannot be both a source and a sink terminal",
        )
        .with_context("index", shared)
        .with_hint("source and sink terminal sets must be disjoint"));
    }

    let super_capacity = checked_total(capacity)?.checked_add(1).ok_or_else(|| {
        FlowError::config("capacity-overflow", "super edge capacity overflows i64")
    })?;

    let mut extended = zero_matrix(n + 2);
    for (row, values) in capacity.iter().enumerate() {
        extended[row][..n].copy_from_slice(values);
    }
    for &source in &source_set {
        extended[n][source] = super_capacity;
    }
    for &sink in &sink_set {
        extended[sink][n + 1] = super_capacity;
    }
    debug!(
        "augmented {n} nodes with {} sources and {} sinks (super capacity {super_capacity})",
        source_set.len(),
        sink_set.len()
    );

    Ok(AugmentedGraph {
        capacity: extended,
        original_size: n,
        super_capacity,
    })
}

/// Returns the top-left `n × n` block of a matrix.
pub fn restrict_matrix(matrix: &FlowMatrix, n: usize) -> FlowMatrix {
    matrix
        .iter()
        .take(n)
        .map(|row| row.iter().take(n).copied().collect())
        .collect()
}
