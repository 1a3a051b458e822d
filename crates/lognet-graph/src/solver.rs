//! Edmonds–Karp maximum flow over a dense capacity matrix.
//!
//! Augmenting paths are found by breadth-first search on the residual graph,
//! scanning neighbours in ascending index order, so each path has the fewest
//! edges available and the path trace is reproducible. Pushing flow along a
//! path also subtracts it from the reverse entry (`flow[j][i] -= amount`);
//! later searches may cancel earlier routing through those back edges.

use std::collections::VecDeque;

use log::{debug, info};
use lognet_core::errors::FlowError;
use lognet_core::{zero_matrix, Capacity, CapacityMatrix, Flow, FlowMatrix, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::augment::restrict_matrix;
use crate::network::{checked_total, ensure_square};

/// One augmenting path in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentingPath {
    /// Node indices from source to sink.
    pub path: Vec<NodeIndex>,
    /// Bottleneck amount pushed along the path.
    pub flow: Flow,
}

/// Result of one solver invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// Maximum flow value from source to sink.
    pub max_flow: Flow,
    /// Net flow per edge: `flow[i][j]` is the positive part of the residual
    /// bookkeeping, so every entry lies in `0..=capacity[i][j]`.
    pub flow: FlowMatrix,
    /// Augmenting paths in discovery order.
    pub paths: Vec<AugmentingPath>,
}

impl SolveOutcome {
    /// Returns a copy whose flow matrix is cut down to the top-left `n × n` block.
    ///
    /// Paths keep their original indices.
    pub fn restrict(&self, n: usize) -> SolveOutcome {
        SolveOutcome {
            max_flow: self.max_flow,
            flow: restrict_matrix(&self.flow, n),
            paths: self.paths.clone(),
        }
    }

    /// Total flow leaving `node`.
    pub fn outflow(&self, node: NodeIndex) -> Flow {
        self.flow.get(node).map(|row| row.iter().sum()).unwrap_or(0)
    }

    /// Total flow entering `node`.
    pub fn inflow(&self, node: NodeIndex) -> Flow {
        self.flow
            .iter()
            .filter_map(|row| row.get(node))
            .sum()
    }
}

/// Source-side node set and saturated crossing edges of a minimum cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// Nodes reachable from the source in the final residual graph, ascending.
    pub source_side: Vec<NodeIndex>,
    /// Edges from the source side to the sink side.
    pub edges: Vec<(NodeIndex, NodeIndex, Capacity)>,
    /// Sum of the crossing edge capacities; equals the maximum flow.
    pub capacity: Capacity,
}

enum Phase {
    Searching,
    Augmenting(Vec<NodeIndex>),
    Done,
}

/// Residual view over a capacity matrix with the antisymmetric flow table.
struct Residual<'a> {
    capacity: &'a CapacityMatrix,
    flow: FlowMatrix,
}

impl<'a> Residual<'a> {
    fn new(capacity: &'a CapacityMatrix) -> Self {
        Self {
            capacity,
            flow: zero_matrix(capacity.len()),
        }
    }

    fn residual(&self, from: NodeIndex, to: NodeIndex) -> Capacity {
        self.capacity[from][to] - self.flow[from][to]
    }

    /// Breadth-first search returning the parent of every discovered node,
    /// stopping as soon as `sink` is reached when one is given.
    fn search(&self, source: NodeIndex, sink: Option<NodeIndex>) -> Vec<Option<NodeIndex>> {
        let n = self.capacity.len();
        let mut parent = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(current) = queue.pop_front() {
            for next in 0..n {
                if visited[next] || self.residual(current, next) <= 0 {
                    continue;
                }
                parent[next] = Some(current);
                visited[next] = true;
                if Some(next) == sink {
                    return parent;
                }
                queue.push_back(next);
            }
        }
        parent
    }

    fn shortest_path(&self, source: NodeIndex, sink: NodeIndex) -> Option<Vec<NodeIndex>> {
        let parent = self.search(source, Some(sink));
        parent[sink]?;
        let mut path = vec![sink];
        let mut current = sink;
        while current != source {
            current = parent[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    fn bottleneck(&self, path: &[NodeIndex]) -> Flow {
        path.windows(2)
            .map(|pair| self.residual(pair[0], pair[1]))
            .min()
            .unwrap_or(0)
    }

    fn push(&mut self, path: &[NodeIndex], amount: Flow) {
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            self.flow[from][to] += amount;
            self.flow[to][from] -= amount;
        }
    }

    fn net_flow(&self) -> FlowMatrix {
        self.flow
            .iter()
            .map(|row| row.iter().map(|&value| value.max(0)).collect())
            .collect()
    }
}

/// Computes the maximum flow from `source` to `sink`.
///
/// Every iteration pushes at least one unit, and the number of iterations is
/// bounded by O(edges × nodes). The only termination condition is the absence
/// of an augmenting path. Identical inputs always yield identical outcomes.
pub fn edmonds_karp(
    capacity: &CapacityMatrix,
    source: NodeIndex,
    sink: NodeIndex,
) -> Result<SolveOutcome, FlowError> {
    validate(capacity, source, sink)?;

    let mut residual = Residual::new(capacity);
    let mut max_flow: Flow = 0;
    let mut paths = Vec::new();
    let mut phase = Phase::Searching;
    loop {
        phase = match phase {
            Phase::Searching => match residual.shortest_path(source, sink) {
                Some(path) => Phase::Augmenting(path),
                None => Phase::Done,
            },
            Phase::Augmenting(path) => {
                let amount = residual.bottleneck(&path);
                residual.push(&path, amount);
                max_flow += amount;
                debug!("augmenting path {path:?} carries {amount}");
                paths.push(AugmentingPath { path, flow: amount });
                Phase::Searching
            }
            Phase::Done => break,
        };
    }
    info!(
        "max flow {max_flow} from {source} to {sink} after {} augmenting paths",
        paths.len()
    );

    Ok(SolveOutcome {
        max_flow,
        flow: residual.net_flow(),
        paths,
    })
}

/// Extracts the minimum cut certified by a finished solve.
///
/// `outcome` must come from [`edmonds_karp`] on the same `capacity` matrix
/// (not a restricted copy).
pub fn min_cut(
    capacity: &CapacityMatrix,
    outcome: &SolveOutcome,
    source: NodeIndex,
) -> Result<MinCut, FlowError> {
    let n = ensure_square(capacity)?;
    if outcome.flow.len() != n || outcome.flow.iter().any(|row| row.len() != n) {
        return Err(
            FlowError::graph("non-square-matrix", "flow matrix does not match capacity matrix")
                .with_context("nodes", n)
                .with_context("rows", outcome.flow.len()),
        );
    }
    ensure_index(source, n, "source")?;

    // The net flow matrix holds positive parts only; the signed bookkeeping
    // is recovered as flow[i][j] - flow[j][i].
    let mut residual = Residual::new(capacity);
    for i in 0..n {
        for j in 0..n {
            residual.flow[i][j] = outcome.flow[i][j] - outcome.flow[j][i];
        }
    }
    let parent = residual.search(source, None);
    let reachable: Vec<bool> = (0..n)
        .map(|node| node == source || parent[node].is_some())
        .collect();

    let mut edges = Vec::new();
    let mut total: Capacity = 0;
    for i in (0..n).filter(|&i| reachable[i]) {
        for j in (0..n).filter(|&j| !reachable[j]) {
            if capacity[i][j] > 0 {
                edges.push((i, j, capacity[i][j]));
                total += capacity[i][j];
            }
        }
    }
    Ok(MinCut {
        source_side: (0..n).filter(|&node| reachable[node]).collect(),
        edges,
        capacity: total,
    })
}

fn validate(capacity: &CapacityMatrix, source: NodeIndex, sink: NodeIndex) -> Result<(), FlowError> {
    let n = ensure_square(capacity)?;
    ensure_index(source, n, "source")?;
    ensure_index(sink, n, "sink")?;
    if source == sink {
        return Err(
            FlowError::config("source-equals-sink", "source and sink must differ")
                .with_context("node", source),
        );
    }
    checked_total(capacity)?;
    Ok(())
}

fn ensure_index(index: NodeIndex, n: usize, label: &str) -> Result<(), FlowError> {
    if index >= n {
        return Err(
            FlowError::config("index-out-of-range", "terminal index outside matrix")
                .with_context(label, index)
                .with_context("nodes", n),
        );
    }
    Ok(())
}
