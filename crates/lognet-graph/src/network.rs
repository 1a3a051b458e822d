use std::collections::BTreeMap;

use log::warn;
use lognet_core::errors::FlowError;
use lognet_core::{zero_matrix, Capacity, CapacityMatrix, Flow, FlowMatrix, NodeIndex, NodeRole};
use serde::{Deserialize, Serialize};

/// One directed edge of a network description, addressed by node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Name of the node the edge leaves.
    pub from: String,
    /// Name of the node the edge enters.
    pub to: String,
    /// Maximum sustained throughput of the edge.
    pub capacity: Capacity,
}

impl EdgeSpec {
    /// Creates an edge description.
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: Capacity) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }
}

/// Serializable description of a tiered network.
///
/// Nodes are declared per tier; edges may only reference declared nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Supply terminals, merged behind the super-source.
    #[serde(default)]
    pub terminals: Vec<String>,
    /// Intermediate hubs.
    #[serde(default)]
    pub hubs: Vec<String>,
    /// Demand points, merged behind the super-sink.
    #[serde(default)]
    pub destinations: Vec<String>,
    /// Edge list. A later edge between the same ordered pair replaces an earlier one.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// A node of a built network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique node name.
    pub name: String,
    /// Tier of the node.
    pub role: NodeRole,
}

/// Named edge with its capacity, as exposed to reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEdge {
    /// Name of the node the edge leaves.
    pub source: String,
    /// Name of the node the edge enters.
    pub destination: String,
    /// Configured capacity.
    pub capacity: Capacity,
}

/// Graph context for one analysis run: node identities, the name↔index
/// bijection and the dense capacity matrix.
///
/// Indices are assigned terminals first, then hubs, then destinations, each in
/// declaration order, and never change for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork {
    nodes: Vec<NodeRecord>,
    index: BTreeMap<String, NodeIndex>,
    capacity: CapacityMatrix,
}

impl FlowNetwork {
    /// Builds a network from its description, validating every edge.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self, FlowError> {
        let mut nodes = Vec::new();
        let mut index = BTreeMap::new();
        let tiers = [
            (NodeRole::Terminal, &spec.terminals),
            (NodeRole::Hub, &spec.hubs),
            (NodeRole::Destination, &spec.destinations),
        ];
        for (role, names) in tiers {
            for name in names {
                if index.contains_key(name) {
                    return Err(FlowError::config("duplicate-node", "node declared twice")
                        .with_context("node", name)
                        .with_context("role", role));
                }
                index.insert(name.clone(), nodes.len());
                nodes.push(NodeRecord {
                    name: name.clone(),
                    role,
                });
            }
        }

        let mut capacity = zero_matrix(nodes.len());
        for edge in &spec.edges {
            let from = lookup(&index, &edge.from)?;
            let to = lookup(&index, &edge.to)?;
            if edge.capacity < 0 {
                return Err(
                    FlowError::config("negative-capacity", "edge capacity must be non-negative")
                        .with_context("from", &edge.from)
                        .with_context("to", &edge.to)
                        .with_context("capacity", edge.capacity),
                );
            }
            if from == to {
                return Err(FlowError::config("self-loop", "edge starts and ends at the same node")
                    .with_context("node", &edge.from));
            }
            if capacity[from][to] != 0 {
                warn!(
                    "edge {} -> {} redefined, capacity {} replaces {}",
                    edge.from, edge.to, edge.capacity, capacity[from][to]
                );
            }
            capacity[from][to] = edge.capacity;
        }

        let network = Self {
            nodes,
            index,
            capacity,
        };
        network.total_capacity()?;
        Ok(network)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns every node record in index order.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Returns the dense capacity matrix.
    pub fn capacity(&self) -> &CapacityMatrix {
        &self.capacity
    }

    /// Looks up the index of a node by name.
    pub fn index_of(&self, name: &str) -> Result<NodeIndex, FlowError> {
        lookup(&self.index, name)
    }

    /// Returns the name of the node at `index`.
    pub fn name_of(&self, index: NodeIndex) -> Result<&str, FlowError> {
        self.record(index).map(|node| node.name.as_str())
    }

    /// Returns the role of the node at `index`.
    pub fn role_of(&self, index: NodeIndex) -> Result<NodeRole, FlowError> {
        self.record(index).map(|node| node.role)
    }

    /// Returns the indices of all nodes with the given role, ascending.
    pub fn indices_with_role(&self, role: NodeRole) -> Vec<NodeIndex> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.role == role)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Supply terminal indices.
    pub fn terminals(&self) -> Vec<NodeIndex> {
        self.indices_with_role(NodeRole::Terminal)
    }

    /// Hub indices.
    pub fn hubs(&self) -> Vec<NodeIndex> {
        self.indices_with_role(NodeRole::Hub)
    }

    /// Destination indices.
    pub fn destinations(&self) -> Vec<NodeIndex> {
        self.indices_with_role(NodeRole::Destination)
    }

    /// Enumerates all `(i, j, capacity)` with positive capacity in row-major order.
    pub fn edges(&self) -> Vec<(NodeIndex, NodeIndex, Capacity)> {
        matrix_edges(&self.capacity)
    }

    /// Enumerates all edges by name, in the same order as [`FlowNetwork::edges`].
    pub fn named_edges(&self) -> Vec<NamedEdge> {
        self.edges()
            .into_iter()
            .map(|(i, j, capacity)| NamedEdge {
                source: self.nodes[i].name.clone(),
                destination: self.nodes[j].name.clone(),
                capacity,
            })
            .collect()
    }

    /// Returns the capacity of the edge `from → to`, `0` when absent.
    pub fn capacity_between(&self, from: &str, to: &str) -> Result<Capacity, FlowError> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.capacity[i][j])
    }

    /// Reads the flow on `from → to` from a flow matrix produced for this network.
    pub fn flow_between(&self, flow: &FlowMatrix, from: &str, to: &str) -> Result<Flow, FlowError> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        flow.get(i)
            .and_then(|row| row.get(j))
            .copied()
            .ok_or_else(|| {
                FlowError::graph("index-out-of-range", "flow matrix smaller than network")
                    .with_context("rows", flow.len())
                    .with_context("nodes", self.node_count())
            })
    }

    /// Sum of all edge capacities, failing when it does not fit the capacity type.
    pub fn total_capacity(&self) -> Result<Capacity, FlowError> {
        checked_total(&self.capacity)
    }

    /// Rebuilds the description this network was built from (deduplicated edges).
    pub fn to_spec(&self) -> NetworkSpec {
        let names = |role: NodeRole| -> Vec<String> {
            self.nodes
                .iter()
                .filter(|node| node.role == role)
                .map(|node| node.name.clone())
                .collect()
        };
        NetworkSpec {
            terminals: names(NodeRole::Terminal),
            hubs: names(NodeRole::Hub),
            destinations: names(NodeRole::Destination),
            edges: self
                .named_edges()
                .into_iter()
                .map(|edge| EdgeSpec::new(edge.source, edge.destination, edge.capacity))
                .collect(),
        }
    }

    fn record(&self, index: NodeIndex) -> Result<&NodeRecord, FlowError> {
        self.nodes.get(index).ok_or_else(|| {
            FlowError::graph("index-out-of-range", "node index outside network")
                .with_context("index", index)
                .with_context("nodes", self.nodes.len())
        })
    }
}

/// Enumerates all positive-capacity entries of a matrix in row-major order.
pub(crate) fn matrix_edges(capacity: &CapacityMatrix) -> Vec<(NodeIndex, NodeIndex, Capacity)> {
    let mut edges = Vec::new();
    for (i, row) in capacity.iter().enumerate() {
        for (j, &cap) in row.iter().enumerate() {
            if cap > 0 {
                edges.push((i, j, cap));
            }
        }
    }
    edges
}

/// Checked sum over a capacity matrix; rejects negative entries and overflow.
pub(crate) fn checked_total(capacity: &CapacityMatrix) -> Result<Capacity, FlowError> {
    let mut total: Capacity = 0;
    for (i, row) in capacity.iter().enumerate() {
        for (j, &cap) in row.iter().enumerate() {
            if cap < 0 {
                return Err(
                    FlowError::config("negative-capacity", "edge capacity must be non-negative")
                        .with_context("from", i)
                        .with_context("to", j)
                        .with_context("capacity", cap),
                );
            }
            total = total.checked_add(cap).ok_or_else(|| {
                FlowError::config("capacity-overflow", "sum of capacities overflows i64")
                    .with_context("from", i)
                    .with_context("to", j)
                    .with_hint("scale capacities down to a common unit")
            })?;
        }
    }
    Ok(total)
}

/// Ensures the matrix is square, returning its dimension.
pub(crate) fn ensure_square(capacity: &CapacityMatrix) -> Result<usize, FlowError> {
    let n = capacity.len();
    if let Some((row, len)) = capacity
        .iter()
        .enumerate()
        .map(|(row, values)| (row, values.len()))
        .find(|(_, len)| *len != n)
    {
        return Err(
            FlowError::graph("non-square-matrix", "capacity matrix must be square")
                .with_context("rows", n)
                .with_context("row", row)
                .with_context("columns", len),
        );
    }
    Ok(n)
}

fn lookup(index: &BTreeMap<String, NodeIndex>, name: &str) -> Result<NodeIndex, FlowError> {
    index.get(name).copied().ok_or_else(|| {
        FlowError::config("unknown-node", "node is not declared in the network")
            .with_context("node", name)
    })
}
