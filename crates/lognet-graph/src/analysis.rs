use log::info;
use lognet_core::errors::FlowError;
use lognet_core::provenance::RunProvenance;
use lognet_core::{Flow, FlowMatrix};
use serde::{Deserialize, Serialize};

use crate::augment::augment;
use crate::config::AnalysisConfig;
use crate::diagnostics::{
    attribute_terminal_flows, bottlenecks, destination_inflows, hub_utilization,
    leading_terminals, least_served_destinations, low_capacity_routes, terminal_outflows,
    Attribution, HubUtilization, NodeFlow,
};
use crate::hash::canonical_hash;
use crate::network::{FlowNetwork, NamedEdge};
use crate::solver::{edmonds_karp, min_cut, AugmentingPath};

/// Minimum cut expressed by node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCut {
    /// Network nodes on the source side of the cut.
    pub source_side: Vec<String>,
    /// Saturated edges crossing the cut.
    pub edges: Vec<NamedEdge>,
    /// Total capacity of the crossing edges.
    pub capacity: Flow,
}

/// Everything derived from one aggregate max-flow query over a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    /// Schema, network hash and tool versions.
    pub provenance: RunProvenance,
    /// Maximum flow from all terminals to all destinations.
    pub max_flow: Flow,
    /// Node names in index order; rows and columns of `flow` follow it.
    pub nodes: Vec<String>,
    /// Flow matrix restricted to the network's nodes.
    pub flow: FlowMatrix,
    /// Augmenting paths in the augmented index space (super-source is
    /// `nodes.len()`, super-sink `nodes.len() + 1`).
    pub paths: Vec<AugmentingPath>,
    /// Every configured edge.
    pub edges: Vec<NamedEdge>,
    /// Edges whose flow equals their capacity.
    pub bottlenecks: Vec<NamedEdge>,
    /// Lowest-capacity edges.
    pub low_capacity_routes: Vec<NamedEdge>,
    /// Outflow per terminal.
    pub terminal_outflows: Vec<NodeFlow>,
    /// Terminals with the largest outflow.
    pub leading_terminals: Vec<NodeFlow>,
    /// Inflow per destination, ascending.
    pub destination_inflows: Vec<NodeFlow>,
    /// Destinations with the smallest inflow.
    pub least_served_destinations: Vec<NodeFlow>,
    /// Utilization per hub.
    pub hub_utilization: Vec<HubUtilization>,
    /// Estimated terminal→destination flows (approximate, see
    /// [`attribute_terminal_flows`]).
    pub attributions: Vec<Attribution>,
    /// Minimum cut, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cut: Option<NamedCut>,
}

impl NetworkAnalysis {
    /// Reads the flow on `from → to` by node name.
    pub fn flow_between(&self, from: &str, to: &str) -> Result<Flow, FlowError> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        self.flow
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .ok_or_else(|| {
                FlowError::graph("index-out-of-range", "flow matrix smaller than node list")
                    .with_context("rows", self.flow.len())
                    .with_context("nodes", self.nodes.len())
            })
    }

    fn position(&self, name: &str) -> Result<usize, FlowError> {
        self.nodes
            .iter()
            .position(|node| node == name)
            .ok_or_else(|| {
                FlowError::config("unknown-node", "node is not part of the analysis")
                    .with_context("node", name)
            })
    }
}

/// Runs the full pipeline: augment terminals and destinations behind
/// synthetic nodes, solve, restrict, and derive every diagnostic.
pub fn analyze(network: &FlowNetwork, config: &AnalysisConfig) -> Result<NetworkAnalysis, FlowError> {
    let n = network.node_count();
    let augmented = augment(
        network.capacity(),
        &network.terminals(),
        &network.destinations(),
    )?;
    let outcome = edmonds_karp(
        &augmented.capacity,
        augmented.super_source(),
        augmented.super_sink(),
    )?;

    let cut = if config.min_cut {
        let cut = min_cut(&augmented.capacity, &outcome, augmented.super_source())?;
        Some(NamedCut {
            source_side: cut
                .source_side
                .iter()
                .filter(|&&node| node < n)
                .map(|&node| network.nodes()[node].name.clone())
                .collect(),
            edges: cut
                .edges
                .iter()
                .filter(|&&(i, j, _)| i < n && j < n)
                .map(|&(i, j, capacity)| NamedEdge {
                    source: network.nodes()[i].name.clone(),
                    destination: network.nodes()[j].name.clone(),
                    capacity,
                })
                .collect(),
            capacity: cut.capacity,
        })
    } else {
        None
    };

    let restricted = outcome.restrict(n);
    let flow = restricted.flow;
    let outflows = terminal_outflows(network, &flow);
    let inflows = destination_inflows(network, &flow);
    let analysis = NetworkAnalysis {
        provenance: RunProvenance::for_network(canonical_hash(network)),
        max_flow: restricted.max_flow,
        nodes: network.nodes().iter().map(|node| node.name.clone()).collect(),
        paths: restricted.paths,
        edges: network.named_edges(),
        bottlenecks: bottlenecks(network, &flow),
        low_capacity_routes: low_capacity_routes(network, config.low_capacity_routes),
        leading_terminals: leading_terminals(&outflows),
        least_served_destinations: least_served_destinations(&inflows),
        terminal_outflows: outflows,
        destination_inflows: inflows,
        hub_utilization: hub_utilization(network, &flow),
        attributions: attribute_terminal_flows(network, &flow),
        min_cut: cut,
        flow,
    };
    info!(
        "analyzed {} nodes: max flow {}, {} bottlenecks, {} attributed pairs",
        n,
        analysis.max_flow,
        analysis.bottlenecks.len(),
        analysis.attributions.len()
    );
    Ok(analysis)
}
