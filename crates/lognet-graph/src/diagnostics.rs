//! Pure diagnostics over a solved network: saturated edges, hub utilization,
//! terminal/destination totals and terminal→destination attribution.
//!
//! Every function takes the network as graph context plus a flow matrix
//! restricted to the network's node count.

use std::collections::BTreeMap;

use lognet_core::{Capacity, Flow, FlowMatrix, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::network::{FlowNetwork, NamedEdge};

/// Total flow through a named node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFlow {
    /// Node name.
    pub node: String,
    /// Flow amount.
    pub flow: Flow,
}

/// Utilization record for one hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubUtilization {
    /// Hub name.
    pub hub: String,
    /// Flow entering the hub.
    pub inflow: Flow,
    /// Flow leaving the hub.
    pub outflow: Flow,
    /// Sum of inbound edge capacities.
    pub in_capacity: Capacity,
    /// Sum of outbound edge capacities.
    pub out_capacity: Capacity,
    /// `inflow / in_capacity` in whole percent, `0` without inbound capacity.
    pub in_utilization: i64,
    /// `outflow / out_capacity` in whole percent, `0` without outbound capacity.
    pub out_utilization: i64,
}

/// Estimated flow from one terminal to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Originating terminal.
    pub terminal: String,
    /// Receiving destination.
    pub destination: String,
    /// Estimated flow, always positive.
    pub flow: Flow,
}

/// Edges that carry flow equal to their capacity.
pub fn bottlenecks(network: &FlowNetwork, flow: &FlowMatrix) -> Vec<NamedEdge> {
    network
        .edges()
        .into_iter()
        .filter(|&(i, j, cap)| entry(flow, i, j) == cap)
        .map(|(i, j, capacity)| named(network, i, j, capacity))
        .collect()
}

/// The `count` edges with the lowest capacity, ties kept in enumeration order.
pub fn low_capacity_routes(network: &FlowNetwork, count: usize) -> Vec<NamedEdge> {
    let mut edges = network.named_edges();
    edges.sort_by_key(|edge| edge.capacity);
    edges.truncate(count);
    edges
}

/// Outflow of every terminal, in index order.
pub fn terminal_outflows(network: &FlowNetwork, flow: &FlowMatrix) -> Vec<NodeFlow> {
    network
        .terminals()
        .into_iter()
        .map(|t| node_flow(network, t, outflow(flow, t)))
        .collect()
}

/// Inflow of every destination, ascending; equal inflows keep index order.
pub fn destination_inflows(network: &FlowNetwork, flow: &FlowMatrix) -> Vec<NodeFlow> {
    let mut inflows: Vec<NodeFlow> = network
        .destinations()
        .into_iter()
        .map(|d| node_flow(network, d, inflow(flow, d)))
        .collect();
    inflows.sort_by_key(|record| record.flow);
    inflows
}

/// Terminals whose outflow equals the largest terminal outflow.
pub fn leading_terminals(outflows: &[NodeFlow]) -> Vec<NodeFlow> {
    extreme(outflows, outflows.iter().map(|record| record.flow).max())
}

/// Destinations whose inflow equals the smallest destination inflow.
pub fn least_served_destinations(inflows: &[NodeFlow]) -> Vec<NodeFlow> {
    extreme(inflows, inflows.iter().map(|record| record.flow).min())
}

/// Inflow, outflow and capacity utilization of every hub.
pub fn hub_utilization(network: &FlowNetwork, flow: &FlowMatrix) -> Vec<HubUtilization> {
    let capacity = network.capacity();
    let n = network.node_count();
    network
        .hubs()
        .into_iter()
        .map(|hub| {
            let others = move || (0..n).filter(move |&other| other != hub);
            let inflow: Flow = others().map(|i| entry(flow, i, hub)).sum();
            let outflow: Flow = others().map(|j| entry(flow, hub, j)).sum();
            let in_capacity: Capacity = others().map(|i| capacity[i][hub]).sum();
            let out_capacity: Capacity = others().map(|j| capacity[hub][j]).sum();
            HubUtilization {
                hub: network.nodes()[hub].name.clone(),
                inflow,
                outflow,
                in_capacity,
                out_capacity,
                in_utilization: percent(inflow, in_capacity),
                out_utilization: percent(outflow, out_capacity),
            }
        })
        .collect()
}

/// Apportions hub→destination flow back to the terminals feeding each hub.
///
/// For every hub, each destination edge's flow is split across the terminals
/// in proportion to their share of the hub's inbound flow. Each split is
/// rounded on its own and the splits are summed over hubs, so pair totals are
/// estimates: they need not add up to the destination inflow.
pub fn attribute_terminal_flows(network: &FlowNetwork, flow: &FlowMatrix) -> Vec<Attribution> {
    let terminals = network.terminals();
    let destinations = network.destinations();
    let n = network.node_count();
    let mut pairs: BTreeMap<(NodeIndex, NodeIndex), Flow> = BTreeMap::new();

    for hub in network.hubs() {
        let hub_inflow: Flow = (0..n)
            .filter(|&i| i != hub)
            .map(|i| entry(flow, i, hub))
            .sum();
        if hub_inflow <= 0 {
            continue;
        }
        let feeds: Vec<(NodeIndex, Flow)> = terminals
            .iter()
            .map(|&t| (t, entry(flow, t, hub)))
            .filter(|&(_, amount)| amount > 0)
            .collect();
        for &destination in &destinations {
            let delivered = entry(flow, hub, destination);
            if delivered <= 0 {
                continue;
            }
            for &(terminal, fed) in &feeds {
                let share = delivered as f64 * fed as f64 / hub_inflow as f64;
                let estimate = share.round_ties_even() as Flow;
                if estimate > 0 {
                    *pairs.entry((terminal, destination)).or_insert(0) += estimate;
                }
            }
        }
    }

    pairs
        .into_iter()
        .map(|((t, d), amount)| Attribution {
            terminal: network.nodes()[t].name.clone(),
            destination: network.nodes()[d].name.clone(),
            flow: amount,
        })
        .collect()
}

/// `round(value / total * 100)`, or `0` when `total` is zero.
pub fn percent(value: Flow, total: Capacity) -> i64 {
    if total <= 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).round_ties_even() as i64
}

fn extreme(records: &[NodeFlow], target: Option<Flow>) -> Vec<NodeFlow> {
    match target {
        Some(target) => records
            .iter()
            .filter(|record| record.flow == target)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

fn outflow(flow: &FlowMatrix, node: NodeIndex) -> Flow {
    flow.get(node).map(|row| row.iter().sum()).unwrap_or(0)
}

fn inflow(flow: &FlowMatrix, node: NodeIndex) -> Flow {
    flow.iter().filter_map(|row| row.get(node)).sum()
}

fn entry(flow: &FlowMatrix, i: NodeIndex, j: NodeIndex) -> Flow {
    flow.get(i).and_then(|row| row.get(j)).copied().unwrap_or(0)
}

fn node_flow(network: &FlowNetwork, node: NodeIndex, amount: Flow) -> NodeFlow {
    NodeFlow {
        node: network.nodes()[node].name.clone(),
        flow: amount,
    }
}

fn named(network: &FlowNetwork, i: NodeIndex, j: NodeIndex, capacity: Capacity) -> NamedEdge {
    NamedEdge {
        source: network.nodes()[i].name.clone(),
        destination: network.nodes()[j].name.clone(),
        capacity,
    }
}
