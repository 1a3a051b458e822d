use lognet_core::errors::FlowError;
use lognet_core::rng::RngHandle;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::network::{EdgeSpec, FlowNetwork, NetworkSpec};

const TERMINAL_LINKS: u64 = 0;
const DESTINATION_ASSIGNMENT: u64 = 1;

/// Shape of a generated three-tier network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TieredShape {
    /// Number of supply terminals.
    pub terminals: usize,
    /// Number of hubs.
    pub hubs: usize,
    /// Number of destinations.
    pub destinations: usize,
    /// Probability that a given terminal→hub edge exists.
    pub terminal_density: f64,
    /// Largest capacity drawn for any edge (smallest is 1).
    pub max_capacity: i64,
}

impl Default for TieredShape {
    fn default() -> Self {
        Self {
            terminals: 2,
            hubs: 4,
            destinations: 14,
            terminal_density: 0.5,
            max_capacity: 30,
        }
    }
}

/// Generates a random terminal → hub → destination network.
///
/// Every terminal feeds at least one hub and every destination is served by
/// exactly one hub, mirroring the tree-like store assignment of real
/// distribution networks. The same seed always yields the same network.
///
/// Terminal links and destination assignment draw from separate substreams of
/// one master seed taken from `rng`, so changing `terminal_density` leaves the
/// hub→destination edges untouched.
pub fn gen_tiered_network(shape: TieredShape, rng: &mut RngHandle) -> Result<FlowNetwork, FlowError> {
    if shape.hubs == 0 && shape.terminals > 0 {
        return Err(FlowError::config(
            "empty-tier",
            "tiered generator needs at least one hub to connect terminals",
        ));
    }
    let max_capacity = shape.max_capacity.max(1);
    let name = |prefix: &str, i: usize| format!("{prefix} {}", i + 1);
    let terminals: Vec<String> = (0..shape.terminals).map(|i| name("T", i)).collect();
    let hubs: Vec<String> = (0..shape.hubs).map(|i| name("H", i)).collect();
    let destinations: Vec<String> = (0..shape.destinations).map(|i| name("D", i)).collect();

    let master = rng.next_u64();
    let mut links = RngHandle::substream(master, TERMINAL_LINKS);
    let mut stores = RngHandle::substream(master, DESTINATION_ASSIGNMENT);

    let mut edges = Vec::new();
    for terminal in &terminals {
        let mut linked = false;
        for hub in &hubs {
            if links.chance(shape.terminal_density) {
                edges.push(EdgeSpec::new(terminal, hub, links.capacity(1, max_capacity)));
                linked = true;
            }
        }
        if !linked {
            if let Some(hub) = hubs.choose(&mut links) {
                edges.push(EdgeSpec::new(terminal, hub, links.capacity(1, max_capacity)));
            }
        }
    }
    if !hubs.is_empty() {
        for destination in &destinations {
            let hub = &hubs[stores.gen_range(0..hubs.len())];
            edges.push(EdgeSpec::new(hub, destination, stores.capacity(1, max_capacity)));
        }
    }

    FlowNetwork::from_spec(&NetworkSpec {
        terminals,
        hubs,
        destinations,
        edges,
    })
}
