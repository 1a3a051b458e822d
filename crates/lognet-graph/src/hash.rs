use sha2::{Digest, Sha256};

use crate::network::FlowNetwork;

/// Computes the canonical structural hash of a network.
///
/// Covers node names, roles, index order and every positive-capacity edge, so
/// two networks hash equal exactly when they produce identical analyses.
pub fn canonical_hash(network: &FlowNetwork) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"lognet-network-v1");

    hasher.update((network.node_count() as u64).to_le_bytes());
    for node in network.nodes() {
        hasher.update(node.role.as_str().as_bytes());
        update_str(&node.name, &mut hasher);
    }

    let edges = network.edges();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (from, to, capacity) in edges {
        hasher.update((from as u64).to_le_bytes());
        hasher.update((to as u64).to_le_bytes());
        hasher.update(capacity.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
