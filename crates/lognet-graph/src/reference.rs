use lognet_core::errors::FlowError;

use crate::network::{EdgeSpec, FlowNetwork, NetworkSpec};

const TERMINALS: usize = 2;
const WAREHOUSES: usize = 4;
const STORES: usize = 14;

const EDGES: [(&str, &str, i64); 20] = [
    ("Terminal 1", "Warehouse 1", 25),
    ("Terminal 1", "Warehouse 2", 20),
    ("Terminal 1", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 4", 30),
    ("Terminal 2", "Warehouse 2", 10),
    ("Warehouse 1", "Store 1", 15),
    ("Warehouse 1", "Store 2", 10),
    ("Warehouse 1", "Store 3", 20),
    ("Warehouse 2", "Store 4", 15),
    ("Warehouse 2", "Store 5", 10),
    ("Warehouse 2", "Store 6", 25),
    ("Warehouse 3", "Store 7", 20),
    ("Warehouse 3", "Store 8", 15),
    ("Warehouse 3", "Store 9", 10),
    ("Warehouse 4", "Store 10", 20),
    ("Warehouse 4", "Store 11", 10),
    ("Warehouse 4", "Store 12", 15),
    ("Warehouse 4", "Store 13", 5),
    ("Warehouse 4", "Store 14", 10),
];

/// Description of the built-in two-terminal, four-warehouse, fourteen-store network.
pub fn reference_spec() -> NetworkSpec {
    let numbered = |prefix: &str, count: usize| -> Vec<String> {
        (1..=count).map(|i| format!("{prefix} {i}")).collect()
    };
    NetworkSpec {
        terminals: numbered("Terminal", TERMINALS),
        hubs: numbered("Warehouse", WAREHOUSES),
        destinations: numbered("Store", STORES),
        edges: EDGES
            .iter()
            .map(|&(from, to, capacity)| EdgeSpec::new(from, to, capacity))
            .collect(),
    }
}

/// Builds the built-in reference network.
pub fn reference_network() -> Result<FlowNetwork, FlowError> {
    FlowNetwork::from_spec(&reference_spec())
}
