use lognet_core::errors::FlowError;
use lognet_core::NodeRole;
use lognet_graph::{EdgeSpec, FlowNetwork, NetworkSpec};

fn small_spec() -> NetworkSpec {
    NetworkSpec {
        terminals: vec!["North".into()],
        hubs: vec!["Depot".into()],
        destinations: vec!["Shop A".into(), "Shop B".into()],
        edges: vec![
            EdgeSpec::new("Depot", "Shop B", 4),
            EdgeSpec::new("North", "Depot", 9),
            EdgeSpec::new("Depot", "Shop A", 6),
        ],
    }
}

#[test]
fn indices_follow_tier_order() {
    let network = FlowNetwork::from_spec(&small_spec()).unwrap();
    assert_eq!(network.node_count(), 4);
    assert_eq!(network.index_of("North").unwrap(), 0);
    assert_eq!(network.index_of("Depot").unwrap(), 1);
    assert_eq!(network.index_of("Shop B").unwrap(), 3);
    assert_eq!(network.name_of(2).unwrap(), "Shop A");
    assert_eq!(network.role_of(1).unwrap(), NodeRole::Hub);
    assert_eq!(network.terminals(), vec![0]);
    assert_eq!(network.hubs(), vec![1]);
    assert_eq!(network.destinations(), vec![2, 3]);
}

#[test]
fn edges_enumerate_row_major() {
    let network = FlowNetwork::from_spec(&small_spec()).unwrap();
    assert_eq!(network.edges(), vec![(0, 1, 9), (1, 2, 6), (1, 3, 4)]);
    let named = network.named_edges();
    assert_eq!(named[0].source, "North");
    assert_eq!(named[0].destination, "Depot");
    assert_eq!(network.capacity_between("Depot", "Shop A").unwrap(), 6);
    assert_eq!(network.capacity_between("Shop A", "Depot").unwrap(), 0);
    assert_eq!(network.total_capacity().unwrap(), 19);
}

#[test]
fn unknown_node_reports_name() {
    let mut spec = small_spec();
    spec.edges.push(EdgeSpec::new("Depot", "Shop C", 3));
    let err = FlowNetwork::from_spec(&spec).unwrap_err();
    match err {
        FlowError::Config(info) => {
            assert_eq!(info.code, "unknown-node");
            assert_eq!(info.context.get("node"), Some(&"Shop C".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn negative_capacity_rejected() {
    let mut spec = small_spec();
    spec.edges.push(EdgeSpec::new("North", "Shop A", -2));
    let err = FlowNetwork::from_spec(&spec).unwrap_err();
    assert_eq!(err.code(), "negative-capacity");
    assert_eq!(err.info().context.get("capacity"), Some(&"-2".to_string()));
}

#[test]
fn duplicate_node_rejected() {
    let mut spec = small_spec();
    spec.destinations.push("Depot".into());
    let err = FlowNetwork::from_spec(&spec).unwrap_err();
    assert_eq!(err.code(), "duplicate-node");
}

#[test]
fn self_loop_rejected() {
    let mut spec = small_spec();
    spec.edges.push(EdgeSpec::new("Depot", "Depot", 1));
    let err = FlowNetwork::from_spec(&spec).unwrap_err();
    assert_eq!(err.code(), "self-loop");
}

#[test]
fn later_edge_replaces_earlier() {
    let mut spec = small_spec();
    spec.edges.push(EdgeSpec::new("North", "Depot", 2));
    let network = FlowNetwork::from_spec(&spec).unwrap();
    assert_eq!(network.capacity_between("North", "Depot").unwrap(), 2);
    assert_eq!(network.edges().len(), 3);
}

#[test]
fn capacity_sum_overflow_rejected() {
    let mut spec = small_spec();
    spec.edges = vec![
        EdgeSpec::new("North", "Depot", i64::MAX),
        EdgeSpec::new("Depot", "Shop A", 1),
    ];
    let err = FlowNetwork::from_spec(&spec).unwrap_err();
    assert_eq!(err.code(), "capacity-overflow");
}

#[test]
fn empty_spec_builds_empty_network() {
    let network = FlowNetwork::from_spec(&NetworkSpec::default()).unwrap();
    assert_eq!(network.node_count(), 0);
    assert!(network.edges().is_empty());
    assert!(network.name_of(0).is_err());
}

#[test]
fn spec_round_trips_through_network() {
    let network = FlowNetwork::from_spec(&small_spec()).unwrap();
    let rebuilt = FlowNetwork::from_spec(&network.to_spec()).unwrap();
    assert_eq!(rebuilt, network);
}
