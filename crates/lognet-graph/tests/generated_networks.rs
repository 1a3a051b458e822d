use lognet_core::rng::RngHandle;
use lognet_graph::{analyze, canonical_hash, gen_tiered_network, AnalysisConfig, TieredShape};
use proptest::prelude::*;

#[test]
fn generator_is_seed_deterministic() {
    let shape = TieredShape::default();
    let a = gen_tiered_network(shape, &mut RngHandle::from_seed(11)).unwrap();
    let b = gen_tiered_network(shape, &mut RngHandle::from_seed(11)).unwrap();
    assert_eq!(canonical_hash(&a), canonical_hash(&b));
    assert_eq!(a.node_count(), 20);
    assert_eq!(a.destinations().len(), 14);
}

#[test]
fn every_terminal_and_destination_is_connected() {
    let shape = TieredShape {
        terminal_density: 0.0,
        ..TieredShape::default()
    };
    let network = gen_tiered_network(shape, &mut RngHandle::from_seed(3)).unwrap();
    for terminal in network.terminals() {
        assert_eq!(network.capacity()[terminal].iter().filter(|&&c| c > 0).count(), 1);
    }
    for destination in network.destinations() {
        let feeders = network
            .capacity()
            .iter()
            .filter(|row| row[destination] > 0)
            .count();
        assert_eq!(feeders, 1);
    }
}

#[test]
fn terminal_density_leaves_destination_assignment_unchanged() {
    let sparse = TieredShape {
        terminal_density: 0.1,
        ..TieredShape::default()
    };
    let dense = TieredShape {
        terminal_density: 0.9,
        ..TieredShape::default()
    };
    let a = gen_tiered_network(sparse, &mut RngHandle::from_seed(21)).unwrap();
    let b = gen_tiered_network(dense, &mut RngHandle::from_seed(21)).unwrap();

    let store_edges = |network: &lognet_graph::FlowNetwork| -> Vec<(usize, usize, i64)> {
        let destinations = network.destinations();
        network
            .edges()
            .into_iter()
            .filter(|(_, to, _)| destinations.contains(to))
            .collect()
    };
    assert_eq!(store_edges(&a), store_edges(&b));
    assert_eq!(store_edges(&a).len(), 14);
}

#[test]
fn terminals_without_hubs_rejected() {
    let shape = TieredShape {
        hubs: 0,
        ..TieredShape::default()
    };
    let err = gen_tiered_network(shape, &mut RngHandle::from_seed(1)).unwrap_err();
    assert_eq!(err.code(), "empty-tier");
}

proptest! {
    #[test]
    fn analysis_invariants_hold(seed in any::<u64>(), terminals in 1usize..4, hubs in 1usize..5, destinations in 1usize..10) {
        let shape = TieredShape { terminals, hubs, destinations, ..TieredShape::default() };
        let network = gen_tiered_network(shape, &mut RngHandle::from_seed(seed)).unwrap();
        let analysis = analyze(&network, &AnalysisConfig::default()).unwrap();

        let cut = analysis.min_cut.as_ref().unwrap();
        prop_assert_eq!(cut.capacity, analysis.max_flow);

        let out: i64 = analysis.terminal_outflows.iter().map(|r| r.flow).sum();
        let inn: i64 = analysis.destination_inflows.iter().map(|r| r.flow).sum();
        prop_assert_eq!(out, analysis.max_flow);
        prop_assert_eq!(inn, analysis.max_flow);

        for hub in &analysis.hub_utilization {
            prop_assert_eq!(hub.inflow, hub.outflow);
            prop_assert!(hub.in_utilization <= 100 && hub.out_utilization <= 100);
        }
        for window in analysis.destination_inflows.windows(2) {
            prop_assert!(window[0].flow <= window[1].flow);
        }
        prop_assert!(analysis.attributions.iter().all(|a| a.flow > 0));
        for edge in &analysis.bottlenecks {
            prop_assert_eq!(analysis.flow_between(&edge.source, &edge.destination).unwrap(), edge.capacity);
        }
    }
}
