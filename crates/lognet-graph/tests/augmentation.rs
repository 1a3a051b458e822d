use lognet_graph::{augment, edmonds_karp};

fn matrix(n: usize, edges: &[(usize, usize, i64)]) -> Vec<Vec<i64>> {
    let mut capacity = vec![vec![0; n]; n];
    for &(from, to, cap) in edges {
        capacity[from][to] = cap;
    }
    capacity
}

// A=0, B=1, M=2, X=3, Y=4
fn two_by_two() -> Vec<Vec<i64>> {
    matrix(
        5,
        &[
            (0, 2, 7),
            (1, 2, 4),
            (0, 3, 3),
            (2, 3, 5),
            (2, 4, 8),
            (1, 4, 2),
        ],
    )
}

#[test]
fn layout_copies_original_and_wires_terminals() {
    let capacity = two_by_two();
    let augmented = augment(&capacity, &[0, 1], &[3, 4]).unwrap();
    assert_eq!(augmented.original_size, 5);
    assert_eq!(augmented.super_source(), 5);
    assert_eq!(augmented.super_sink(), 6);
    assert_eq!(augmented.capacity.len(), 7);
    assert_eq!(augmented.super_capacity, 30);

    for i in 0..5 {
        assert_eq!(&augmented.capacity[i][..5], &capacity[i][..]);
    }
    assert_eq!(augmented.capacity[5][0], 30);
    assert_eq!(augmented.capacity[5][1], 30);
    assert_eq!(augmented.capacity[3][6], 30);
    assert_eq!(augmented.capacity[4][6], 30);
    assert_eq!(augmented.capacity[5][2], 0);
    assert_eq!(augmented.capacity[6].iter().sum::<i64>(), 0);
}

#[test]
fn super_nodes_match_manual_wiring() {
    let capacity = two_by_two();
    let augmented = augment(&capacity, &[0, 1], &[3, 4]).unwrap();
    let automatic = edmonds_karp(&augmented.capacity, 5, 6).unwrap();

    let mut manual = vec![vec![0; 7]; 7];
    for i in 0..5 {
        manual[i][..5].copy_from_slice(&capacity[i]);
    }
    manual[5][0] = 1_000;
    manual[5][1] = 1_000;
    manual[3][6] = 1_000;
    manual[4][6] = 1_000;
    let by_hand = edmonds_karp(&manual, 5, 6).unwrap();

    assert_eq!(automatic.max_flow, 16);
    assert_eq!(by_hand.max_flow, automatic.max_flow);
    assert_eq!(augmented.restrict(&automatic.flow), augmented.restrict(&by_hand.flow));
}

#[test]
fn overlapping_terminals_rejected() {
    let err = augment(&two_by_two(), &[0, 2], &[2, 4]).unwrap_err();
    assert_eq!(err.code(), "terminal-overlap");
    assert_eq!(err.info().context.get("index"), Some(&"2".to_string()));
}

#[test]
fn out_of_range_terminal_rejected() {
    let err = augment(&two_by_two(), &[0], &[5]).unwrap_err();
    assert_eq!(err.code(), "terminal-out-of-range");
}

#[test]
fn empty_matrix_still_gets_super_nodes() {
    let augmented = augment(&Vec::new(), &[], &[]).unwrap();
    assert_eq!(augmented.capacity, vec![vec![0, 0], vec![0, 0]]);
    let outcome = edmonds_karp(&augmented.capacity, 0, 1).unwrap();
    assert_eq!(outcome.max_flow, 0);
    assert!(augmented.restrict(&outcome.flow).is_empty());
}
