use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lognet_graph::{analyze, augment, edmonds_karp, reference_network, AnalysisConfig};

fn reference_bench(c: &mut Criterion) {
    let network = reference_network().unwrap();
    let augmented = augment(
        network.capacity(),
        &network.terminals(),
        &network.destinations(),
    )
    .unwrap();

    c.bench_function("edmonds_karp_reference", |b| {
        b.iter(|| {
            black_box(
                edmonds_karp(
                    &augmented.capacity,
                    augmented.super_source(),
                    augmented.super_sink(),
                )
                .unwrap(),
            );
        });
    });

    let config = AnalysisConfig::default();
    c.bench_function("analyze_reference", |b| {
        b.iter(|| black_box(analyze(&network, &config).unwrap()));
    });
}

criterion_group!(benches, reference_bench);
criterion_main!(benches);
