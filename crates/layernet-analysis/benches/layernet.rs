use std::collections::BTreeMap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use layernet_analysis::{build_supragraph, extract_backbone, score_edges};
use layernet_core::{AdjacencyMatrix, SupraConfig, TrialCount, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Tier {
    name: &'static str,
    nodes: usize,
    years: i32,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "small",
        nodes: 25,
        years: 5,
    },
    Tier {
        name: "medium",
        nodes: 100,
        years: 10,
    },
    Tier {
        name: "large",
        nodes: 300,
        years: 20,
    },
];

fn random_projection(nodes: usize, seed: u64) -> AdjacencyMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; nodes]; nodes];
    for i in 0..nodes {
        for j in i + 1..nodes {
            if rng.gen_bool(0.15) {
                let w = f64::from(rng.gen_range(1_u32..40));
                rows[i][j] = w;
                rows[j][i] = w;
            }
        }
    }
    let labels: Vec<String> = (0..nodes).map(|i| format!("org{i:04}")).collect();
    AdjacencyMatrix::from_rows(labels, &rows).expect("generated matrix is valid")
}

fn bench_backbone(c: &mut Criterion) {
    let mut group = c.benchmark_group("backbone");

    for tier in &TIERS {
        let matrix = random_projection(tier.nodes, 0xB4C_B0E5 + tier.nodes as u64);
        group.throughput(Throughput::Elements(layernet_core::to_edge_list(&matrix).len() as u64));

        group.bench_with_input(
            BenchmarkId::new("score_edges", tier.name),
            &matrix,
            |b, m| b.iter(|| black_box(score_edges(m, TrialCount::Exact).len())),
        );
        group.bench_with_input(
            BenchmarkId::new("extract", tier.name),
            &matrix,
            |b, m| b.iter(|| black_box(extract_backbone(m, 0.05).len())),
        );
    }

    group.finish();
}

fn bench_supragraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("supragraph");

    for tier in &TIERS {
        let layers: BTreeMap<i32, WeightedGraph> = (0..tier.years)
            .map(|offset| {
                let matrix = random_projection(tier.nodes, 0x5_u64 + u64::from(offset.unsigned_abs()));
                (1995 + offset, WeightedGraph::from_adjacency(&matrix))
            })
            .collect();
        let config = SupraConfig::new(true);

        group.bench_with_input(BenchmarkId::from_parameter(tier.name), &layers, |b, layers| {
            b.iter(|| {
                let supra = build_supragraph(layers, &config).expect("build");
                black_box(supra.edge_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_backbone, bench_supragraph);
criterion_main!(benches);
