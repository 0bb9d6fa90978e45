/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dsi_progress_logger::prelude::*;
use kosaraju_scc::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_arcs(num_nodes: usize, num_arcs: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..num_arcs)
        .map(|_| {
            (
                rng.random_range(1..=num_nodes),
                rng.random_range(1..=num_nodes),
            )
        })
        .collect()
}

fn bench_kosaraju(c: &mut Criterion, name: &str, num_nodes: usize, arcs: &[(usize, usize)]) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || GraphBuilder::from_arcs(num_nodes, arcs.iter().copied()).unwrap(),
            |(graph, transpose)| sccs::kosaraju(graph, transpose, no_logging![]),
            BatchSize::LargeInput,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let num_nodes = 100_000;
    bench_kosaraju(
        c,
        "kosaraju random",
        num_nodes,
        &random_arcs(num_nodes, 5 * num_nodes),
    );

    // A single long cycle makes the visit path as deep as the graph
    let cycle: Vec<_> = (1..=num_nodes).map(|i| (i, i % num_nodes + 1)).collect();
    bench_kosaraju(c, "kosaraju cycle", num_nodes, &cycle);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
