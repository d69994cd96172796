//! Benchmark full table generation with each component strategy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tet_case_table::{
  build_edges, build_geometry, evaluate, CaseTable, ComponentStrategy, GeneratorConfig,
};

const STRATEGIES: [(&str, ComponentStrategy); 2] = [
  ("union_find", ComponentStrategy::UnionFind),
  ("boolean_closure", ComponentStrategy::BooleanClosure),
];

/// Benchmark generating all 256 entries.
fn bench_generate(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate");

  for (name, strategy) in STRATEGIES {
    let config = GeneratorConfig::default().with_strategy(strategy);
    group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
      b.iter(|| black_box(CaseTable::generate(config).unwrap()));
    });
  }

  group.finish();
}

/// Benchmark evaluating a single mixed case against a prebuilt graph.
fn bench_evaluate(c: &mut Criterion) {
  let graph = build_edges(&build_geometry().tetrahedra).unwrap();
  let mut group = c.benchmark_group("evaluate_case_0x5a");

  for (name, strategy) in STRATEGIES {
    let config = GeneratorConfig::default().with_strategy(strategy);
    group.bench_function(name, |b| {
      b.iter(|| black_box(evaluate(black_box(0x5a), &graph, &config).unwrap()));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_generate, bench_evaluate);
criterion_main!(benches);
