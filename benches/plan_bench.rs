//! Benchmark suite for plan construction
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use danci_study_plan::planner::{build, forgetting_curve, PlanRequest};

fn bench_build_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plan");

    for days in [10u32, 90, 365, 3650] {
        let request = PlanRequest::new(u64::from(days) * 20, days, true).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(days), &request, |b, request| {
            b.iter(|| build(black_box(request)))
        });
    }
    group.finish();
}

fn bench_forgetting_curve(c: &mut Criterion) {
    c.bench_function("forgetting_curve", |b| b.iter(forgetting_curve));
}

criterion_group!(benches, bench_build_plan, bench_forgetting_curve);
criterion_main!(benches);
