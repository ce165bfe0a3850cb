//! Criterion benchmarks for upper-hull construction.
//! Focus sizes: n in {8, 64, 512, 4096} points per cloud.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hulltree::geom::rand::{draw_point_cloud, CloudCfg, ReplayToken};
use hulltree::upper_hull;

fn cloud(n: usize, seed: u64) -> Vec<hulltree::Point> {
    let cfg = CloudCfg {
        count: n,
        base_radius: 100.0,
        ..CloudCfg::default()
    };
    draw_point_cloud(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("upper_hull");
    for &n in &[8usize, 64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    // Hard configurations come back as domain errors; the
                    // construction cost is what is being measured either way.
                    let _ = upper_hull(&pts, None);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
