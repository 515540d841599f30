use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pushbox_solver::config::Method;
use pushbox_solver::solver::Unbounded;
use pushbox_solver::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_corridor(c: &mut Criterion) {
    bench_level(c, Method::BreadthFirst, "levels/03-corridor.txt", 100);
    bench_level(c, Method::BestFirst, "levels/03-corridor.txt", 100);
}

#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    bench_level(c, Method::BreadthFirst, "levels/04-two-boxes.txt", 50);
    bench_level(c, Method::DepthFirst, "levels/04-two-boxes.txt", 50);
    bench_level(c, Method::BestFirst, "levels/04-two-boxes.txt", 50);
    bench_level(c, Method::Weighted, "levels/04-two-boxes.txt", 50);
}

#[allow(unused)]
fn bench_naive(c: &mut Criterion) {
    bench_level(c, Method::Naive, "levels/02-one-way.txt", 100);
}

fn bench_level(c: &mut Criterion, method: Method, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();

    let mut group = c.benchmark_group(method.to_string());
    group.sample_size(samples);
    group.bench_function(level_path, |b| {
        b.iter(|| level.solve(black_box(method), &mut Unbounded))
    });
    group.finish();
}

criterion_group!(benches, bench_corridor, bench_two_boxes, bench_naive);
criterion_main!(benches);
