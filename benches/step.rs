use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bitlife::*;
use bitlife::step::step_exhaustive;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIDE: usize = 64;

fn step_benchmark(c: &mut Criterion) {
  let table = build_table(SIDE).unwrap();
  let mut rng = StdRng::seed_from_u64(42);
  let dense = BitBoard::random(SIDE, &mut rng).unwrap().into_state();
  let glider = rle::read("x = 3, y = 3\nbo$2bo$3o!", SIDE).unwrap().board.into_state();

  c.bench_function("random 64x64, sparse step", |b| b.iter(|| {
    step(black_box(&dense), &table)
  }));
  c.bench_function("random 64x64, exhaustive step", |b| b.iter(|| {
    step_exhaustive(black_box(&dense), &table)
  }));
  c.bench_function("glider 64x64, sparse step", |b| b.iter(|| {
    step(black_box(&glider), &table)
  }));
  c.bench_function("glider 64x64, exhaustive step", |b| b.iter(|| {
    step_exhaustive(black_box(&glider), &table)
  }));
  c.bench_function("glider 64x64, 256 generations", |b| b.iter(|| {
    advance(black_box(&glider), &table, 256)
  }));
  c.bench_function("empty 64x64, 256 generations", |b| b.iter(|| {
    advance(black_box(&BigUint::default()), &table, 256)
  }));
}

fn table_benchmark(c: &mut Criterion) {
  c.bench_function("build neighbor table 32x32", |b| b.iter(|| {
    build_table(black_box(32)).unwrap()
  }));
}

criterion_group!(benches, step_benchmark, table_benchmark);
criterion_main!(benches);
