use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pluck_doku::{gen::generate, pluck::pluck, random::new_random};

fn criterion_benchmark(c: &mut Criterion) {
  let solution = generate(&mut new_random("bench"));
  c.bench_function("generate", |b| {
    b.iter(|| generate(black_box(&mut new_random("bench"))))
  });
  c.bench_function("pluck 20", |b| {
    b.iter(|| pluck(&solution, black_box(20), &mut new_random("bench pluck")))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
