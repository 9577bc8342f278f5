use criterion::{Criterion, criterion_group, criterion_main};
use geohashkit_core::{Direction, adjacent, decode, decode_to_bits, encode, neighbors};
use std::hint::black_box;

fn bench_encode(c: &mut Criterion) {
	c.bench_function("encode 12", |b| b.iter(|| encode(black_box(52.52), black_box(13.405), 12)));
}

fn bench_decode(c: &mut Criterion) {
	c.bench_function("decode 12", |b| b.iter(|| decode(black_box("u33dc0cpsvu5"))));
	c.bench_function("decode_to_bits 12", |b| b.iter(|| decode_to_bits(black_box("u33dc0cpsvu5"))));
}

fn bench_adjacent(c: &mut Criterion) {
	c.bench_function("adjacent without carry", |b| {
		b.iter(|| adjacent(black_box("u33dc0cpsvu5"), Direction::North))
	});
	c.bench_function("adjacent with full carry", |b| {
		b.iter(|| adjacent(black_box("zzzzzzzzzzzz"), Direction::North))
	});
}

fn bench_neighbors(c: &mut Criterion) {
	c.bench_function("neighbors 12", |b| b.iter(|| neighbors(black_box("u33dc0cpsvu5"))));
}

criterion_group!(benches, bench_encode, bench_decode, bench_adjacent, bench_neighbors);
criterion_main!(benches);
