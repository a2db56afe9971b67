//! Benchmarks for the monotone decomposition sweep.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use monotome::{decompose, monotone_diagonals, Point, Polygon, VertexId};

/// Builds a comb polygon with `teeth` rectangular notches cut into its
/// top edge. Every notch contributes one merge vertex, so the sweep has
/// to resolve `teeth` diagonals; vertex count is `4 * teeth + 4`.
fn comb(teeth: u32) -> Polygon<i64> {
    let k = teeth as i64;
    let mut coords: Vec<(i64, i64)> = vec![(0, 0), (2 * k + 1, 0), (2 * k + 1, 2)];
    for i in (1..=k).rev() {
        coords.push((2 * i, 2));
        coords.push((2 * i, 1));
        coords.push((2 * i - 1, 1));
        coords.push((2 * i - 1, 2));
    }
    coords.push((0, 2));

    let vertices = coords
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| Point::new(x, y, VertexId(i as u32)))
        .collect();
    Polygon::new(vertices).expect("comb polygon is valid")
}

/// Irregular star-like polygon with alternating radii, for a non-
/// rectilinear workload. Radii jitter with a deterministic xorshift so
/// runs are reproducible.
fn star(points: u32) -> Polygon<i64> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut vertices = Vec::with_capacity(points as usize * 2);

    for i in 0..points * 2 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let jitter = (state % 200) as f64;

        let base = if i % 2 == 0 { 1000.0 } else { 350.0 };
        let r = base + jitter;
        let theta = (i as f64) * std::f64::consts::PI / points as f64;
        vertices.push(Point::new(
            (r * theta.cos()).round() as i64,
            (r * theta.sin()).round() as i64,
            VertexId(i),
        ));
    }

    Polygon::new(vertices).expect("star polygon is valid")
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    for teeth in [4u32, 16, 64, 256] {
        let polygon = comb(teeth);
        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("comb", polygon.len()),
            &polygon,
            |b, poly| b.iter(|| decompose(black_box(poly))),
        );
    }

    for points in [16u32, 64, 256] {
        let polygon = star(points);
        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("star", polygon.len()),
            &polygon,
            |b, poly| b.iter(|| decompose(black_box(poly))),
        );
    }

    group.finish();
}

fn bench_sweep_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotone_diagonals");

    for teeth in [16u32, 256] {
        let polygon = comb(teeth);
        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("comb", polygon.len()),
            &polygon,
            |b, poly| b.iter(|| monotone_diagonals(black_box(poly))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decompose, bench_sweep_only);
criterion_main!(benches);
