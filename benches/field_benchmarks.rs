use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec2;

use iso_tiles::{document, AnimationField, TileGrid, TileKey, WaveEffect};

fn create_test_grid(size: i32) -> TileGrid {
    let mut grid = TileGrid::new();

    for i in 0..size {
        for j in 0..size {
            grid.set_tile(TileKey::new(i, j), ((i * 3 + j) % 4) as u32, (i + j) % 5 == 0);
        }
    }

    grid
}

fn create_test_effects(count: usize) -> Vec<WaveEffect> {
    (0..count)
        .map(|n| {
            let center = DVec2::new((n * 7 % 31) as f64, (n * 13 % 29) as f64);

            match n % 3 {
                0 => WaveEffect::radial(center),
                1 => WaveEffect::cross(center),
                _ => WaveEffect::sector(center, DVec2::from_angle(n as f64), 0.8),
            }
        })
        .collect()
}

fn bench_field_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_advance");

    for count in [1, 10, 100].iter() {
        group.bench_with_input(format!("effects_{}", count), count, |b, &count| {
            b.iter_batched(
                || {
                    let mut field = AnimationField::new();
                    field.extend(create_test_effects(count));
                    field
                },
                |mut field| {
                    field.advance(1.0 / 60.0);
                    black_box(field)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_effective_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("effective_offsets");

    for (size, count) in [(32, 1), (32, 8), (64, 8)].iter() {
        let mut grid = create_test_grid(*size);

        for effect in create_test_effects(*count) {
            grid.spawn_effect(effect);
        }

        grid.advance(0.5);

        group.bench_function(format!("grid_{}_effects_{}", size, count), |b| {
            b.iter(|| {
                let total: f64 = grid.iter().map(|(key, _)| grid.effective_offset(key)).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    let grid = create_test_grid(64);
    let json = document::to_json(&grid).unwrap();

    group.bench_function("to_json", |b| b.iter(|| black_box(document::to_json(&grid))));
    group.bench_function("from_json", |b| b.iter(|| black_box(document::from_json(&json))));

    group.finish();
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(5))
        .warm_up_time(std::time::Duration::from_secs(2))
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets =
        bench_field_advance,
        bench_effective_offsets,
        bench_document
);

criterion_main!(benches);
