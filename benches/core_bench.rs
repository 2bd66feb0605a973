use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplanner::{CornerId, Floorplan, PickTolerance};
use glam::Vec2;
use std::hint::black_box;

const CELL_SIZE: f32 = 300.0;

/// Raster aus `cells` x `cells` quadratischen Räumen.
fn build_grid_floorplan(cells: usize) -> (Floorplan, Vec<CornerId>) {
    let mut floorplan = Floorplan::new();
    let side = cells + 1;
    let mut ids = Vec::with_capacity(side * side);

    for row in 0..side {
        for column in 0..side {
            let position = Vec2::new(column as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
            ids.push(floorplan.new_corner(position));
        }
    }

    for row in 0..side {
        for column in 0..side {
            let id = ids[row * side + column];
            if column + 1 < side {
                floorplan.new_wall(id, ids[row * side + column + 1]);
            }
            if row + 1 < side {
                floorplan.new_wall(id, ids[(row + 1) * side + column]);
            }
        }
    }

    (floorplan, ids)
}

fn build_query_points(count: usize, extent: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 1000) as f32 / 1000.0 * extent;
            let y = ((i * 91) % 1000) as f32 / 1000.0 * extent;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_room_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_derivation");

    for &cells in &[5usize, 15usize] {
        let (floorplan, ids) = build_grid_floorplan(cells);
        let corner = ids[ids.len() / 2];

        group.bench_with_input(
            BenchmarkId::new("grid_rooms", cells),
            &floorplan,
            |b, floorplan| {
                b.iter_batched(
                    || floorplan.clone(),
                    |mut floorplan| {
                        floorplan.update_attached_rooms_of_corner(black_box(corner));
                        black_box(floorplan.room_count())
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");

    for &cells in &[5usize, 15usize] {
        let (floorplan, _) = build_grid_floorplan(cells);
        let query_points = build_query_points(1024, cells as f32 * CELL_SIZE);
        let tolerance = PickTolerance {
            corner_radius: 20.0,
            wall_padding: 6.0,
        };

        group.bench_with_input(
            BenchmarkId::new("pick_batch", cells),
            &floorplan,
            |b, floorplan| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if !floorplan.pick(black_box(*point), &tolerance).is_none() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_room_derivation, bench_pick);
criterion_main!(benches);
