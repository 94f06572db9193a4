//! Benchmark: measure tick() cost under various world conditions.
//!
//! Each populated benchmark uses `iter_batched` to rebuild the world before
//! every iteration so we measure an active world, not a settled or dead one.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use mito::{CellKind, Position, Tile, Universe, Variant, World};

const SIZE: usize = 128;

/// All-Air world: baseline cost of scanning tiles with nothing to do.
fn bench_tick_empty(c: &mut Criterion) {
    c.bench_function("tick_empty_128x128", |b| {
        let mut world = World::new(SIZE, SIZE);
        b.iter(|| {
            world.tick();
            black_box(&world);
        });
    });
}

/// Soil bottom half with uneven water: darkness and diffusion on every tile.
fn soil_world() -> World {
    let mut world = World::new(SIZE, SIZE);
    for y in SIZE / 2..SIZE {
        for x in 0..SIZE {
            let pos = Position::new(x as i32, y as i32);
            let water = ((x * 7 + y * 13) % 21) as f64;
            world.set_tile_at(pos, Tile::soil(pos, water));
        }
    }
    world
}

fn bench_tick_soil(c: &mut Criterion) {
    c.bench_function("tick_soil_128x128", |b| {
        b.iter_batched(
            soil_world,
            |mut world| {
                world.tick();
                black_box(&world);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Soil plus a dense band of plants above it: every cell rule is active.
fn bench_tick_plants(c: &mut Criterion) {
    c.bench_function("tick_plants_128x128", |b| {
        b.iter_batched(
            || {
                let mut world = soil_world();
                for y in SIZE / 4..SIZE / 2 {
                    for x in 0..SIZE {
                        let pos = Position::new(x as i32, y as i32);
                        let kind = match (x + y) % 4 {
                            0 => CellKind::tissue(),
                            1 => CellKind::leaf(),
                            2 => CellKind::Root,
                            _ => CellKind::Plain,
                        };
                        world.set_tile_at(pos, Tile::cell(pos, kind));
                    }
                }
                world
            },
            |mut world| {
                world.tick();
                black_box(&world);
            },
            BatchSize::SmallInput,
        );
    });
}

/// Universe::tick() plus reading the presentation buffers, as a browser would.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_mixed_128x128", |b| {
        b.iter_batched(
            || {
                let Ok(mut universe) = Universe::new(SIZE, SIZE, 7) else {
                    unreachable!("valid dimensions");
                };
                for y in 0..SIZE as i32 {
                    for x in 0..SIZE as i32 {
                        let variant = match (x * 7 + y * 13) % 6 {
                            0 => Variant::Soil,
                            1 => Variant::Tissue,
                            2 => Variant::Leaf,
                            3 => Variant::Rock,
                            _ => Variant::Air,
                        };
                        universe.place(x, y, variant as u8);
                    }
                }
                universe
            },
            |mut universe| {
                universe.tick();
                black_box(universe.variants());
                black_box(universe.darkness());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_tick_empty,
    bench_tick_soil,
    bench_tick_plants,
    bench_universe_tick,
);
criterion_main!(benches);
