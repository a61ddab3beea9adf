//! Benchmarks for chunk generation and terrain streaming
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use voxrun_core::world::{ChunkManager, TerrainGenerator, VoxelGrid};

fn bench_generate_chunk(c: &mut Criterion) {
    c.bench_function("generate_chunk", |b| {
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        let mut index = 0;
        b.iter(|| {
            let mut grid = VoxelGrid::new();
            index += 1;
            black_box(TerrainGenerator::generate_chunk(&mut grid, &mut rng, index))
        });
    });
}

fn bench_streaming_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_run");

    for &chunks in &[16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(chunks), &chunks, |b, &chunks| {
            b.iter(|| {
                let mut rng = Xoshiro256StarStar::seed_from_u64(42);
                let mut grid = VoxelGrid::new();
                let mut manager = ChunkManager::new(3, Some(4));
                for chunk in 0..chunks {
                    manager.ensure_window(&mut grid, &mut rng, chunk);
                }
                black_box(grid.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_chunk, bench_streaming_run);
criterion_main!(benches);
