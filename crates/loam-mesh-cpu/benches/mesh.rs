use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use loam_mesh_cpu::build_mesh_data;
use loam_world::World;

fn bench_build_mesh_generated(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_mesh_data");
    let mut world = World::new(1337);
    // Neighbors present so border faces cull against real terrain.
    world.update(8.0, 8.0, 1);
    group.bench_function("terrain_16x256x16", |b| {
        b.iter(|| {
            let out = build_mesh_data(&world, 0, 0);
            black_box(out);
        })
    });
    group.finish();
}

fn bench_generate_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_chunk");
    let world = World::new(1337);
    group.bench_function("worldgen_16x256x16", |b| {
        b.iter(|| {
            let chunk = world.generate_chunk_buffer(loam_world::ChunkCoord::new(3, -7));
            black_box(chunk);
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets = bench_build_mesh_generated, bench_generate_chunk
}
criterion_main!(benches);
