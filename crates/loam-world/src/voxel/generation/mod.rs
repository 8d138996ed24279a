mod column_sampler;
mod decoration;
mod ores;
mod surface;
mod water;

use std::time::Instant;

use loam_blocks::BlockId;
use loam_chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME, Chunk, ChunkCoord};

use super::World;

pub use self::column_sampler::{ColumnBiome, ColumnSample, ColumnSampler};
pub use self::decoration::DecorationCounts;
use self::decoration::decorate_chunk;
use self::ores::apply_ores;
use self::surface::select_terrain_block;
use self::water::apply_water_fill;

impl World {
    /// Runs the full terrain pipeline for one chunk without touching the
    /// registry. Pure in `(seed, config, structures, coord)`.
    pub fn generate_chunk_buffer(&self, coord: ChunkCoord) -> Chunk {
        self.generate_chunk_buffer_with_counts(coord).0
    }

    pub fn generate_chunk_buffer_with_counts(
        &self,
        coord: ChunkCoord,
    ) -> (Chunk, DecorationCounts) {
        let params = self.params();
        let seed = self.seed();
        let sampler = ColumnSampler::new(self.noise(), params);
        let (base_x, base_z) = coord.base();

        let mut blocks = vec![BlockId::Air; CHUNK_VOLUME];
        let mut heights = vec![0i32; CHUNK_SIZE_X * CHUNK_SIZE_Z];

        for z in 0..CHUNK_SIZE_Z {
            for x in 0..CHUNK_SIZE_X {
                let wx = base_x + x as i32;
                let wz = base_z + z as i32;
                let col = sampler.sample(wx, wz);
                heights[z * CHUNK_SIZE_X + x] = col.height;
                for y in 0..CHUNK_SIZE_Y {
                    let yi = y as i32;
                    let mut base = select_terrain_block(&col, yi, params);
                    apply_water_fill(yi, params.sea_level, &mut base);
                    apply_ores(seed, &params.ores, wx, yi, wz, col.height, &mut base);
                    blocks[Chunk::idx(x, y, z)] = base;
                }
            }
        }

        let mut chunk = Chunk::from_blocks(coord, blocks);
        let counts = decorate_chunk(&mut chunk, &heights, seed, params, self.structures());
        (chunk, counts)
    }

    /// Generates the chunk at `(cx, cz)` and stores it, replacing any chunk
    /// already at that key. Returns true if one was replaced. Coordinates
    /// outside [`ChunkCoord::in_range`] are refused.
    pub fn generate_chunk(&mut self, cx: i32, cz: i32) -> bool {
        let coord = ChunkCoord::new(cx, cz);
        if !coord.in_range() {
            log::warn!(
                "refusing to generate chunk ({}, {}) outside i32 world space",
                cx,
                cz
            );
            return false;
        }
        let t0 = Instant::now();
        let (chunk, counts) = self.generate_chunk_buffer_with_counts(coord);
        let ms = t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
        log::debug!(
            target: "perf",
            "ms={} worldgen_chunk cx={} cz={} trees={} cacti={} clipped={}",
            ms,
            cx,
            cz,
            counts.trees,
            counts.cacti,
            counts.clipped
        );
        self.insert_chunk(chunk).is_some()
    }

    /// Regenerates a `width x depth` block of chunks anchored at `(0, 0)`,
    /// discarding everything generated before.
    pub fn generate_world(&mut self, width: i32, depth: i32) {
        self.clear_chunks();
        for cz in 0..depth.max(0) {
            for cx in 0..width.max(0) {
                self.generate_chunk(cx, cz);
            }
        }
        log::info!(
            "generated {}x{} chunk world (seed={})",
            width.max(0),
            depth.max(0),
            self.seed()
        );
    }
}
