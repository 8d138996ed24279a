use loam_blocks::BlockId;
use loam_chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Z, Chunk};
use loam_noise::column_rand01;
use loam_structures::{StructureSet, StructureTemplate};

use crate::worldgen::WorldGenConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecorationCounts {
    pub trees: u32,
    pub cacti: u32,
    /// Template voxels dropped because they fell outside the chunk.
    pub clipped: u32,
}

/// Stamps trees and cacti on interior columns. `heights` holds the column
/// heights in `z * CHUNK_SIZE_X + x` order.
pub(super) fn decorate_chunk(
    chunk: &mut Chunk,
    heights: &[i32],
    seed: u32,
    params: &WorldGenConfig,
    structures: &StructureSet,
) -> DecorationCounts {
    let mut counts = DecorationCounts::default();
    let d = &params.decoration;
    if !d.enable {
        return counts;
    }
    let border = d.border.max(0);
    let (base_x, base_z) = chunk.coord().base();
    for x in border..(CHUNK_SIZE_X as i32 - border) {
        for z in border..(CHUNK_SIZE_Z as i32 - border) {
            let ground_y = heights[z as usize * CHUNK_SIZE_X + x as usize];
            let surface = chunk.get_block(x, ground_y - 1, z);
            let r = column_rand01(seed, base_x + x, base_z + z);
            if surface == BlockId::Grass && r < d.tree_chance {
                counts.clipped += stamp(chunk, &structures.tree, x, ground_y, z);
                counts.trees += 1;
            } else if surface == BlockId::Sand && r < d.cactus_chance && ground_y > params.sea_level
            {
                counts.clipped += stamp(chunk, &structures.cactus, x, ground_y, z);
                counts.cacti += 1;
            }
        }
    }
    counts
}

/// Writes a template anchored at `(x, ground_y, z)`, skipping offsets that
/// leave the chunk. Returns how many voxels were skipped.
fn stamp(chunk: &mut Chunk, template: &StructureTemplate, x: i32, ground_y: i32, z: i32) -> u32 {
    let mut clipped = 0;
    for b in &template.blocks {
        let (tx, ty, tz) = (x + b.dx, ground_y + b.dy, z + b.dz);
        if !Chunk::in_bounds(tx, ty, tz) {
            clipped += 1;
            continue;
        }
        chunk.set_block(tx, ty, tz, b.block);
    }
    clipped
}
