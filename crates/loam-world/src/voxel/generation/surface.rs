use loam_blocks::BlockId;

use super::column_sampler::{ColumnBiome, ColumnSample};
use crate::worldgen::WorldGenConfig;

/// Terrain block at altitude `y` of a column, before water, ores and
/// decoration. Everything at or above the column height is air.
pub(super) fn select_terrain_block(col: &ColumnSample, y: i32, p: &WorldGenConfig) -> BlockId {
    if y >= col.height {
        return BlockId::Air;
    }
    if y == col.height - 1 {
        return surface_block(col, y, p);
    }
    subsurface_block(col, y, p)
}

fn surface_block(col: &ColumnSample, y: i32, p: &WorldGenConfig) -> BlockId {
    let s = &p.surface;
    let r = &p.rivers;
    let desert_sand = col.biome == ColumnBiome::Desert && y < s.desert_sand_ceiling;
    let river_bank = col.river_depth > r.bank_min_depth && col.river_depth < r.bank_max_depth;
    if desert_sand || col.biome == ColumnBiome::Beach || river_bank {
        BlockId::Sand
    } else if col.biome == ColumnBiome::Mountain {
        if y > s.rock_cap {
            BlockId::Stone
        } else {
            BlockId::Grass
        }
    } else if y < p.sea_level {
        if col.river_depth >= r.bank_max_depth {
            BlockId::Dirt
        } else {
            BlockId::Sand
        }
    } else {
        BlockId::Grass
    }
}

fn subsurface_block(col: &ColumnSample, y: i32, p: &WorldGenConfig) -> BlockId {
    let s = &p.surface;
    let soil = if col.biome == ColumnBiome::Desert && y < s.desert_sand_ceiling {
        BlockId::Sand
    } else {
        BlockId::Dirt
    };
    let depth = if y < p.sea_level + s.shore_band {
        s.shore_soil_depth
    } else if col.biome == ColumnBiome::Mountain && y > s.alpine_soil_floor {
        // Alpine soil is always dirt, even where the desert rule would apply.
        return if y >= col.height - s.alpine_soil_depth {
            BlockId::Dirt
        } else {
            BlockId::Stone
        };
    } else {
        s.soil_depth
    };
    if y >= col.height - depth {
        soil
    } else {
        BlockId::Stone
    }
}
