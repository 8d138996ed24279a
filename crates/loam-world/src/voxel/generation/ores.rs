use loam_blocks::BlockId;
use loam_noise::hash3_rand01;

use crate::worldgen::Ores;

const COAL_SALT: u32 = 0x00C0_A100;
const IRON_SALT: u32 = 0x001F_E000;

/// Swaps buried stone for ore using a per-voxel hash roll.
pub(super) fn apply_ores(
    seed: u32,
    params: &Ores,
    wx: i32,
    y: i32,
    wz: i32,
    height: i32,
    base: &mut BlockId,
) {
    if !params.enable || *base != BlockId::Stone || y >= height - params.min_depth {
        return;
    }
    if y <= params.iron_max_y && hash3_rand01(seed, wx, y, wz, IRON_SALT) < params.iron_chance {
        *base = BlockId::IronOre;
    } else if y <= params.coal_max_y
        && hash3_rand01(seed, wx, y, wz, COAL_SALT) < params.coal_chance
    {
        *base = BlockId::CoalOre;
    }
}
