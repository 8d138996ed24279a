use loam_blocks::BlockId;

/// Floods air at or below sea level.
#[inline]
pub(super) fn apply_water_fill(y: i32, sea_level: i32, base: &mut BlockId) {
    if *base == BlockId::Air && y <= sea_level {
        *base = BlockId::Water;
    }
}
