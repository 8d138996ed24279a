/// Per-column pseudo-random value in `[0, 1]` for decoration rolls.
#[inline]
pub fn column_rand01(seed: u32, x: i32, z: i32) -> f32 {
    let mut n = (x as u32)
        .wrapping_mul(374_761_393)
        .wrapping_add((z as u32).wrapping_mul(668_265_263))
        .wrapping_add(seed);
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    (n & 0x7fff_ffff) as f32 / 0x7fff_ffff as f32
}

/// Per-voxel pseudo-random value in `[0, 1)`; `salt` separates independent rolls.
#[inline]
pub fn hash3_rand01(seed: u32, x: i32, y: i32, z: i32, salt: u32) -> f32 {
    let mut h = (x as u32).wrapping_mul(0x85eb_ca6b)
        ^ (y as u32).wrapping_mul(0x27d4_eb2d)
        ^ (z as u32).wrapping_mul(0xc2b2_ae35)
        ^ (seed ^ salt).wrapping_add(0x9E37_79B9);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    ((h & 0x00FF_FFFF) as f32) / 16_777_216.0
}
