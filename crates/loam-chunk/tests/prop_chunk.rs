use loam_blocks::{BLOCK_COUNT, BlockId};
use loam_chunk::{
    CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME, Chunk, ChunkCoord, world_to_chunk,
};
use proptest::prelude::*;

fn local() -> impl Strategy<Value = (i32, i32, i32)> {
    (
        0..CHUNK_SIZE_X as i32,
        0..CHUNK_SIZE_Y as i32,
        0..CHUNK_SIZE_Z as i32,
    )
}

fn block() -> impl Strategy<Value = BlockId> {
    (0u8..BLOCK_COUNT as u8).prop_map(BlockId::from_u8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    // world -> (chunk, local) -> world reproduces the original column
    #[test]
    fn world_chunk_roundtrip(wx in -10_000_000i32..=10_000_000, wz in -10_000_000i32..=10_000_000) {
        let (c, lx, lz) = world_to_chunk(wx, wz);
        prop_assert!((0..CHUNK_SIZE_X as i32).contains(&lx));
        prop_assert!((0..CHUNK_SIZE_Z as i32).contains(&lz));
        prop_assert_eq!(c.cx * CHUNK_SIZE_X as i32 + lx, wx);
        prop_assert_eq!(c.cz * CHUNK_SIZE_Z as i32 + lz, wz);
        prop_assert_eq!(c, ChunkCoord::containing(wx, wz));
    }
}

proptest! {
    // idx is a bijection onto 0..CHUNK_VOLUME
    #[test]
    fn idx_in_range((x, y, z) in local()) {
        let i = Chunk::idx(x as usize, y as usize, z as usize);
        prop_assert!(i < CHUNK_VOLUME);
    }

    // get after set returns what was written, neighbours untouched
    #[test]
    fn set_then_get((x, y, z) in local(), b in block()) {
        let mut c = Chunk::new(ChunkCoord::new(0, 0));
        c.set_block(x, y, z, b);
        prop_assert_eq!(c.get_block(x, y, z), b);
        let count = c.blocks().iter().filter(|v| !v.is_air()).count();
        prop_assert_eq!(count, usize::from(!b.is_air()));
    }

    // anything outside the grid reads as air
    #[test]
    fn outside_reads_air(x in -64i32..80, y in -64i32..320, z in -64i32..80) {
        prop_assume!(!Chunk::in_bounds(x, y, z));
        let c = Chunk::from_blocks(ChunkCoord::new(1, 1), vec![BlockId::Stone; CHUNK_VOLUME]);
        prop_assert_eq!(c.get_block(x, y, z), BlockId::Air);
    }

    // from_blocks always yields exactly CHUNK_VOLUME voxels
    #[test]
    fn from_blocks_resizes(len in 0usize..CHUNK_VOLUME * 2) {
        let c = Chunk::from_blocks(ChunkCoord::new(0, 0), vec![BlockId::Dirt; len]);
        prop_assert_eq!(c.blocks().len(), CHUNK_VOLUME);
    }
}
