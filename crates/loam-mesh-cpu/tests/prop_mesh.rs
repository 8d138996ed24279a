use loam_blocks::{BLOCK_COUNT, BlockId};
use loam_chunk::{Chunk, ChunkCoord};
use loam_mesh_cpu::{Face, build_mesh_data, face_visible};
use loam_world::World;
use proptest::prelude::*;

fn block() -> impl Strategy<Value = BlockId> {
    (1u8..BLOCK_COUNT as u8).prop_map(BlockId::from_u8)
}

fn voxel() -> impl Strategy<Value = (i32, i32, i32)> {
    (0i32..16, 1i32..255, 0i32..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // buffers stay well-formed for arbitrary sparse voxel sets
    #[test]
    fn buffers_are_well_formed(cells in prop::collection::vec((voxel(), block()), 1..40)) {
        let mut w = World::new(0);
        w.insert_chunk(Chunk::new(ChunkCoord::new(0, 0)));
        for ((x, y, z), b) in &cells {
            w.set_block(*x, *y, *z, *b);
        }
        let m = build_mesh_data(&w, 0, 0);
        for buf in [&m.opaque, &m.transparent] {
            prop_assert_eq!(buf.vertices.len() % 4, 0);
            prop_assert_eq!(buf.indices.len(), buf.quad_count() * 6);
            prop_assert!(buf.indices.iter().all(|&i| (i as usize) < buf.vertices.len()));
        }
        prop_assert!(m.transparent.vertices.iter().all(|v| v.block == BlockId::Water.as_u8() as f32));
        prop_assert!(m.opaque.vertices.iter().all(|v| v.block != BlockId::Water.as_u8() as f32));
    }

    // a single voxel of any kind surrounded by air is a full cube
    #[test]
    fn isolated_voxel_has_six_faces((x, y, z) in voxel(), b in block()) {
        let mut w = World::new(0);
        w.insert_chunk(Chunk::new(ChunkCoord::new(0, 0)));
        w.set_block(x, y, z, b);
        let m = build_mesh_data(&w, 0, 0);
        prop_assert_eq!(m.opaque.quad_count() + m.transparent.quad_count(), 6);
    }

    // two opaque blocks never both draw their shared face
    #[test]
    fn opaque_pairs_share_no_face(a in block(), b in block()) {
        if a.is_opaque() && b.is_opaque() {
            prop_assert!(!face_visible(a, b));
            prop_assert!(!face_visible(b, a));
        }
    }
}

#[test]
fn face_tags_cover_all_directions() {
    let mut w = World::new(0);
    w.insert_chunk(Chunk::new(ChunkCoord::new(0, 0)));
    w.set_block(8, 50, 8, BlockId::Cobblestone);
    let m = build_mesh_data(&w, 0, 0);
    let mut seen: Vec<f32> = m.opaque.vertices.iter().map(|v| v.face).collect();
    seen.dedup();
    let expected: Vec<f32> = Face::ALL.iter().map(|f| f.index() as f32).collect();
    assert_eq!(seen, expected);
}
