use std::time::Instant;

use loam_blocks::BlockId;
use loam_chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, Chunk, ChunkCoord};
use loam_world::{BlockSource, ChunkNeighborhood, World};

use crate::face::Face;
use crate::mesh_build::MeshData;
use crate::visibility::face_visible;

/// Extracts the visible faces of chunk `(cx, cz)` from the live world.
/// A missing chunk yields empty geometry.
pub fn build_mesh_data(world: &World, cx: i32, cz: i32) -> MeshData {
    let coord = ChunkCoord::new(cx, cz);
    match world.snapshot(coord) {
        Some(snap) => build_mesh_from(&snap),
        None => MeshData::new(coord),
    }
}

/// Extracts the visible faces of a snapshot's centre chunk.
///
/// Neighbours are resolved by world coordinate through the snapshot, so
/// border faces are culled against the real adjacent chunk (or treated as
/// open when it did not exist). Needs no access to the live world, which
/// lets builds run while the owner keeps editing.
pub fn build_mesh_from(snap: &ChunkNeighborhood) -> MeshData {
    let coord = snap.coord();
    let mut out = MeshData::new(coord);
    if !coord.in_range() {
        log::warn!(
            "skipping mesh for chunk ({}, {}) outside i32 world space",
            coord.cx,
            coord.cz
        );
        return out;
    }
    let t0 = Instant::now();
    let blocks = snap.center_blocks();
    let (base_x, base_z) = coord.base();
    for y in 0..CHUNK_SIZE_Y as i32 {
        for z in 0..CHUNK_SIZE_Z as i32 {
            for x in 0..CHUNK_SIZE_X as i32 {
                let block = Chunk::block_in(blocks, x, y, z);
                if block == BlockId::Air {
                    continue;
                }
                let (wx, wz) = (base_x + x, base_z + z);
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    // Past the edge of i32 space there is only air.
                    let neighbor = match (wx.checked_add(dx), wz.checked_add(dz)) {
                        (Some(nx), Some(nz)) => snap.get_block(nx, y + dy, nz),
                        _ => BlockId::Air,
                    };
                    if face_visible(block, neighbor) {
                        out.buffer_for(block).add_face(face, x, y, z, block);
                    }
                }
            }
        }
    }
    let ms = t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
    log::debug!(
        target: "perf",
        "ms={} mesh_build cx={} cz={} opaque_quads={} transparent_quads={}",
        ms,
        coord.cx,
        coord.cz,
        out.opaque.quad_count(),
        out.transparent.quad_count()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_world(coords: &[(i32, i32)]) -> World {
        let mut w = World::new(0);
        for &(cx, cz) in coords {
            w.insert_chunk(Chunk::new(ChunkCoord::new(cx, cz)));
        }
        w
    }

    #[test]
    fn lone_stone_is_a_closed_cube() {
        let mut w = empty_world(&[(0, 0)]);
        w.set_block(5, 100, 5, BlockId::Stone);
        let m = build_mesh_data(&w, 0, 0);
        assert_eq!(m.opaque.vertices.len(), 24);
        assert_eq!(m.opaque.indices.len(), 36);
        assert!(m.transparent.is_empty());
        assert_eq!(m.opaque.indices.iter().copied().max(), Some(23));
    }

    #[test]
    fn adjacent_water_has_no_shared_face() {
        let mut w = empty_world(&[(0, 0)]);
        w.set_block(5, 100, 5, BlockId::Water);
        w.set_block(6, 100, 5, BlockId::Water);
        let m = build_mesh_data(&w, 0, 0);
        assert!(m.opaque.is_empty());
        assert_eq!(m.transparent.quad_count(), 10);
        assert_eq!(m.transparent.indices.len(), 60);
    }

    #[test]
    fn stone_shows_face_toward_water_but_not_reverse() {
        let mut w = empty_world(&[(0, 0)]);
        w.set_block(5, 100, 5, BlockId::Water);
        w.set_block(6, 100, 5, BlockId::Stone);
        let m = build_mesh_data(&w, 0, 0);
        assert_eq!(m.opaque.quad_count(), 6);
        assert_eq!(m.transparent.quad_count(), 5);
        let water_px = m
            .transparent
            .vertices
            .iter()
            .filter(|v| v.face == Face::PosX.index() as f32)
            .count();
        assert_eq!(water_px, 0);
    }

    #[test]
    fn border_faces_cull_against_neighbor_chunk() {
        let mut w = empty_world(&[(0, 0)]);
        w.set_block(15, 100, 3, BlockId::Stone);
        assert_eq!(build_mesh_data(&w, 0, 0).opaque.quad_count(), 6);

        w.insert_chunk(Chunk::new(ChunkCoord::new(1, 0)));
        w.set_block(16, 100, 3, BlockId::Stone);
        assert_eq!(build_mesh_data(&w, 0, 0).opaque.quad_count(), 5);
        assert_eq!(build_mesh_data(&w, 1, 0).opaque.quad_count(), 5);
    }

    #[test]
    fn negative_chunk_border() {
        let mut w = empty_world(&[(-1, -1), (-1, 0)]);
        w.set_block(-1, 10, -1, BlockId::Dirt);
        w.set_block(-1, 10, 0, BlockId::Dirt);
        let m = build_mesh_data(&w, -1, -1);
        assert_eq!(m.opaque.quad_count(), 5);
        assert!(m.opaque.vertices.iter().all(|v| v.pos[0] >= 15.0));
    }

    #[test]
    fn floor_and_ceiling_faces_are_emitted() {
        let mut w = empty_world(&[(0, 0)]);
        w.set_block(0, 0, 0, BlockId::Stone);
        w.set_block(0, CHUNK_SIZE_Y as i32 - 1, 0, BlockId::Stone);
        assert_eq!(build_mesh_data(&w, 0, 0).opaque.quad_count(), 12);
    }

    #[test]
    fn chunk_at_edge_of_world_space_meshes() {
        let (cx, cz) = (ChunkCoord::MAX_AXIS, ChunkCoord::MIN_AXIS);
        let mut w = empty_world(&[(cx, cz)]);
        w.set_block(i32::MAX, 40, i32::MIN, BlockId::Stone);
        let m = build_mesh_data(&w, cx, cz);
        assert_eq!(m.opaque.quad_count(), 6);

        w.generate_chunk(cx, cz);
        assert!(!build_mesh_data(&w, cx, cz).opaque.is_empty());
    }

    #[test]
    fn snapshot_build_ignores_later_edits() {
        let mut w = empty_world(&[(0, 0)]);
        w.set_block(4, 4, 4, BlockId::Stone);
        let snap = w.snapshot(ChunkCoord::new(0, 0)).unwrap();
        w.set_block(5, 4, 4, BlockId::Stone);
        assert_eq!(build_mesh_from(&snap).opaque.quad_count(), 6);
        assert_eq!(build_mesh_data(&w, 0, 0).opaque.quad_count(), 10);
    }

    #[test]
    fn missing_chunk_is_empty() {
        let w = World::new(1);
        let m = build_mesh_data(&w, 4, 4);
        assert!(m.is_empty());
        assert_eq!(m.coord(), ChunkCoord::new(4, 4));
    }

    #[test]
    fn generated_terrain_meshes_both_passes() {
        let mut w = World::new(42);
        w.generate_world(2, 2);
        let m = build_mesh_data(&w, 0, 0);
        assert!(!m.opaque.is_empty());
        assert_eq!(m.opaque.indices.len(), m.opaque.quad_count() * 6);
        assert_eq!(m.transparent.indices.len(), m.transparent.quad_count() * 6);
    }
}
