use bytemuck::{Pod, Zeroable};
use loam_blocks::BlockId;
use loam_chunk::ChunkCoord;

use crate::face::Face;

/// How far water lowers the upper edge of its faces.
pub const WATER_SURFACE_DROP: f32 = 0.1;

/// One GPU-ready vertex. Positions are chunk-local; the tags let a renderer
/// pick texture layers per face and material without a second pass.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ChunkVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    pub face: f32,
    pub block: f32,
    pub layer: f32,
}

/// Vertex and index stream for one geometry group.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub vertices: Vec<ChunkVertex>,
    pub indices: Vec<u32>,
    next: u32,
}

impl MeshBuild {
    /// Appends one quad for `face` of the voxel at chunk-local `(x, y, z)`.
    pub fn add_face(&mut self, face: Face, x: i32, y: i32, z: i32, block: BlockId) {
        let drop = if block == BlockId::Water {
            WATER_SURFACE_DROP
        } else {
            0.0
        };
        let tag = face.index() as f32;
        let layer = f32::from(block.texture_layer(face.block_face()));
        for (p, uv) in face.corners() {
            // Only the upper edge sinks; bottoms stay on the grid.
            let lowered = if p[1] > 0.0 { drop } else { 0.0 };
            self.vertices.push(ChunkVertex {
                pos: [
                    x as f32 + p[0],
                    y as f32 + p[1] - lowered,
                    z as f32 + p[2],
                ],
                uv,
                face: tag,
                block: f32::from(block.as_u8()),
                layer,
            });
        }
        let o = self.next;
        self.indices
            .extend_from_slice(&[o, o + 1, o + 2, o + 2, o + 3, o]);
        self.next += 4;
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw vertex bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Extracted geometry for one chunk, split by render pass.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshData {
    pub cx: i32,
    pub cz: i32,
    pub opaque: MeshBuild,
    pub transparent: MeshBuild,
}

impl MeshData {
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            cx: coord.cx,
            cz: coord.cz,
            ..Self::default()
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        ChunkCoord::new(self.cx, self.cz)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.transparent.is_empty()
    }

    /// Buffer that a block's faces go to.
    #[inline]
    pub fn buffer_for(&mut self, block: BlockId) -> &mut MeshBuild {
        if block == BlockId::Water {
            &mut self.transparent
        } else {
            &mut self.opaque
        }
    }
}
