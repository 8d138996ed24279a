use std::sync::Arc;

use loam_blocks::BlockId;

use crate::chunk_coord::ChunkCoord;
use crate::mesh_state::{ChunkMeshes, MeshState};

pub const CHUNK_SIZE_X: usize = 16;
pub const CHUNK_SIZE_Z: usize = 16;
pub const CHUNK_SIZE_Y: usize = 256;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE_X * CHUNK_SIZE_Y * CHUNK_SIZE_Z;

/// Dense voxel column of `CHUNK_SIZE_X x CHUNK_SIZE_Y x CHUNK_SIZE_Z` blocks.
///
/// All accessors take signed local coordinates and are total: reads outside
/// the grid return `Air`, writes outside it are dropped.
///
/// Voxels are copy-on-write: [`Chunk::shared_blocks`] hands out a frozen
/// view, and the next write after that copies the grid once.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Arc<Vec<BlockId>>,
    state: MeshState,
    meshes: ChunkMeshes,
}

impl Chunk {
    /// An all-air chunk that still needs its first mesh.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: Arc::new(vec![BlockId::Air; CHUNK_VOLUME]),
            state: MeshState::Dirty,
            meshes: ChunkMeshes::default(),
        }
    }

    /// Builds a chunk from linear storage in [`Chunk::idx`] order.
    /// Short input is padded with air; long input is truncated.
    pub fn from_blocks(coord: ChunkCoord, blocks: Vec<BlockId>) -> Self {
        let mut b = blocks;
        if b.len() != CHUNK_VOLUME {
            b.resize(CHUNK_VOLUME, BlockId::Air);
        }
        Self {
            coord,
            blocks: Arc::new(b),
            state: MeshState::Dirty,
            meshes: ChunkMeshes::default(),
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn cx(&self) -> i32 {
        self.coord.cx
    }

    #[inline]
    pub fn cz(&self) -> i32 {
        self.coord.cz
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_SIZE_Z + z) * CHUNK_SIZE_X + x
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < CHUNK_SIZE_X
            && (y as usize) < CHUNK_SIZE_Y
            && (z as usize) < CHUNK_SIZE_Z
    }

    #[inline]
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        Self::block_in(&self.blocks, x, y, z)
    }

    /// [`Chunk::get_block`] over bare storage in [`Chunk::idx`] order.
    #[inline]
    pub fn block_in(blocks: &[BlockId], x: i32, y: i32, z: i32) -> BlockId {
        if !Self::in_bounds(x, y, z) {
            return BlockId::Air;
        }
        blocks
            .get(Self::idx(x as usize, y as usize, z as usize))
            .copied()
            .unwrap_or(BlockId::Air)
    }

    /// Writes a block and marks the chunk dirty if the voxel changed.
    /// Returns whether anything was written.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) -> bool {
        if !Self::in_bounds(x, y, z) {
            return false;
        }
        let i = Self::idx(x as usize, y as usize, z as usize);
        if self.blocks[i] == id {
            return false;
        }
        Arc::make_mut(&mut self.blocks)[i] = id;
        self.mark_dirty();
        true
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Frozen view of the current voxels; later edits do not show through.
    #[inline]
    pub fn shared_blocks(&self) -> Arc<Vec<BlockId>> {
        Arc::clone(&self.blocks)
    }

    /// Raw block bytes in storage order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.blocks.iter().map(|b| b.as_u8()).collect()
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_air())
    }

    /// Y of the first air voxel above the highest non-air block in a column,
    /// or 0 for an empty column.
    pub fn column_height(&self, x: i32, z: i32) -> i32 {
        for y in (0..CHUNK_SIZE_Y as i32).rev() {
            if !self.get_block(x, y, z).is_air() {
                return y + 1;
            }
        }
        0
    }

    #[inline]
    pub fn mesh_state(&self) -> MeshState {
        self.state
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Flags the geometry stale. Allowed at any time, including mid-build.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.state = self.state.marked_dirty();
    }

    /// Moves `Dirty -> Building`. Returns false if the chunk was not eligible.
    #[inline]
    pub fn begin_build(&mut self) -> bool {
        match self.state.submitted() {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Ends a build: `Clean`, or `Dirty` if an edit arrived meanwhile.
    #[inline]
    pub fn finish_build(&mut self) {
        self.state = self.state.completed();
    }

    #[inline]
    pub fn meshes(&self) -> &ChunkMeshes {
        &self.meshes
    }

    #[inline]
    pub fn install_meshes(&mut self, meshes: ChunkMeshes) {
        self.meshes = meshes;
    }
}
