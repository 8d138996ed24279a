use std::sync::Arc;

use loam_blocks::BlockId;
use loam_chunk::{Chunk, ChunkCoord, world_to_chunk};

use super::World;

/// Block lookup by world coordinate, total over all of `i32` space.
pub trait BlockSource {
    fn get_block(&self, wx: i32, wy: i32, wz: i32) -> BlockId;
}

impl BlockSource for World {
    #[inline]
    fn get_block(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        World::get_block(self, wx, wy, wz)
    }
}

/// Frozen voxels of one chunk plus its four axis neighbours: everything a
/// face test for the centre chunk can touch. Answers as the world did when
/// the snapshot was taken; anything outside the five chunks reads as air.
#[derive(Clone, Debug)]
pub struct ChunkNeighborhood {
    coord: ChunkCoord,
    center: Arc<Vec<BlockId>>,
    /// Same order as [`ChunkCoord::neighbors4`].
    neighbors: [Option<Arc<Vec<BlockId>>>; 4],
}

impl ChunkNeighborhood {
    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn center_blocks(&self) -> &[BlockId] {
        &self.center
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    fn storage(&self, coord: ChunkCoord) -> Option<&[BlockId]> {
        if coord == self.coord {
            return Some(self.center.as_slice());
        }
        let i = self.coord.neighbors4().iter().position(|n| *n == coord)?;
        self.neighbors[i].as_deref().map(Vec::as_slice)
    }
}

impl BlockSource for ChunkNeighborhood {
    fn get_block(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        let (coord, lx, lz) = world_to_chunk(wx, wz);
        match self.storage(coord) {
            Some(blocks) => Chunk::block_in(blocks, lx, wy, lz),
            None => BlockId::Air,
        }
    }
}

impl World {
    /// Captures `coord` and its axis neighbours without copying voxels.
    /// `None` if the chunk does not exist.
    pub fn snapshot(&self, coord: ChunkCoord) -> Option<ChunkNeighborhood> {
        let center = self.chunk(coord)?.shared_blocks();
        let neighbors = coord
            .neighbors4()
            .map(|n| self.chunk(n).map(Chunk::shared_blocks));
        Some(ChunkNeighborhood {
            coord,
            center,
            neighbors,
        })
    }
}
