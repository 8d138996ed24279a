//! Chunk voxel storage, chunk coordinates, and per-chunk mesh bookkeeping.
#![forbid(unsafe_code)]

mod chunk;
mod chunk_coord;
mod mesh_state;

pub use chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Y, CHUNK_SIZE_Z, CHUNK_VOLUME, Chunk};
pub use chunk_coord::{ChunkCoord, world_to_chunk};
pub use mesh_state::{ChunkMeshes, MeshSlot, MeshState};
