//! Chunk registry, terrain generation, and worldgen parameters.
#![forbid(unsafe_code)]

pub mod voxel;
pub mod worldgen;

pub use loam_chunk::{ChunkCoord, world_to_chunk};
pub use voxel::generation::{ColumnBiome, ColumnSample, ColumnSampler};
pub use voxel::{BlockSource, ChunkNeighborhood, HeightStats, World};
pub use worldgen::WorldGenConfig;
