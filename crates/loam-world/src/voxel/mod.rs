pub mod generation;
mod snapshot;
mod stats;
mod world;

pub use snapshot::{BlockSource, ChunkNeighborhood};
pub use stats::HeightStats;
pub use world::World;
