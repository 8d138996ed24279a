//! CPU mesh extraction: per-face culling against the world and quad emission.
#![forbid(unsafe_code)]

mod build;
mod face;
mod mesh_build;
mod visibility;

pub use build::{build_mesh_data, build_mesh_from};
pub use face::Face;
pub use mesh_build::{ChunkVertex, MeshBuild, MeshData, WATER_SURFACE_DROP};
pub use visibility::face_visible;
