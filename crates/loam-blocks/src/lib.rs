//! Block kinds and their render/culling properties.
#![forbid(unsafe_code)]

pub mod types;

pub use types::{BLOCK_COUNT, BlockFace, BlockId};
