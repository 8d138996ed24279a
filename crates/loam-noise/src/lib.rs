//! Seeded gradient noise, fractal sums, and cheap integer hashes for worldgen.
#![forbid(unsafe_code)]

mod gradient;
mod hash;

pub use gradient::{FractalParams, GradientNoise, fade, grad, lerp};
pub use hash::{column_rand01, hash3_rand01};
