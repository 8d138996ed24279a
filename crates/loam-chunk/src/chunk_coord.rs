use crate::chunk::{CHUNK_SIZE_X, CHUNK_SIZE_Z};

/// Position of a chunk in the horizontal chunk grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    /// Smallest chunk index whose columns all fit in `i32` world space.
    pub const MIN_AXIS: i32 = i32::MIN / CHUNK_SIZE_X as i32;
    /// Largest chunk index whose columns all fit in `i32` world space.
    pub const MAX_AXIS: i32 = i32::MAX / CHUNK_SIZE_X as i32;

    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Saturates at the ends of `i32`; pair with [`ChunkCoord::in_range`].
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            cx: self.cx.saturating_add(dx),
            cz: self.cz.saturating_add(dz),
        }
    }

    /// Whether every column of this chunk has an `i32` world coordinate.
    /// World generation and meshing only accept chunks in this range.
    #[inline]
    pub fn in_range(self) -> bool {
        (Self::MIN_AXIS..=Self::MAX_AXIS).contains(&self.cx)
            && (Self::MIN_AXIS..=Self::MAX_AXIS).contains(&self.cz)
    }

    /// Chunk containing the world column `(wx, wz)`.
    #[inline]
    pub fn containing(wx: i32, wz: i32) -> Self {
        Self {
            cx: wx.div_euclid(CHUNK_SIZE_X as i32),
            cz: wz.div_euclid(CHUNK_SIZE_Z as i32),
        }
    }

    /// Chunk containing a floating-point world position.
    #[inline]
    pub fn containing_f32(x: f32, z: f32) -> Self {
        Self {
            cx: (x / CHUNK_SIZE_X as f32).floor() as i32,
            cz: (z / CHUNK_SIZE_Z as f32).floor() as i32,
        }
    }

    /// World-space x/z of this chunk's local origin.
    #[inline]
    pub fn base(self) -> (i32, i32) {
        (
            self.cx.saturating_mul(CHUNK_SIZE_X as i32),
            self.cz.saturating_mul(CHUNK_SIZE_Z as i32),
        )
    }

    /// The four axis-adjacent chunk coordinates: +X, -X, +Z, -Z.
    #[inline]
    pub fn neighbors4(self) -> [ChunkCoord; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    /// Square-ring (Chebyshev) distance in chunks.
    #[inline]
    pub fn chebyshev(self, other: ChunkCoord) -> i32 {
        let d = self.cx.abs_diff(other.cx).max(self.cz.abs_diff(other.cz));
        i32::try_from(d).unwrap_or(i32::MAX)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cz)
    }
}

/// Splits a world column into its chunk and the local `(x, z)` inside it.
/// Floor semantics, so `-1` maps to the last column of chunk `-1`.
#[inline]
pub fn world_to_chunk(wx: i32, wz: i32) -> (ChunkCoord, i32, i32) {
    let coord = ChunkCoord::containing(wx, wz);
    (
        coord,
        wx.rem_euclid(CHUNK_SIZE_X as i32),
        wz.rem_euclid(CHUNK_SIZE_Z as i32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_columns_floor() {
        let (c, lx, lz) = world_to_chunk(-1, -17);
        assert_eq!(c, ChunkCoord::new(-1, -2));
        assert_eq!(lx, CHUNK_SIZE_X as i32 - 1);
        assert_eq!(lz, CHUNK_SIZE_Z as i32 - 1);
    }

    #[test]
    fn float_positions_floor() {
        assert_eq!(ChunkCoord::containing_f32(-0.5, 15.9), ChunkCoord::new(-1, 0));
        assert_eq!(ChunkCoord::containing_f32(16.0, -16.0), ChunkCoord::new(1, -1));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let far = ChunkCoord::new(i32::MAX, i32::MIN);
        assert_eq!(far.offset(1, -1), far);
        assert!(!far.in_range());
        assert_eq!(far.chebyshev(ChunkCoord::new(i32::MIN, 0)), i32::MAX);
        assert_eq!(far.base(), (i32::MAX, i32::MIN));

        let edge = ChunkCoord::new(ChunkCoord::MAX_AXIS, ChunkCoord::MIN_AXIS);
        assert!(edge.in_range());
        assert!(!edge.offset(1, 0).in_range());
        let (bx, bz) = edge.base();
        assert_eq!(bx.checked_add(CHUNK_SIZE_X as i32 - 1), Some(i32::MAX));
        assert_eq!(bz, i32::MIN);
        assert_eq!(ChunkCoord::containing(i32::MAX, i32::MIN), edge);
    }

    #[test]
    fn chebyshev_is_square_radius() {
        let o = ChunkCoord::new(0, 0);
        assert_eq!(o.chebyshev(ChunkCoord::new(3, -2)), 3);
        assert_eq!(o.chebyshev(ChunkCoord::new(-1, -1)), 1);
    }
}
