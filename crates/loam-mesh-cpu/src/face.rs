use loam_blocks::BlockFace;

/// Cube face, numbered by the tag baked into every emitted vertex.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosZ = 0,
    NegZ = 1,
    PosY = 2,
    NegY = 3,
    PosX = 4,
    NegX = 5,
}

/// Unit-cube corner offset and uv for one quad vertex.
pub(crate) type Corner = ([f32; 3], [f32; 2]);

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosZ,
        Face::NegZ,
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
    ];

    /// Returns the `[0..6)` tag of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a tag back into a `Face`. Out-of-range tags give `None`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Grid step `(dx, dy, dz)` to the voxel across this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
        }
    }

    #[inline]
    pub fn normal(self) -> [f32; 3] {
        let (dx, dy, dz) = self.delta();
        [dx as f32, dy as f32, dz as f32]
    }

    /// Texture role of this face.
    #[inline]
    pub fn block_face(self) -> BlockFace {
        match self {
            Face::PosY => BlockFace::Top,
            Face::NegY => BlockFace::Bottom,
            _ => BlockFace::Side,
        }
    }

    /// Quad corners, counter-clockwise seen from outside the cube.
    pub(crate) fn corners(self) -> [Corner; 4] {
        match self {
            Face::PosZ => [
                ([0.0, 0.0, 1.0], [0.0, 1.0]),
                ([1.0, 0.0, 1.0], [1.0, 1.0]),
                ([1.0, 1.0, 1.0], [1.0, 0.0]),
                ([0.0, 1.0, 1.0], [0.0, 0.0]),
            ],
            Face::NegZ => [
                ([1.0, 0.0, 0.0], [0.0, 1.0]),
                ([0.0, 0.0, 0.0], [1.0, 1.0]),
                ([0.0, 1.0, 0.0], [1.0, 0.0]),
                ([1.0, 1.0, 0.0], [0.0, 0.0]),
            ],
            Face::PosY => [
                ([0.0, 1.0, 1.0], [0.0, 0.0]),
                ([1.0, 1.0, 1.0], [1.0, 0.0]),
                ([1.0, 1.0, 0.0], [1.0, 1.0]),
                ([0.0, 1.0, 0.0], [0.0, 1.0]),
            ],
            Face::NegY => [
                ([0.0, 0.0, 0.0], [0.0, 0.0]),
                ([1.0, 0.0, 0.0], [1.0, 0.0]),
                ([1.0, 0.0, 1.0], [1.0, 1.0]),
                ([0.0, 0.0, 1.0], [0.0, 1.0]),
            ],
            Face::PosX => [
                ([1.0, 0.0, 1.0], [0.0, 1.0]),
                ([1.0, 0.0, 0.0], [1.0, 1.0]),
                ([1.0, 1.0, 0.0], [1.0, 0.0]),
                ([1.0, 1.0, 1.0], [0.0, 0.0]),
            ],
            Face::NegX => [
                ([0.0, 0.0, 0.0], [0.0, 1.0]),
                ([0.0, 0.0, 1.0], [1.0, 1.0]),
                ([0.0, 1.0, 1.0], [1.0, 0.0]),
                ([0.0, 1.0, 0.0], [0.0, 0.0]),
            ],
        }
    }
}
