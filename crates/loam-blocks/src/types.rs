use serde::{Deserialize, Serialize};

/// Number of distinct block kinds, including `Air`.
pub const BLOCK_COUNT: usize = 13;

/// A voxel's material. `Air` (0) is the universal empty value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockId {
    #[default]
    Air = 0,
    Dirt = 1,
    Grass = 2,
    Sand = 3,
    Stone = 4,
    Cobblestone = 5,
    Water = 6,
    Log = 7,
    Leaves = 8,
    Cactus = 9,
    Planks = 10,
    CoalOre = 11,
    IronOre = 12,
}

/// Which side of a cube a texture is requested for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockFace {
    Top,
    Bottom,
    Side,
}

impl BlockId {
    pub const ALL: [BlockId; BLOCK_COUNT] = [
        BlockId::Air,
        BlockId::Dirt,
        BlockId::Grass,
        BlockId::Sand,
        BlockId::Stone,
        BlockId::Cobblestone,
        BlockId::Water,
        BlockId::Log,
        BlockId::Leaves,
        BlockId::Cactus,
        BlockId::Planks,
        BlockId::CoalOre,
        BlockId::IronOre,
    ];

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Unknown values decode as `Air`.
    #[inline]
    pub fn from_u8(v: u8) -> BlockId {
        Self::ALL.get(v as usize).copied().unwrap_or(BlockId::Air)
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockId::Air)
    }

    /// Whether this kind hides the faces of blocks behind it.
    /// Air, water, leaves and cactus are see-through for culling.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        !matches!(
            self,
            BlockId::Air | BlockId::Water | BlockId::Leaves | BlockId::Cactus
        )
    }

    /// Liquids go to the blended (transparent) mesh group.
    #[inline]
    pub const fn is_liquid(self) -> bool {
        matches!(self, BlockId::Water)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockId::Air => "air",
            BlockId::Dirt => "dirt",
            BlockId::Grass => "grass",
            BlockId::Sand => "sand",
            BlockId::Stone => "stone",
            BlockId::Cobblestone => "cobblestone",
            BlockId::Water => "water",
            BlockId::Log => "log",
            BlockId::Leaves => "leaves",
            BlockId::Cactus => "cactus",
            BlockId::Planks => "planks",
            BlockId::CoalOre => "coal_ore",
            BlockId::IronOre => "iron_ore",
        }
    }

    /// Layer index into the block texture array. Layer 0 is the placeholder.
    pub fn texture_layer(self, face: BlockFace) -> u8 {
        match self {
            BlockId::Air => 0,
            BlockId::Dirt => 1,
            BlockId::Grass => match face {
                BlockFace::Top => 2,
                BlockFace::Bottom => 1,
                BlockFace::Side => 3,
            },
            BlockId::Sand => 4,
            BlockId::Stone => 5,
            BlockId::Cobblestone => 6,
            BlockId::Water => 7,
            BlockId::Log => match face {
                BlockFace::Top | BlockFace::Bottom => 9,
                BlockFace::Side => 8,
            },
            BlockId::Leaves => 10,
            BlockId::Cactus => match face {
                BlockFace::Top | BlockFace::Bottom => 12,
                BlockFace::Side => 11,
            },
            BlockId::Planks => 13,
            BlockId::CoalOre => 14,
            BlockId::IronOre => 15,
        }
    }
}

impl From<BlockId> for u8 {
    #[inline]
    fn from(b: BlockId) -> u8 {
        b as u8
    }
}
