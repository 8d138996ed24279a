//! Decoration structures stamped onto terrain columns.
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs;
use std::path::Path;

use loam_blocks::BlockId;
use serde::Deserialize;

/// One voxel of a structure, relative to the first air voxel above the
/// column's surface block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StructureBlock {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
    pub block: BlockId,
}

impl StructureBlock {
    #[inline]
    pub const fn new(dx: i32, dy: i32, dz: i32, block: BlockId) -> Self {
        Self { dx, dy, dz, block }
    }
}

/// Ordered list of offsets; later entries overwrite earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StructureTemplate {
    #[serde(default)]
    pub blocks: Vec<StructureBlock>,
}

impl StructureTemplate {
    pub fn new(blocks: Vec<StructureBlock>) -> Self {
        Self { blocks }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Largest horizontal distance any block reaches from the anchor column.
    pub fn horizontal_reach(&self) -> i32 {
        self.blocks
            .iter()
            .map(|b| b.dx.abs().max(b.dz.abs()))
            .max()
            .unwrap_or(0)
    }

    /// Inclusive `(min_dy, max_dy)`, or `None` for an empty template.
    pub fn vertical_span(&self) -> Option<(i32, i32)> {
        let min = self.blocks.iter().map(|b| b.dy).min()?;
        let max = self.blocks.iter().map(|b| b.dy).max()?;
        Some((min, max))
    }
}

pub const TREE_TRUNK_HEIGHT: i32 = 5;
pub const CACTUS_HEIGHT: i32 = 3;

/// Five-high log with a two-layer wide canopy and a narrow crown.
pub fn oak_tree() -> StructureTemplate {
    let mut blocks = Vec::new();
    for dy in 3..=4 {
        for dx in -2i32..=2 {
            for dz in -2i32..=2 {
                // Clip the canopy corners.
                if dx.abs() == 2 && dz.abs() == 2 {
                    continue;
                }
                if dx == 0 && dz == 0 {
                    continue;
                }
                blocks.push(StructureBlock::new(dx, dy, dz, BlockId::Leaves));
            }
        }
    }
    for dy in 5..=6 {
        for dx in -1i32..=1 {
            for dz in -1i32..=1 {
                if dy == 6 && dx != 0 && dz != 0 {
                    continue;
                }
                blocks.push(StructureBlock::new(dx, dy, dz, BlockId::Leaves));
            }
        }
    }
    for dy in 0..TREE_TRUNK_HEIGHT {
        blocks.push(StructureBlock::new(0, dy, 0, BlockId::Log));
    }
    StructureTemplate::new(blocks)
}

pub fn cactus() -> StructureTemplate {
    StructureTemplate::new(
        (0..CACTUS_HEIGHT)
            .map(|dy| StructureBlock::new(0, dy, 0, BlockId::Cactus))
            .collect(),
    )
}

/// The templates the terrain decorator draws from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StructureSet {
    #[serde(default = "oak_tree")]
    pub tree: StructureTemplate,
    #[serde(default = "cactus")]
    pub cactus: StructureTemplate,
}

impl Default for StructureSet {
    fn default() -> Self {
        Self {
            tree: oak_tree(),
            cactus: cactus(),
        }
    }
}

impl StructureSet {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let set: StructureSet = toml::from_str(toml_str)?;
        Ok(set)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunk_is_not_overwritten_by_leaves() {
        let t = oak_tree();
        let mut last = std::collections::HashMap::new();
        for b in &t.blocks {
            last.insert((b.dx, b.dy, b.dz), b.block);
        }
        for dy in 0..TREE_TRUNK_HEIGHT {
            assert_eq!(last.get(&(0, dy, 0)), Some(&BlockId::Log));
        }
        assert_eq!(last.get(&(0, 6, 0)), Some(&BlockId::Leaves));
    }

    #[test]
    fn canopy_has_no_hollow_above_trunk() {
        let t = oak_tree();
        let (_, top) = t.vertical_span().unwrap();
        for dy in 0..=top {
            let filled = t.blocks.iter().any(|b| b.dx == 0 && b.dz == 0 && b.dy == dy);
            assert!(filled, "gap in the centre column at dy={dy}");
        }
        assert!(t.blocks.contains(&StructureBlock::new(0, 5, 0, BlockId::Leaves)));
    }

    #[test]
    fn default_templates_fit_two_voxel_margin() {
        let set = StructureSet::default();
        assert!(set.tree.horizontal_reach() <= 2);
        assert_eq!(set.cactus.horizontal_reach(), 0);
        assert_eq!(set.cactus.vertical_span(), Some((0, CACTUS_HEIGHT - 1)));
    }

    #[test]
    fn toml_overrides_one_template() {
        let set = StructureSet::from_toml_str(
            r#"
            [cactus]
            blocks = [
                { dx = 0, dy = 0, dz = 0, block = "cactus" },
                { dx = 0, dy = 1, dz = 0, block = "cactus" },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(set.cactus.blocks.len(), 2);
        assert_eq!(set.tree, oak_tree());
    }

    #[test]
    fn unknown_block_name_is_an_error() {
        let r = StructureSet::from_toml_str(
            r#"
            [tree]
            blocks = [{ dx = 0, dy = 0, dz = 0, block = "obsidian" }]
            "#,
        );
        assert!(r.is_err());
    }
}
