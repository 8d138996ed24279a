use loam_noise::FractalParams;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

pub const SEA_LEVEL: i32 = 63;
pub const ROCK_CAP: i32 = 95;

/// Tunables for the terrain generator. `Default` is the canonical world.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldGenConfig {
    pub sea_level: i32,
    pub biome: Biome,
    pub height: Height,
    pub rivers: Rivers,
    pub surface: Surface,
    pub decoration: Decoration,
    pub ores: Ores,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            sea_level: SEA_LEVEL,
            biome: Biome::default(),
            height: Height::default(),
            rivers: Rivers::default(),
            surface: Surface::default(),
            decoration: Decoration::default(),
            ores: Ores::default(),
        }
    }
}

impl WorldGenConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldGenConfig = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// One fractal noise channel sampled in scaled world space.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct NoiseLayer {
    pub scale: f32,
    pub octaves: u32,
    #[serde(default = "default_persistence")]
    pub persistence: f32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
}

fn default_persistence() -> f32 {
    0.5
}
fn default_lacunarity() -> f32 {
    2.0
}

impl NoiseLayer {
    pub const fn new(scale: f32, octaves: u32, persistence: f32) -> Self {
        Self {
            scale,
            octaves,
            persistence,
            lacunarity: 2.0,
        }
    }

    #[inline]
    pub fn fractal(&self) -> FractalParams {
        FractalParams::new(self.octaves, self.persistence, self.lacunarity)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Biome {
    pub selector: NoiseLayer,
    /// Selector value at which mountains start to blend in.
    pub mountain_center: f32,
    /// Slope of the selector rescale; higher means sharper biome edges.
    pub mountain_sharpness: f32,
    /// Weight above which a column counts as mountain for surface rules.
    pub mountain_threshold: f32,
    pub humidity: NoiseLayer,
    pub desert_threshold: f32,
}

impl Default for Biome {
    fn default() -> Self {
        Self {
            selector: NoiseLayer::new(0.002, 3, 0.5),
            mountain_center: 0.5,
            mountain_sharpness: 3.3,
            mountain_threshold: 0.4,
            humidity: NoiseLayer::new(0.01, 2, 0.5),
            desert_threshold: 0.35,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Height {
    pub lowland: NoiseLayer,
    pub lowland_base: f32,
    pub lowland_amplitude: f32,
    pub mountain: NoiseLayer,
    pub mountain_base: f32,
    pub mountain_amplitude: f32,
    /// Power applied to mountain noise; values above 1 carve cliffs.
    pub mountain_exponent: f32,
}

impl Default for Height {
    fn default() -> Self {
        Self {
            lowland: NoiseLayer::new(0.008, 3, 0.3),
            lowland_base: 64.0,
            lowland_amplitude: 10.0,
            mountain: NoiseLayer::new(0.012, 5, 0.55),
            mountain_base: 63.0,
            mountain_amplitude: 120.0,
            mountain_exponent: 2.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Rivers {
    pub enable: bool,
    pub noise: NoiseLayer,
    /// Half-width of the band around the noise midpoint that gets carved.
    pub width: f32,
    pub depth: f32,
    /// River depths in `(bank_min_depth, bank_max_depth)` get sand banks.
    pub bank_min_depth: f32,
    pub bank_max_depth: f32,
}

impl Default for Rivers {
    fn default() -> Self {
        Self {
            enable: true,
            noise: NoiseLayer::new(0.005, 2, 0.5),
            width: 0.15,
            depth: 10.0,
            bank_min_depth: 0.5,
            bank_max_depth: 4.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Surface {
    /// Mountain surfaces above this altitude are bare stone.
    pub rock_cap: i32,
    /// Mountain soil thins to `alpine_soil_depth` above this altitude.
    pub alpine_soil_floor: i32,
    /// Desert sand only appears below this altitude.
    pub desert_sand_ceiling: i32,
    /// Highest terrain height still treated as beach.
    pub beach_max: i32,
    pub soil_depth: i32,
    pub alpine_soil_depth: i32,
    /// Soil thickness for voxels near or below sea level.
    pub shore_soil_depth: i32,
    /// Voxels below `sea_level + shore_band` use `shore_soil_depth`.
    pub shore_band: i32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            rock_cap: ROCK_CAP,
            alpine_soil_floor: 90,
            desert_sand_ceiling: 70,
            beach_max: 65,
            soil_depth: 4,
            alpine_soil_depth: 2,
            shore_soil_depth: 5,
            shore_band: 2,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Decoration {
    pub enable: bool,
    /// Columns this close to the chunk edge are never decorated.
    pub border: i32,
    pub tree_chance: f32,
    pub cactus_chance: f32,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            enable: true,
            border: 2,
            tree_chance: 0.01,
            cactus_chance: 0.003,
        }
    }
}

/// Optional ore scatter; off in the canonical world, where buried terrain
/// is plain stone.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Ores {
    pub enable: bool,
    /// Ores never replace stone closer than this to the column surface.
    pub min_depth: i32,
    pub coal_chance: f32,
    pub coal_max_y: i32,
    pub iron_chance: f32,
    pub iron_max_y: i32,
}

impl Default for Ores {
    fn default() -> Self {
        Self {
            enable: false,
            min_depth: 6,
            coal_chance: 0.012,
            coal_max_y: 128,
            iron_chance: 0.006,
            iron_max_y: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = WorldGenConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, WorldGenConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = WorldGenConfig::from_toml_str(
            r#"
            sea_level = 40
            [rivers]
            enable = false
            [height.lowland]
            scale = 0.02
            octaves = 4
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sea_level, 40);
        assert!(!cfg.rivers.enable);
        assert_eq!(cfg.rivers.depth, Rivers::default().depth);
        assert_eq!(cfg.height.lowland.octaves, 4);
        assert_eq!(cfg.height.lowland.persistence, 0.5);
        assert_eq!(cfg.surface, Surface::default());
    }

    #[test]
    fn ores_are_opt_in() {
        assert!(!WorldGenConfig::default().ores.enable);
        let cfg = WorldGenConfig::from_toml_str("[ores]\nenable = true\n").unwrap();
        assert!(cfg.ores.enable);
        assert_eq!(cfg.ores.coal_chance, Ores::default().coal_chance);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(WorldGenConfig::from_toml_str("sea_level = \"deep\"").is_err());
    }
}
