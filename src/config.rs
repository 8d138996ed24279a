use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use loam_world::WorldGenConfig;
use serde::Deserialize;

/// Run configuration file. Every field is optional; command-line flags win
/// over values found here.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub seed: Option<u32>,
    pub view_distance: Option<i32>,
    pub workers: Option<usize>,
    /// Structure template file, relative to the config file.
    pub structures: Option<PathBuf>,
    pub worldgen: WorldGenConfig,
}

impl RunConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: RunConfig = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let mut cfg = Self::from_toml_str(&s)?;
        if let (Some(rel), Some(dir)) = (cfg.structures.as_ref(), path.parent()) {
            if rel.is_relative() {
                cfg.structures = Some(dir.join(rel));
            }
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = RunConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.worldgen, WorldGenConfig::default());
    }

    #[test]
    fn worldgen_table_overrides_one_field() {
        let cfg = RunConfig::from_toml_str(
            r#"
            seed = 99
            [worldgen]
            sea_level = 40
            [worldgen.rivers]
            enable = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.worldgen.sea_level, 40);
        assert!(!cfg.worldgen.rivers.enable);
        assert_eq!(cfg.worldgen.height, WorldGenConfig::default().height);
    }
}
