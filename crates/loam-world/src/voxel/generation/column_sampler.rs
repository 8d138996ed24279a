use loam_chunk::CHUNK_SIZE_Y;
use loam_noise::{GradientNoise, lerp};

use crate::worldgen::{NoiseLayer, WorldGenConfig};

/// Surface classification of a terrain column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnBiome {
    Mountain,
    Desert,
    Beach,
    Plains,
}

/// Everything the fill pass needs to know about one `(x, z)` column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnSample {
    /// Y of the first voxel above the terrain surface.
    pub height: i32,
    pub mountain_weight: f32,
    pub humidity: f32,
    pub river_depth: f32,
    pub biome: ColumnBiome,
}

/// Evaluates the biome and height noise channels in world space, so
/// adjacent chunks agree on their shared seam without any stitching.
pub struct ColumnSampler<'a> {
    noise: &'a GradientNoise,
    params: &'a WorldGenConfig,
    offset_x: f32,
    offset_z: f32,
}

impl<'a> ColumnSampler<'a> {
    pub fn new(noise: &'a GradientNoise, params: &'a WorldGenConfig) -> Self {
        let seed = noise.seed();
        Self {
            noise,
            params,
            offset_x: (seed % 10_000) as f32,
            offset_z: ((seed / 10_000) % 10_000) as f32,
        }
    }

    #[inline]
    pub fn params(&self) -> &'a WorldGenConfig {
        self.params
    }

    #[inline]
    fn layer(&self, layer: &NoiseLayer, x: f32, z: f32) -> f32 {
        self.noise.fractal(
            x * layer.scale + self.offset_x,
            z * layer.scale + self.offset_z,
            layer.fractal(),
        )
    }

    /// Lowland vs. mountain blend weight in `[0, 1]`.
    pub fn mountain_weight(&self, wx: i32, wz: i32) -> f32 {
        let b = &self.params.biome;
        let raw = self.layer(&b.selector, wx as f32, wz as f32);
        ((raw - b.mountain_center) * b.mountain_sharpness).clamp(0.0, 1.0)
    }

    /// How far the river channel lowers this column; 0 away from rivers.
    pub fn river_depth(&self, wx: i32, wz: i32) -> f32 {
        let r = &self.params.rivers;
        if !r.enable {
            return 0.0;
        }
        let n = self.layer(&r.noise, wx as f32, wz as f32);
        let closeness = (n - 0.5).abs() * 2.0;
        let mask = (closeness / r.width.max(f32::EPSILON)).clamp(0.0, 1.0);
        r.depth * (1.0 - mask)
    }

    pub fn sample(&self, wx: i32, wz: i32) -> ColumnSample {
        let p = self.params;
        let (x, z) = (wx as f32, wz as f32);

        let mountain_weight = self.mountain_weight(wx, wz);
        let humidity = self.layer(&p.biome.humidity, x, z);

        let h = &p.height;
        let lowland = self.layer(&h.lowland, x, z) * h.lowland_amplitude + h.lowland_base;
        let peaks = self.layer(&h.mountain, x, z).max(0.0);
        let mountain = peaks.powf(h.mountain_exponent) * h.mountain_amplitude + h.mountain_base;

        let river_depth = self.river_depth(wx, wz);
        let terrain = lerp(lowland, mountain, mountain_weight) - river_depth;
        let height = (terrain.floor() as i32).clamp(0, CHUNK_SIZE_Y as i32);

        let is_mountain = mountain_weight > p.biome.mountain_threshold;
        let is_desert = !is_mountain && humidity < p.biome.desert_threshold;
        let is_beach = !is_mountain
            && !is_desert
            && height >= p.sea_level
            && height <= p.surface.beach_max;
        let biome = if is_mountain {
            ColumnBiome::Mountain
        } else if is_desert {
            ColumnBiome::Desert
        } else if is_beach {
            ColumnBiome::Beach
        } else {
            ColumnBiome::Plains
        };

        ColumnSample {
            height,
            mountain_weight,
            humidity,
            river_depth,
            biome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_pure() {
        let noise = GradientNoise::new(77);
        let cfg = WorldGenConfig::default();
        let s = ColumnSampler::new(&noise, &cfg);
        assert_eq!(s.sample(-130, 4096), s.sample(-130, 4096));
    }

    #[test]
    fn disabled_rivers_carve_nothing() {
        let noise = GradientNoise::new(3);
        let mut cfg = WorldGenConfig::default();
        cfg.rivers.enable = false;
        let s = ColumnSampler::new(&noise, &cfg);
        for wx in -50..50 {
            assert_eq!(s.river_depth(wx, wx * 3), 0.0);
        }
    }

    #[test]
    fn heights_stay_inside_chunk() {
        let noise = GradientNoise::new(2024);
        let cfg = WorldGenConfig::default();
        let s = ColumnSampler::new(&noise, &cfg);
        for i in -200..200 {
            let c = s.sample(i * 37, i * -53);
            assert!((0..=CHUNK_SIZE_Y as i32).contains(&c.height));
            assert!((0.0..=1.0).contains(&c.mountain_weight));
            assert!(c.river_depth >= 0.0 && c.river_depth <= cfg.rivers.depth);
        }
    }
}
