/// Y coordinate of the plane that 2D fractal sums are taken on.
/// Integer planes are avoided since gradient noise is zero on lattice points.
const FRACTAL_PLANE_Y: f32 = 0.1;

/// Octave settings for [`GradientNoise::fractal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
    pub octaves: u32,
    pub persistence: f32,
    pub lacunarity: f32,
}

impl FractalParams {
    #[inline]
    pub const fn new(octaves: u32, persistence: f32, lacunarity: f32) -> Self {
        Self {
            octaves,
            persistence,
            lacunarity,
        }
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self::new(4, 0.5, 2.0)
    }
}

/// Classic improved 3D gradient noise over a seed-shuffled permutation table.
#[derive(Clone)]
pub struct GradientNoise {
    seed: u32,
    perm: [u8; 512],
}

impl std::fmt::Debug for GradientNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientNoise")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl GradientNoise {
    pub fn new(seed: u32) -> Self {
        let mut base: Vec<u8> = (0..=255u8).collect();
        let mut rng = fastrand::Rng::with_seed(u64::from(seed));
        rng.shuffle(&mut base);
        let mut perm = [0u8; 512];
        // Second half mirrors the first so corner lookups never wrap.
        for (i, v) in base.iter().copied().enumerate() {
            perm[i] = v;
            perm[i + 256] = v;
        }
        Self { seed, perm }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// Single-octave noise remapped to `[0, 1]`.
    pub fn noise(&self, x: f32, y: f32, z: f32) -> f32 {
        let fx = x.floor();
        let fy = y.floor();
        let fz = z.floor();
        let xi = (fx as i64 & 255) as usize;
        let yi = (fy as i64 & 255) as usize;
        let zi = (fz as i64 & 255) as usize;

        let x = x - fx;
        let y = y - fy;
        let z = z - fz;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let res = lerp(
            lerp(
                lerp(grad(self.p(aa), x, y, z), grad(self.p(ba), x - 1.0, y, z), u),
                lerp(
                    grad(self.p(ab), x, y - 1.0, z),
                    grad(self.p(bb), x - 1.0, y - 1.0, z),
                    u,
                ),
                v,
            ),
            lerp(
                lerp(
                    grad(self.p(aa + 1), x, y, z - 1.0),
                    grad(self.p(ba + 1), x - 1.0, y, z - 1.0),
                    u,
                ),
                lerp(
                    grad(self.p(ab + 1), x, y - 1.0, z - 1.0),
                    grad(self.p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                    u,
                ),
                v,
            ),
            w,
        );

        ((res + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Octave sum on a horizontal plane, normalized by total amplitude so the
    /// result stays in `[0, 1]`. Zero octaves are treated as one.
    pub fn fractal(&self, x: f32, z: f32, params: FractalParams) -> f32 {
        let octaves = params.octaves.max(1);
        let mut total = 0.0f32;
        let mut frequency = 1.0f32;
        let mut amplitude = 1.0f32;
        let mut max_value = 0.0f32;
        for _ in 0..octaves {
            total += self.noise(x * frequency, FRACTAL_PLANE_Y, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= params.persistence;
            frequency *= params.lacunarity;
        }
        if max_value <= 0.0 {
            return 0.0;
        }
        (total / max_value).clamp(0.0, 1.0)
    }
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product with one of the 12 cube-edge gradients selected by `hash`.
#[inline]
pub fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
