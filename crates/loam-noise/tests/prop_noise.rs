use loam_noise::{FractalParams, GradientNoise, column_rand01, hash3_rand01};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -100_000.0f32..100_000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    // single-octave noise stays in the unit interval
    #[test]
    fn noise_in_unit_range(seed in any::<u32>(), x in coord(), y in coord(), z in coord()) {
        let n = GradientNoise::new(seed);
        let v = n.noise(x, y, z);
        prop_assert!(v.is_finite());
        prop_assert!((0.0..=1.0).contains(&v));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    // fractal sums stay in the unit interval for any octave setup
    #[test]
    fn fractal_in_unit_range(
        seed in any::<u32>(),
        x in coord(),
        z in coord(),
        octaves in 0u32..8,
        persistence in 0.05f32..1.0,
        lacunarity in 1.0f32..3.0,
    ) {
        let n = GradientNoise::new(seed);
        let v = n.fractal(x, z, FractalParams::new(octaves, persistence, lacunarity));
        prop_assert!(v.is_finite());
        prop_assert!((0.0..=1.0).contains(&v));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    // both hashes are pure and bounded
    #[test]
    fn hashes_bounded(seed in any::<u32>(), x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
        let c = column_rand01(seed, x, z);
        prop_assert!((0.0..=1.0).contains(&c));
        prop_assert_eq!(c, column_rand01(seed, x, z));
        let h = hash3_rand01(seed, x, y, z, 7);
        prop_assert!((0.0..1.0).contains(&h));
    }
}
