//! 3-D vector type and the Marsaglia uniform-on-sphere sampler.
//!
//! All of add/sub/scale/dot/cross/magnitude/normalize already come from
//! `nalgebra::Vector3`, which the rest of this crate uses directly (mirroring
//! `molecule/molecule.rs` in the reference implementation, which is already
//! built on `nalgebra::Vector3<f64>`). The one operation the simulator needs
//! that `nalgebra` doesn't supply is `marsaglia`.

use nalgebra::Vector3;
use rand::Rng;

pub type Vec3 = Vector3<f64>;

/// Sample a vector uniformly distributed on the unit 2-sphere via the
/// Marsaglia (1972) polar method: reject (x, y) drawn from [-1, 1]^2 with
/// x^2 + y^2 >= 1, otherwise emit (2x*sqrt(1-s), 2y*sqrt(1-s), 1-2s) with
/// s = x^2 + y^2.
///
/// Generic over `Rng` so tests can drive it with a seeded `StdRng` instead of
/// the thread-local generator (spec.md 9: "abstract over a random-number
/// source so tests can supply a deterministic stream").
pub fn marsaglia<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let x = rng.random_range(-1.0..1.0);
        let y = rng.random_range(-1.0..1.0);
        let s = x * x + y * y;
        if s < 1.0 {
            let root = (1.0 - s).sqrt();
            return Vec3::new(2.0 * x * root, 2.0 * y * root, 1.0 - 2.0 * s);
        }
    }
}

/// Wrap a displacement into the minimum-image convention for a cubic box of
/// side `box_length`: each component lands in (-L/2, L/2].
pub fn minimum_image(delta: Vec3, box_length: f64) -> Vec3 {
    Vec3::new(
        delta.x - box_length * (delta.x / box_length).round(),
        delta.y - box_length * (delta.y / box_length).round(),
        delta.z - box_length * (delta.z / box_length).round(),
    )
}

/// Fold a single coordinate into [0, box_length).
pub fn wrap_coordinate(c: f64, box_length: f64) -> f64 {
    c.rem_euclid(box_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn marsaglia_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = marsaglia(&mut rng);
            assert!((v.norm() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn marsaglia_empirical_mean_near_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 200_000;
        let mut sum = Vec3::zeros();
        for _ in 0..n {
            sum += marsaglia(&mut rng);
        }
        let mean = sum / (n as f64);
        // For n iid unit vectors with zero expectation and unit variance per
        // component, each component's standard error is about 1/sqrt(3n).
        let sigma = 1.0 / (3.0 * n as f64).sqrt();
        assert!(mean.norm() < 3.0 * sigma * 3.0f64.sqrt());
    }

    #[test]
    fn minimum_image_is_antisymmetric() {
        let l = 10.0;
        let d = Vec3::new(7.5, -3.2, 12.1);
        let mic = minimum_image(d, l);
        let mic_neg = minimum_image(-d, l);
        assert!((mic + mic_neg).norm() < 1e-9);
    }

    #[test]
    fn minimum_image_wraps_into_half_box() {
        let l = 10.0;
        let d = Vec3::new(9.0, -9.0, 5.0);
        let mic = minimum_image(d, l);
        for c in [mic.x, mic.y, mic.z] {
            assert!(c > -l / 2.0 && c <= l / 2.0);
        }
    }

    #[test]
    fn wrap_coordinate_folds_negative_values() {
        assert!((wrap_coordinate(-0.1, 1.0) - 0.9).abs() < 1e-12);
        assert!((wrap_coordinate(1.5, 1.0) - 0.5).abs() < 1e-12);
    }
}
