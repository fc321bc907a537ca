//! Multi-octave (fractal Brownian motion) composition of raw simplex noise.
//!
//! Octave `k` samples the raw field at frequency `scale * 2^k` with amplitude
//! `persistence^k`. The weighted sum is divided by the total amplitude, so the result
//! stays in roughly `(-1, 1)` for any octave count and persistence.

use crate::math::remap;
use crate::noise::{raw_noise_2d, raw_noise_3d, raw_noise_4d};

/// Sums `sample(frequency) * amplitude` over the octaves and normalises.
///
/// `octaves` is truncated toward zero. With no octaves the normaliser is zero and the
/// result is NaN.
#[inline]
fn fractal_sum(octaves: f32, persistence: f32, scale: f32, sample: impl Fn(f32) -> f32) -> f32 {
    let mut total = 0.0;
    let mut frequency = scale;
    let mut amplitude = 1.0;
    let mut max_amplitude = 0.0;

    for _ in 0..octaves as u32 {
        total += sample(frequency) * amplitude;
        frequency *= 2.0;
        max_amplitude += amplitude;
        amplitude *= persistence;
    }

    total / max_amplitude
}

/// Multi-octave 2D simplex noise.
///
/// Each successive octave doubles the frequency and multiplies the amplitude by
/// `persistence`; higher persistence in `[0, 1]` keeps more of the fine detail.
/// `octaves` must be at least 1.
#[must_use]
pub fn octave_noise_2d(octaves: f32, persistence: f32, scale: f32, x: f32, y: f32) -> f32 {
    fractal_sum(octaves, persistence, scale, |frequency| {
        raw_noise_2d(x * frequency, y * frequency)
    })
}

/// Multi-octave 3D simplex noise. See [`octave_noise_2d`].
#[must_use]
pub fn octave_noise_3d(
    octaves: f32,
    persistence: f32,
    scale: f32,
    x: f32,
    y: f32,
    z: f32,
) -> f32 {
    fractal_sum(octaves, persistence, scale, |frequency| {
        raw_noise_3d(x * frequency, y * frequency, z * frequency)
    })
}

/// Multi-octave 4D simplex noise. See [`octave_noise_2d`].
#[must_use]
pub fn octave_noise_4d(
    octaves: f32,
    persistence: f32,
    scale: f32,
    x: f32,
    y: f32,
    z: f32,
    w: f32,
) -> f32 {
    fractal_sum(octaves, persistence, scale, |frequency| {
        raw_noise_4d(x * frequency, y * frequency, z * frequency, w * frequency)
    })
}

/// [`octave_noise_2d`] mapped linearly from `[-1, 1]` onto `[lo, hi]`, unclamped.
#[must_use]
pub fn scaled_octave_noise_2d(
    octaves: f32,
    persistence: f32,
    scale: f32,
    lo: f32,
    hi: f32,
    x: f32,
    y: f32,
) -> f32 {
    remap(octave_noise_2d(octaves, persistence, scale, x, y), lo, hi)
}

/// [`octave_noise_3d`] mapped linearly from `[-1, 1]` onto `[lo, hi]`, unclamped.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn scaled_octave_noise_3d(
    octaves: f32,
    persistence: f32,
    scale: f32,
    lo: f32,
    hi: f32,
    x: f32,
    y: f32,
    z: f32,
) -> f32 {
    remap(octave_noise_3d(octaves, persistence, scale, x, y, z), lo, hi)
}

/// [`octave_noise_4d`] mapped linearly from `[-1, 1]` onto `[lo, hi]`, unclamped.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn scaled_octave_noise_4d(
    octaves: f32,
    persistence: f32,
    scale: f32,
    lo: f32,
    hi: f32,
    x: f32,
    y: f32,
    z: f32,
    w: f32,
) -> f32 {
    remap(
        octave_noise_4d(octaves, persistence, scale, x, y, z, w),
        lo,
        hi,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::float_cmp)]
    #[test]
    fn single_octave_is_raw_noise_at_scale() {
        for i in 0..50 {
            let x = i as f32 * 0.917 - 11.0;
            let y = i as f32 * 0.233 + 3.0;
            let z = i as f32 * -0.41;
            for persistence in [0.0, 0.5, 0.9] {
                assert_eq!(
                    octave_noise_2d(1.0, persistence, 0.5, x, y),
                    raw_noise_2d(x * 0.5, y * 0.5)
                );
                assert_eq!(
                    octave_noise_3d(1.0, persistence, 2.0, x, y, z),
                    raw_noise_3d(x * 2.0, y * 2.0, z * 2.0)
                );
                assert_eq!(
                    octave_noise_4d(1.0, persistence, 1.0, x, y, z, 0.5),
                    raw_noise_4d(x, y, z, 0.5)
                );
            }
        }
    }

    #[test]
    fn octaves_are_truncated() {
        let a = octave_noise_2d(3.0, 0.5, 0.1, 12.5, -4.0);
        let b = octave_noise_2d(3.99, 0.5, 0.1, 12.5, -4.0);
        assert!((a - b).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_octaves_is_nan() {
        assert!(octave_noise_2d(0.0, 0.5, 1.0, 3.0, 4.0).is_nan());
        assert!(octave_noise_3d(0.5, 0.5, 1.0, 3.0, 4.0, 5.0).is_nan());
    }

    #[test]
    fn normalised_by_total_amplitude() {
        for i in 0..200 {
            let x = i as f32 * 0.377 - 30.0;
            let y = i as f32 * 0.119 + 8.0;
            let v = octave_noise_2d(6.0, 0.5, 0.25, x, y);
            let mut bound = 0.0_f32;
            let mut frequency = 0.25;
            for _ in 0..6 {
                bound = bound.max(raw_noise_2d(x * frequency, y * frequency).abs());
                frequency *= 2.0;
            }
            assert!(v.abs() <= bound + 1e-5, "{v} exceeds {bound}");
        }
    }

    #[test]
    fn known_values() {
        let cases = [
            (octave_noise_2d(4.0, 0.5, 0.01, 13.5, -7.25), -0.479_087_35),
            (octave_noise_2d(3.0, 0.6, 0.5, 2.3, 4.1), 0.263_576),
        ];
        for (actual, expected) in cases {
            assert!(
                (actual - expected).abs() < 1e-5,
                "expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn scaled_octave_at_origin_is_midpoint() {
        assert!((scaled_octave_noise_2d(4.0, 0.5, 1.0, 10.0, 20.0, 0.0, 0.0) - 15.0).abs() < 1e-6);
        assert!(
            (scaled_octave_noise_3d(2.0, 0.5, 1.0, -1.0, 3.0, 0.0, 0.0, 0.0) - 1.0).abs() < 1e-6
        );
        assert!(
            (scaled_octave_noise_4d(5.0, 0.25, 0.1, 0.0, 255.0, 0.0, 0.0, 0.0, 0.0) - 127.5).abs()
                < 1e-4
        );
    }
}
