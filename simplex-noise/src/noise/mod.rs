//! Simplex noise evaluators and the constant tables they read.
//!
//! - [`raw_noise_2d`], [`raw_noise_3d`], [`raw_noise_4d`] - single simplex noise samples
//! - [`scaled_raw_noise_2d`] and friends - raw samples remapped into `[lo, hi]`
//! - [`octave_noise_2d`] and friends - multi-octave (fBm) composition
//! - [`scaled_octave_noise_2d`] and friends - octave noise remapped into `[lo, hi]`

mod octave_noise;
mod scaled_noise;
mod simplex_noise;
pub mod tables;

pub use octave_noise::{
    octave_noise_2d, octave_noise_3d, octave_noise_4d, scaled_octave_noise_2d,
    scaled_octave_noise_3d, scaled_octave_noise_4d,
};
pub use scaled_noise::{scaled_raw_noise_2d, scaled_raw_noise_3d, scaled_raw_noise_4d};
pub use simplex_noise::{raw_noise_2d, raw_noise_3d, raw_noise_4d};

/// Gradient vectors for 2D and 3D noise: the midpoints of the edges of a cube.
///
/// 2D noise uses the first two components and ignores the third.
pub const GRADIENT_3D: [[i8; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];

/// Gradient vectors for 4D noise: the midpoints of the edges of a tesseract.
///
/// Grouped by the position of the zero component, each block of eight running through
/// the signs of the other three components from `(+, +, +)` to `(-, -, -)`.
pub const GRADIENT_4D: [[i8; 4]; 32] = [
    [0, 1, 1, 1],
    [0, 1, 1, -1],
    [0, 1, -1, 1],
    [0, 1, -1, -1],
    [0, -1, 1, 1],
    [0, -1, 1, -1],
    [0, -1, -1, 1],
    [0, -1, -1, -1],
    [1, 0, 1, 1],
    [1, 0, 1, -1],
    [1, 0, -1, 1],
    [1, 0, -1, -1],
    [-1, 0, 1, 1],
    [-1, 0, 1, -1],
    [-1, 0, -1, 1],
    [-1, 0, -1, -1],
    [1, 1, 0, 1],
    [1, 1, 0, -1],
    [1, -1, 0, 1],
    [1, -1, 0, -1],
    [-1, 1, 0, 1],
    [-1, 1, 0, -1],
    [-1, -1, 0, 1],
    [-1, -1, 0, -1],
    [1, 1, 1, 0],
    [1, 1, -1, 0],
    [1, -1, 1, 0],
    [1, -1, -1, 0],
    [-1, 1, 1, 0],
    [-1, 1, -1, 0],
    [-1, -1, 1, 0],
    [-1, -1, -1, 0],
];

/// Dot product of a gradient with a 2D offset, ignoring the gradient's z component.
#[inline]
#[must_use]
pub fn dot_2d(g: &[i8; 3], x: f32, y: f32) -> f32 {
    f32::from(g[0]) * x + f32::from(g[1]) * y
}

/// Dot product of a gradient with a 3D offset.
#[inline]
#[must_use]
pub fn dot_3d(g: &[i8; 3], x: f32, y: f32, z: f32) -> f32 {
    f32::from(g[0]) * x + f32::from(g[1]) * y + f32::from(g[2]) * z
}

/// Dot product of a gradient with a 4D offset.
#[inline]
#[must_use]
pub fn dot_4d(g: &[i8; 4], x: f32, y: f32, z: f32, w: f32) -> f32 {
    f32::from(g[0]) * x + f32::from(g[1]) * y + f32::from(g[2]) * z + f32::from(g[3]) * w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_3d_have_exactly_one_zero() {
        for g in &GRADIENT_3D {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1, "{g:?}");
            assert!(g.iter().all(|&c| (-1..=1).contains(&c)));
        }
    }

    #[test]
    fn gradients_4d_have_exactly_one_zero() {
        for g in &GRADIENT_4D {
            assert_eq!(g.iter().filter(|&&c| c == 0).count(), 1, "{g:?}");
            assert!(g.iter().all(|&c| (-1..=1).contains(&c)));
        }
    }

    #[test]
    fn gradients_are_distinct() {
        for (a, ga) in GRADIENT_3D.iter().enumerate() {
            for gb in &GRADIENT_3D[a + 1..] {
                assert_ne!(ga, gb);
            }
        }
        for (a, ga) in GRADIENT_4D.iter().enumerate() {
            for gb in &GRADIENT_4D[a + 1..] {
                assert_ne!(ga, gb);
            }
        }
    }

    #[test]
    fn gradients_4d_block_order() {
        // Block n holds the vectors whose zero sits at index n.
        for (index, g) in GRADIENT_4D.iter().enumerate() {
            assert_eq!(g[index / 8], 0, "gradient {index} is in the wrong block");
        }
    }

    #[test]
    fn dot_products() {
        assert!((dot_2d(&[1, -1, 1], 0.5, 0.25) - 0.25).abs() < 1e-6);
        assert!((dot_3d(&[0, -1, 1], 9.0, 0.5, 2.0) - 1.5).abs() < 1e-6);
        assert!((dot_4d(&[-1, 1, 0, 1], 1.0, 2.0, 100.0, 0.5) - 1.5).abs() < 1e-6);
    }
}
