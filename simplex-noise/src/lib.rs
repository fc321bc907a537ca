//! Deterministic simplex noise in two, three and four dimensions.
//!
//! Every function in this crate is pure: the field is derived from Ken Perlin's
//! reference permutation, so the same coordinates always produce the same value,
//! on any thread and in any process. Nothing allocates and nothing is seeded.
//!
//! - [`raw_noise_2d`], [`raw_noise_3d`], [`raw_noise_4d`] - a single noise sample in roughly `(-1, 1)`
//! - [`scaled_raw_noise_2d`] and friends - the same sample remapped into `[lo, hi]`
//! - [`octave_noise_2d`] and friends - normalised sum of octaves at doubling frequency
//! - [`scaled_octave_noise_2d`] and friends - octave noise remapped into `[lo, hi]`
//!
//! ```
//! use simplex_noise::{octave_noise_2d, raw_noise_2d};
//!
//! assert_eq!(raw_noise_2d(0.0, 0.0), 0.0);
//! let height = octave_noise_2d(6.0, 0.5, 0.01, 120.0, 48.0);
//! assert!(height.abs() < 1.01);
//! ```

pub mod math;
pub mod noise;

pub use noise::{
    octave_noise_2d, octave_noise_3d, octave_noise_4d, raw_noise_2d, raw_noise_3d, raw_noise_4d,
    scaled_octave_noise_2d, scaled_octave_noise_3d, scaled_octave_noise_4d, scaled_raw_noise_2d,
    scaled_raw_noise_3d, scaled_raw_noise_4d,
};
