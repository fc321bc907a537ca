//! Configurable simplex noise fields on top of [`simplex_noise`].
//!
//! - [`FieldSettings`] - serde-loadable octave, frequency and output range settings
//! - [`NoiseField`] - validated field sampled at [`glam`] points of 2, 3 or 4 dimensions
//! - [`Heightmap`] - grids sampled in parallel with [`NoiseField::sample_grid`]
//! - [`NoiseError`] - everything that validation can reject
//!
//! Settings are checked once when the field is built; sampling itself cannot fail.

mod error;
mod field;
mod grid;
mod point;
mod settings;

pub use error::NoiseError;
pub use field::NoiseField;
pub use grid::Heightmap;
pub use point::NoisePoint;
pub use settings::{FieldSettings, OutputRange};
