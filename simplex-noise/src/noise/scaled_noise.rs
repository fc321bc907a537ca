//! Raw simplex noise remapped from `(-1, 1)` onto a caller-chosen range.

use crate::math::remap;
use crate::noise::{raw_noise_2d, raw_noise_3d, raw_noise_4d};

/// 2D raw noise mapped linearly so that `-1` becomes `lo` and `1` becomes `hi`.
///
/// The result is not clamped; raw noise can leave `[-1, 1]` by a small margin.
#[inline]
#[must_use]
pub fn scaled_raw_noise_2d(lo: f32, hi: f32, x: f32, y: f32) -> f32 {
    remap(raw_noise_2d(x, y), lo, hi)
}

/// 3D raw noise mapped linearly so that `-1` becomes `lo` and `1` becomes `hi`.
#[inline]
#[must_use]
pub fn scaled_raw_noise_3d(lo: f32, hi: f32, x: f32, y: f32, z: f32) -> f32 {
    remap(raw_noise_3d(x, y, z), lo, hi)
}

/// 4D raw noise mapped linearly so that `-1` becomes `lo` and `1` becomes `hi`.
#[inline]
#[must_use]
pub fn scaled_raw_noise_4d(lo: f32, hi: f32, x: f32, y: f32, z: f32, w: f32) -> f32 {
    remap(raw_noise_4d(x, y, z, w), lo, hi)
}
