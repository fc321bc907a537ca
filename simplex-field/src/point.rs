//! Points that a [`NoiseField`](crate::NoiseField) can be sampled at.

use glam::{Vec2, Vec3, Vec4};
use simplex_noise::{octave_noise_2d, octave_noise_3d, octave_noise_4d};

/// A coordinate in 2, 3 or 4 dimensions, selecting the matching simplex evaluator.
pub trait NoisePoint: Copy {
    /// Number of dimensions of the point. Reported in grid sampling logs.
    const DIMENSIONS: usize;

    /// Octave noise at this point. `octaves` is already validated to be at least 1.
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32;
}

impl NoisePoint for Vec2 {
    const DIMENSIONS: usize = 2;

    #[inline]
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32 {
        octave_noise_2d(octaves as f32, persistence, scale, self.x, self.y)
    }
}

impl NoisePoint for Vec3 {
    const DIMENSIONS: usize = 3;

    #[inline]
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32 {
        octave_noise_3d(octaves as f32, persistence, scale, self.x, self.y, self.z)
    }
}

impl NoisePoint for Vec4 {
    const DIMENSIONS: usize = 4;

    #[inline]
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32 {
        octave_noise_4d(
            octaves as f32,
            persistence,
            scale,
            self.x,
            self.y,
            self.z,
            self.w,
        )
    }
}

impl NoisePoint for [f32; 2] {
    const DIMENSIONS: usize = 2;

    #[inline]
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32 {
        Vec2::from_array(self).octave_noise(octaves, persistence, scale)
    }
}

impl NoisePoint for [f32; 3] {
    const DIMENSIONS: usize = 3;

    #[inline]
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32 {
        Vec3::from_array(self).octave_noise(octaves, persistence, scale)
    }
}

impl NoisePoint for [f32; 4] {
    const DIMENSIONS: usize = 4;

    #[inline]
    fn octave_noise(self, octaves: u32, persistence: f32, scale: f32) -> f32 {
        Vec4::from_array(self).octave_noise(octaves, persistence, scale)
    }
}
