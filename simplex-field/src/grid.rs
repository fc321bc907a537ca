//! Parallel sampling of rectangular grids.
//!
//! Rows are distributed over the rayon global pool. Every sample is a pure function
//! of its coordinates, so the output does not depend on the number of threads.

use std::time::Instant;

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::error::{NoiseError, ensure_finite};
use crate::field::NoiseField;
use crate::point::NoisePoint;

/// Row-major grid of noise samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl Heightmap {
    /// Number of samples per row.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The sample at column `col` of row `row`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col < self.width && row < self.height {
            self.values.get(row * self.width + col).copied()
        } else {
            None
        }
    }

    /// All samples, row by row.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Consumes the heightmap, returning its samples.
    #[must_use]
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Smallest and largest sample, or `None` for an empty grid.
    #[must_use]
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.values.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl NoiseField {
    /// Samples 2D noise on a `width` x `height` grid.
    ///
    /// Sample `(col, row)` is taken at `origin + (col, row) * step`.
    pub fn sample_grid(
        &self,
        origin: Vec2,
        step: f32,
        width: usize,
        height: usize,
    ) -> Result<Heightmap, NoiseError> {
        ensure_finite("origin.x", origin.x)?;
        ensure_finite("origin.y", origin.y)?;
        self.fill(step, width, height, |col, row| {
            origin + Vec2::new(col, row) * step
        })
    }

    /// Samples 3D noise on a `width` x `height` grid in the plane `z = origin.z`.
    ///
    /// Sample `(col, row)` is taken at `origin + (col, row, 0) * step`.
    pub fn sample_slice(
        &self,
        origin: Vec3,
        step: f32,
        width: usize,
        height: usize,
    ) -> Result<Heightmap, NoiseError> {
        ensure_finite("origin.x", origin.x)?;
        ensure_finite("origin.y", origin.y)?;
        ensure_finite("origin.z", origin.z)?;
        self.fill(step, width, height, |col, row| {
            origin + Vec3::new(col, row, 0.0) * step
        })
    }

    /// Samples the point that `point` maps each `(col, row)` to.
    #[tracing::instrument(level = "trace", skip(self, point), name = "sample_grid")]
    fn fill<P: NoisePoint>(
        &self,
        step: f32,
        width: usize,
        height: usize,
        point: impl Fn(f32, f32) -> P + Sync,
    ) -> Result<Heightmap, NoiseError> {
        let step = ensure_finite("step", step)?;
        if step <= 0.0 {
            return Err(NoiseError::NonPositiveStep(step));
        }
        let len = width
            .checked_mul(height)
            .ok_or(NoiseError::GridTooLarge { width, height })?;

        let start = Instant::now();
        let mut values = vec![0.0; len];
        if len > 0 {
            values
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, cells)| {
                    for (col, cell) in cells.iter_mut().enumerate() {
                        *cell = self.sample(point(col as f32, row as f32));
                    }
                });
        }
        tracing::debug!(
            dimensions = P::DIMENSIONS,
            width,
            height,
            elapsed = ?start.elapsed(),
            "Sampled noise grid"
        );

        Ok(Heightmap {
            width,
            height,
            values,
        })
    }
}
