//! A validated noise field that can be sampled at points of any supported dimension.

use simplex_noise::math::remap;

use crate::error::NoiseError;
use crate::point::NoisePoint;
use crate::settings::FieldSettings;

/// Multi-octave simplex noise with fixed, validated settings.
///
/// Construction checks the settings once, so sampling never fails. The field holds
/// no mutable state and can be shared freely between threads.
///
/// ```
/// use glam::Vec2;
/// use simplex_field::{FieldSettings, NoiseField, OutputRange};
///
/// let field = NoiseField::new(FieldSettings {
///     octaves: 4,
///     persistence: 0.5,
///     scale: 0.05,
///     range: Some(OutputRange::new(0.0, 64.0)),
/// })
/// .unwrap();
///
/// let height = field.sample(Vec2::new(10.0, 20.0));
/// assert!((-1.0..=65.0).contains(&height));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseField {
    settings: FieldSettings,
}

impl NoiseField {
    /// Validates `settings` and builds the field.
    pub fn new(settings: FieldSettings) -> Result<Self, NoiseError> {
        settings.validate()?;
        tracing::debug!(
            octaves = settings.octaves,
            persistence = settings.persistence,
            scale = settings.scale,
            range = ?settings.range,
            "Noise field created"
        );
        Ok(Self { settings })
    }

    /// Parses and validates JSON settings, then builds the field.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        Self::new(FieldSettings::from_json(json)?)
    }

    /// The settings this field was built from.
    #[must_use]
    pub const fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Sample the field at `point`.
    ///
    /// Equivalent to the octave noise of the point's dimension, followed by the output
    /// range mapping when one is configured. The result is not clamped.
    #[inline]
    #[must_use]
    pub fn sample<P: NoisePoint>(&self, point: P) -> f32 {
        let FieldSettings {
            octaves,
            persistence,
            scale,
            range,
        } = self.settings;
        let value = point.octave_noise(octaves, persistence, scale);
        match range {
            Some(range) => remap(value, range.lo, range.hi),
            None => value,
        }
    }
}

impl TryFrom<FieldSettings> for NoiseField {
    type Error = NoiseError;

    fn try_from(settings: FieldSettings) -> Result<Self, Self::Error> {
        Self::new(settings)
    }
}
