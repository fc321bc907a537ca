//! Serializable configuration for a [`NoiseField`](crate::NoiseField).

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, ensure_finite};

/// Linear output range for a noise field.
///
/// Noise in `[-1, 1]` is mapped so that `-1` becomes `lo` and `1` becomes `hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputRange {
    /// Value that `-1` maps to.
    pub lo: f32,
    /// Value that `1` maps to.
    pub hi: f32,
}

impl OutputRange {
    /// Creates a range from its bounds.
    #[must_use]
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }
}

/// Octave, frequency and output range settings for a noise field.
///
/// Every field has a default, so `{}` is a valid settings document:
///
/// ```
/// use simplex_field::FieldSettings;
///
/// let settings = FieldSettings::from_json(r#"{ "octaves": 6, "scale": 0.01 }"#).unwrap();
/// assert_eq!(settings.octaves, 6);
/// assert_eq!(settings.persistence, 0.5);
/// assert!(settings.range.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSettings {
    /// Number of octaves summed. Must be at least 1.
    pub octaves: u32,
    /// Amplitude ratio between successive octaves, nominally in `[0, 1]`.
    pub persistence: f32,
    /// Frequency of the first octave. Must be positive.
    pub scale: f32,
    /// Optional linear remap of the output. `None` keeps roughly `(-1, 1)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<OutputRange>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            octaves: 1,
            persistence: 0.5,
            scale: 1.0,
            range: None,
        }
    }
}

impl FieldSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, NoiseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every parameter.
    ///
    /// Persistence above 1 is accepted with a warning, since the octave sum is still a
    /// weighted average. Negative persistence is rejected: alternating amplitudes can
    /// sum to zero and leave the output unbounded. Settings whose top octave frequency
    /// or amplitude total would overflow are rejected as well.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::ZeroOctaves);
        }

        let persistence = ensure_finite("persistence", self.persistence)?;
        if persistence < 0.0 {
            return Err(NoiseError::NegativePersistence(persistence));
        }
        if persistence > 1.0 {
            tracing::warn!(
                persistence,
                "Persistence above 1; higher octaves will dominate"
            );
        }

        let scale = ensure_finite("scale", self.scale)?;
        if scale <= 0.0 {
            return Err(NoiseError::NonPositiveScale(scale));
        }
        self.check_octave_sum(persistence, scale)?;

        if let Some(OutputRange { lo, hi }) = self.range {
            let lo = ensure_finite("range.lo", lo)?;
            let hi = ensure_finite("range.hi", hi)?;
            if lo > hi {
                return Err(NoiseError::InvertedRange { lo, hi });
            }
        }

        Ok(())
    }

    /// Walks the octaves the way sampling does and fails once a frequency or the
    /// amplitude total stops being finite. The frequency doubles every step, so this
    /// ends after a few hundred iterations at most.
    fn check_octave_sum(&self, persistence: f32, scale: f32) -> Result<(), NoiseError> {
        let overflow = NoiseError::OctaveOverflow {
            octaves: self.octaves,
            scale,
            persistence,
        };
        let mut frequency = scale;
        let mut amplitude = 1.0_f32;
        let mut max_amplitude = 0.0_f32;

        for _ in 0..self.octaves {
            max_amplitude += amplitude;
            if !frequency.is_finite() || !max_amplitude.is_finite() {
                return Err(overflow);
            }
            frequency *= 2.0;
            amplitude *= persistence;
        }

        Ok(())
    }
}
