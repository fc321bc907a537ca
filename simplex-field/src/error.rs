//! Errors raised while validating field settings and grid requests.

use thiserror::Error;

/// An error that can occur when building a noise field or sampling a grid.
#[derive(Error, Debug)]
pub enum NoiseError {
    /// At least one octave is required.
    #[error("Octave count must be at least 1")]
    ZeroOctaves,
    /// A parameter was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Negative persistence can cancel the octave amplitudes and break normalisation.
    #[error("Persistence must not be negative, got {0}")]
    NegativePersistence(f32),
    /// The highest octave's frequency or the amplitude total is not representable.
    #[error("{octaves} octaves at scale {scale} and persistence {persistence} overflow f32")]
    OctaveOverflow {
        /// Requested octave count.
        octaves: u32,
        /// Base frequency.
        scale: f32,
        /// Amplitude ratio.
        persistence: f32,
    },
    /// The base frequency must be positive.
    #[error("Scale must be positive, got {0}")]
    NonPositiveScale(f32),
    /// The output range has its bounds swapped.
    #[error("Output range is inverted: lo {lo} > hi {hi}")]
    InvertedRange {
        /// Lower bound.
        lo: f32,
        /// Upper bound.
        hi: f32,
    },
    /// Grid spacing must be positive.
    #[error("Grid step must be positive, got {0}")]
    NonPositiveStep(f32),
    /// The grid has more cells than fit in memory addressing.
    #[error("Grid of {width}x{height} samples is too large")]
    GridTooLarge {
        /// Requested width in samples.
        width: usize,
        /// Requested height in samples.
        height: usize,
    },
    /// Settings JSON could not be parsed.
    #[error("Failed to parse field settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32, NoiseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        assert!(matches!(ensure_finite("scale", 0.25), Ok(v) if (v - 0.25).abs() < f32::EPSILON));
    }

    #[test]
    fn non_finite_values_name_the_field() {
        let err = ensure_finite("persistence", f32::NAN).expect_err("should be rejected");
        assert!(matches!(err, NoiseError::NonFinite { field: "persistence", .. }));
        assert_eq!(err.to_string(), "persistence must be finite, got NaN");
    }

    #[test]
    fn messages() {
        assert_eq!(
            NoiseError::InvertedRange { lo: 2.0, hi: 1.0 }.to_string(),
            "Output range is inverted: lo 2 > hi 1"
        );
        assert_eq!(
            NoiseError::GridTooLarge {
                width: 3,
                height: 4
            }
            .to_string(),
            "Grid of 3x4 samples is too large"
        );
        assert_eq!(
            NoiseError::NegativePersistence(-1.0).to_string(),
            "Persistence must not be negative, got -1"
        );
    }
}
