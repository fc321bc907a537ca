//! Small numeric helpers shared by the noise evaluators.

/// Floors `x` to an `i32`.
///
/// Truncates toward zero and steps down by one for negative non-integers, which is
/// the mathematical floor for every finite input inside the `i32` range. Outside
/// that range (and for NaN) the result saturates instead of panicking.
#[inline]
#[must_use]
pub const fn fast_floor(x: f32) -> i32 {
    let truncated = x as i32;
    if x < truncated as f32 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Maps `value` from `[-1, 1]` onto `[lo, hi]`.
///
/// Evaluated as `value * (hi - lo) / 2 + (hi + lo) / 2`. The result is not clamped,
/// so inputs slightly outside `[-1, 1]` land slightly outside `[lo, hi]`.
#[inline]
#[must_use]
pub const fn remap(value: f32, lo: f32, hi: f32) -> f32 {
    value * (hi - lo) / 2.0 + (hi + lo) / 2.0
}
