//! Math utility functions.

use num_traits::{Float, NumCast};

/// Round to the nearest whole number, halves away from zero.
///
/// Negative zero is collapsed to zero so it never displays as `-0`.
pub fn round<T: Float>(value: T) -> T {
    value.round() + T::zero()
}

/// Convert a channel value in [0, 255] to `u8`, rounding and clamping values
/// outside the range.
pub fn to_channel<T: Float>(value: T) -> u8 {
    let max = T::from(u8::MAX).unwrap_or_else(T::max_value);
    let clamped = round(value).max(T::zero()).min(max);
    <u8 as NumCast>::from(clamped).unwrap_or(0)
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::one);
    let hue = hue % full;
    if hue < T::zero() {
        hue + full
    } else {
        hue
    }
}
