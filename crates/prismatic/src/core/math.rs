#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

/// The chroma at or below which a color counts as achromatic.
///
/// The forward conversions to HSB and HSL divide by the chroma (and HSB also
/// by the maximum channel). Both quantities are compared against this
/// threshold instead of zero, so that nearly gray colors resolve to a hue of
/// zero instead of whatever rounding noise the division amplifies.
pub(crate) const ACHROMATIC_THRESHOLD: Float = 1e-9;

// --------------------------------------------------------------------------------------------------------------------

/// Clamp the number to unit range `0..=1`.
///
/// Not-a-number clamps to zero.
///
/// # Examples
///
/// ```
/// # use prismatic::clamp01;
/// assert_eq!(clamp01(-0.5), 0.0);
/// assert_eq!(clamp01(0.25), 0.25);
/// assert_eq!(clamp01(7.0), 1.0);
/// assert_eq!(clamp01(f64::NAN), 0.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn clamp01(value: Float) -> Float {
    clamp_to(value, 1.0)
}

/// Clamp the number to range `0..=max`, with not-a-number clamping to zero.
#[inline]
pub(crate) fn clamp_to(value: Float, max: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Wrap the angle into `0..360` degrees.
///
/// This function computes `((degrees % 360) + 360) % 360`. Unlike the
/// truncating remainder, the result is never negative, so that -10º wraps to
/// 350º. The second remainder also absorbs tiny negative inputs whose sum with
/// 360 rounds up to exactly 360. Infinities and not-a-number wrap to zero.
///
/// # Examples
///
/// ```
/// # use prismatic::wrap_degrees;
/// assert_eq!(wrap_degrees(370.0), 10.0);
/// assert_eq!(wrap_degrees(-10.0), 350.0);
/// assert_eq!(wrap_degrees(720.0), 0.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn wrap_degrees(degrees: Float) -> Float {
    wrap(degrees, 360.0)
}

/// Wrap the value into `0..period`.
#[inline]
fn wrap(value: Float, period: Float) -> Float {
    if !value.is_finite() {
        0.0
    } else {
        ((value % period) + period) % period
    }
}

/// Quantize a unit-range component to a byte.
///
/// This function clamps the component to `0..=1`, scales it to `0..=255`, and
/// rounds half-up to the nearest integer. Hexadecimal and packed-integer
/// encodings both rely on it, which keeps the two consistent.
///
/// # Examples
///
/// ```
/// # use prismatic::to_byte;
/// assert_eq!(to_byte(0.0), 0);
/// assert_eq!(to_byte(0.5), 128);
/// assert_eq!(to_byte(1.0), 255);
/// assert_eq!(to_byte(3.0), 255);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn to_byte(value: Float) -> u8 {
    (clamp01(value) * 255.0 + 0.5).floor() as u8
}

/// Convert a byte into a unit-range component.
#[inline]
pub(crate) fn from_byte(value: u8) -> Float {
    value as Float / 255.0
}

#[cfg(test)]
mod test {
    use super::{clamp01, from_byte, to_byte, wrap, wrap_degrees};
    use crate::Float;

    #[test]
    fn test_clamp() {
        for value in [-1e30, -1.0, -0.0, 0.0, 0.3, 1.0, 1.5, 1e30] {
            let clamped = clamp01(value);
            assert!((0.0..=1.0).contains(&clamped), "{} clamped to {}", value, clamped);
        }
        assert_eq!(clamp01(Float::INFINITY), 1.0);
        assert_eq!(clamp01(Float::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(-370.0), 350.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(Float::NAN), 0.0);
        assert_eq!(wrap_degrees(Float::INFINITY), 0.0);
        assert_eq!(wrap_degrees(Float::NEG_INFINITY), 0.0);
        assert_eq!(wrap(-1.0, 6.0), 5.0);

        for degrees in [-1e-20, -1e-14, -359.999999, 1e9 + 0.5, -1e9] {
            let wrapped = wrap_degrees(degrees);
            assert!((0.0..360.0).contains(&wrapped), "{} wrapped to {}", degrees, wrapped);
        }
    }

    #[test]
    fn test_bytes() {
        for byte in 0..=255_u8 {
            assert_eq!(to_byte(from_byte(byte)), byte);
        }

        assert_eq!(to_byte(0.6 / 255.0), 1);
        assert_eq!(to_byte(0.4 / 255.0), 0);
        assert_eq!(to_byte(-3.0), 0);
        assert_eq!(to_byte(Float::NAN), 0);
    }
}
