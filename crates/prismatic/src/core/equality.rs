use super::{clamp01, clamp_to, wrap_degrees, ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two floating point numbers are within the
/// given tolerance of each other.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

/// Test macro for asserting that two color coordinate arrays describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates for the color space, reduces resolution, and drops the sign of
/// negative zeros before comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use {assert_same_coordinates, assert_within};

// --------------------------------------------------------------------------------------------------------------------

/// The upper bounds of XYZ coordinates.
pub(crate) const XYZ_BOUNDS: [Float; 3] = [0.9505, 1.0, 1.089];

/// Normalize the color coordinates.
///
/// This function establishes the invariants of the given color space:
///
///   * RGB clamps all coordinates to `0..=1`.
///   * HSB rounds the hue to whole degrees and wraps it into `0..360`, while
///     clamping saturation and brightness to `0..=1`.
///   * HSL wraps the hue into `0..360`, while clamping saturation and
///     lightness to `0..=1`.
///   * Lab only replaces not-a-numbers with zero.
///   * XYZ clamps coordinates to the bounds of the D65 white reference.
///
/// In all cases, not-a-number coordinates become zero.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;

    match space {
        ColorSpace::Rgb => [clamp01(c1), clamp01(c2), clamp01(c3)],
        ColorSpace::Hsb => [wrap_degrees(c1.round()), clamp01(c2), clamp01(c3)],
        ColorSpace::Hsl => [wrap_degrees(c1), clamp01(c2), clamp01(c3)],
        ColorSpace::Lab => [zero_nan(c1), zero_nan(c2), zero_nan(c3)],
        ColorSpace::Xyz => {
            let [x, y, z] = XYZ_BOUNDS;
            [clamp_to(c1, x), clamp_to(c2, y), clamp_to(c3, z)]
        }
    }
}

#[inline]
fn zero_nan(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, c3] = normalize(space, coordinates);
    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = zero_nan(f);

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::{normalize, to_eq_bits};
    use crate::ColorSpace::*;
    use crate::Float;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Rgb, &[-1.0, 0.5, 2.0]), [0.0, 0.5, 1.0]);
        assert_eq!(normalize(Hsb, &[-10.4, 1.5, -0.5]), [350.0, 1.0, 0.0]);
        assert_eq!(normalize(Hsb, &[359.6, 0.5, 0.5]), [0.0, 0.5, 0.5]);
        assert_eq!(normalize(Hsl, &[370.0, 0.2, 0.3]), [10.0, 0.2, 0.3]);
        assert_eq!(normalize(Lab, &[-5.0, 300.0, Float::NAN]), [-5.0, 300.0, 0.0]);
        assert_eq!(normalize(Xyz, &[2.0, 2.0, 2.0]), [0.9505, 1.0, 1.089]);
        assert_eq!(normalize(Xyz, &[-1.0, Float::NAN, 0.5]), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.31));
    }
}
