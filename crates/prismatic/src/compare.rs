//! Pluggable strategies for comparing colors.
//!
//! A [`ColorComparison`] computes the distance between two colors, which may
//! be in different color spaces. The distance is non-negative and zero when
//! comparing a color with itself. Symmetry is not required. The stock
//! strategies in [`DeltaE`] both measure distance in CIELAB. Closures taking
//! two colors and returning a [`Float`] are strategies, too.
//!
//! ```
//! # use prismatic::{Color, ColorComparison, DeltaE};
//! let red = Color::rgb(1.0, 0.0, 0.0);
//! let rose = Color::rgb(1.0, 0.5, 0.5);
//!
//! let delta_e = DeltaE::default().compare(&red, &rose);
//! assert!(delta_e > 0.0);
//!
//! let green_only = |a: &Color, b: &Color| (a[1] - b[1]).abs();
//! assert_eq!(green_only.compare(&red, &rose), 0.5);
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{delta_e_2000, delta_e_76, ColorSpace};
use crate::{Color, Float};

/// A strategy for computing the distance between two colors.
pub trait ColorComparison {
    /// Compute the distance between the two colors.
    fn compare(&self, color1: &Color, color2: &Color) -> Float;
}

impl<F> ColorComparison for F
where
    F: Fn(&Color, &Color) -> Float,
{
    #[inline]
    fn compare(&self, color1: &Color, color2: &Color) -> Float {
        self(color1, color2)
    }
}

/// The stock color difference metrics.
///
/// Both metrics convert the two colors to CIELAB before comparing them.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prismatic")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaE {
    /// The CIE 1976 color difference, which is the Euclidian distance in
    /// CIELAB.
    Cie76,
    /// The CIEDE2000 color difference, which corrects CIE76 for perceptual
    /// non-uniformities in lightness, chroma, and hue.
    #[default]
    CieDe2000,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl DeltaE {
    /// Compute the distance between the two colors with this metric. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "compare")]
    pub fn py_compare(&self, color1: &Color, color2: &Color) -> Float {
        self.compare(color1, color2)
    }
}

impl ColorComparison for DeltaE {
    fn compare(&self, color1: &Color, color2: &Color) -> Float {
        let lab1 = color1.to(ColorSpace::Lab);
        let lab2 = color2.to(ColorSpace::Lab);

        match self {
            Self::Cie76 => delta_e_76(lab1.as_ref(), lab2.as_ref()),
            Self::CieDe2000 => delta_e_2000(lab1.as_ref(), lab2.as_ref()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ColorComparison, DeltaE};
    use crate::{Color, Float};

    #[test]
    fn test_identity() {
        let colors = [
            Color::rgb(0.2, 0.4, 0.6),
            Color::hsb(200.0, 0.5, 0.5),
            Color::hsl(20.0, 0.9, 0.3),
            Color::lab(60.0, -30.0, 25.0),
            Color::xyz(0.3, 0.2, 0.1),
        ];

        for color in &colors {
            assert_eq!(DeltaE::Cie76.compare(color, color), 0.0);
            assert_eq!(DeltaE::CieDe2000.compare(color, color), 0.0);
        }
    }

    #[test]
    fn test_strategies() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);

        let d76 = DeltaE::Cie76.compare(&black, &white);
        assert!((d76 - 100.0).abs() < 0.01, "{}", d76);

        let d00 = DeltaE::CieDe2000.compare(&black, &white);
        assert!((d00 - 100.0).abs() < 0.01, "{}", d00);

        // Lightness differences dominate both metrics.
        let lighter = Color::lab(60.0, 0.0, 0.0);
        let darker = Color::lab(50.0, 0.0, 0.0);
        assert!(DeltaE::Cie76.compare(&lighter, &darker) > 9.9);

        // Asymmetric strategies are legal.
        let left_biased = |a: &Color, b: &Color| -> Float { (a[0] - b[0]).max(0.0) };
        assert_eq!(left_biased.compare(&white, &black), 1.0);
        assert_eq!(left_biased.compare(&black, &white), 0.0);
    }
}
