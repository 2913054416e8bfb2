#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported color spaces.
///
/// # RGB
///
/// [RGB](https://en.wikipedia.org/wiki/SRGB) is gamma-encoded sRGB and serves
/// as the hub of all conversions: Every conversion between two different color
/// spaces first projects the color into RGB and then re-projects it into the
/// target space. All three coordinates as well as alpha range `0..=1`.
///
/// # HSB and HSL
///
/// [HSB (also HSV) and HSL](https://en.wikipedia.org/wiki/HSL_and_HSV) are
/// cylindrical re-arrangements of RGB. Both share the same hue in degrees,
/// which wraps into `0..360`. Saturation and brightness (for HSB) or lightness
/// (for HSL) range `0..=1`. HSB rounds its hue to whole degrees, whereas HSL
/// retains its full precision.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) is the CIE 1931
/// color space with the D65 standard illuminant, scaled so that the white
/// reference has Y = 1. Coordinates are clamped to the white reference's
/// bounds, i.e., X to `0..=0.9505`, Y to `0..=1`, and Z to `0..=1.089`.
///
/// # Lab
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) is derived from
/// XYZ relative to the same D65 white reference. Lightness L ranges `0..=100`,
/// while a and b have no set limits but in practice stay within
/// `-128..=128`. Lab coordinates are not clamped.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prismatic")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsb,
    Hsl,
    Lab,
    Xyz,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar, i.e., has a hue.
    ///
    /// HSB and HSL are the only polar color spaces. Their first coordinate is
    /// the hue in degrees.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsb | Self::Hsl)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Rgb => "RGB",
            Hsb => "HSB",
            Hsl => "HSL",
            Lab => "CIELAB",
            Xyz => "XYZ D65",
        };

        f.write_str(s)
    }
}
