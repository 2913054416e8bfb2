use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::compare::{ColorComparison, DeltaE};
use crate::core::{
    clamp01, convert, format, from_24bit, from_byte, normalize, parse_hex, to_24bit, to_byte,
    to_eq_bits, to_eq_coordinates, ColorSpace,
};
use crate::Float;

/// A color object.
///
/// Every color object has a [color space](ColorSpace), three coordinates, and
/// an alpha channel.
///
/// # Color Coordinates
///
/// A color object is valid by construction: [`Color::new`] and all other
/// constructors normalize the coordinates for the color space. That means
/// replacing not-a-numbers with zero and, depending on the color space,
/// clamping or wrapping coordinates:
///
///   * RGB clamps all three coordinates to `0..=1`.
///   * HSB and HSL wrap the hue into `0..360` and clamp the other two
///     coordinates to `0..=1`. HSB also rounds the hue to whole degrees.
///   * CIELAB does not clamp at all.
///   * XYZ clamps each coordinate to the bounds of the D65 white reference,
///     i.e., `0..=0.9505`, `0..=1`, and `0..=1.089`.
///
/// The alpha channel is clamped to `0..=1` and defaults to one.
///
/// ## Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence this class performs the
/// following steps to prepare coordinates for either operation:
///
///   * To turn coordinates into comparable entities, replace not-a-numbers with
///     positive zero;
///   * To allow for floating point error, multiply by 1e12/1e4 and then round;
///   * To make zeros comparable, replace negative zero with positive zero (but
///     only after rounding, which may produce zeros);
///   * To convince Rust that coordinates are comparable, convert to bits.
///
/// Colors in different color spaces are never equal, even if they describe
/// the same color.
///
/// ## Coordinate Access
///
/// Rust code can access individual coordinates by indexing a color object
/// with integers `0..=2`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prismatic")
)]
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
    alpha: Float,
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// This function normalizes the coordinates for the color space. The new
    /// color is opaque.
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace};
    /// let green = Color::new(ColorSpace::Hsl, [-240.0, 1.5, 0.5]);
    /// assert_eq!(green.coordinates(), [120.0, 1.0, 0.5]);
    /// assert_eq!(green.alpha(), 1.0);
    /// ```
    #[inline]
    pub fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self {
            space,
            coordinates: normalize(space, &coordinates),
            alpha: 1.0,
        }
    }

    /// Instantiate a new RGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace};
    /// let fire_brick = Color::rgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Rgb);
    /// ```
    pub fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Rgb, [r, g, b])
    }

    /// Instantiate a new HSB color with the given hue, saturation, and
    /// brightness.
    pub fn hsb(h: Float, s: Float, b: Float) -> Self {
        Self::new(ColorSpace::Hsb, [h, s, b])
    }

    /// Instantiate a new HSL color with the given hue, saturation, and
    /// lightness.
    pub fn hsl(h: Float, s: Float, l: Float) -> Self {
        Self::new(ColorSpace::Hsl, [h, s, l])
    }

    /// Instantiate a new CIELAB color with the given lightness L, a, and b
    /// coordinates.
    pub fn lab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Lab, [l, a, b])
    }

    /// Instantiate a new XYZ color with the given X, Y, and Z coordinates.
    pub fn xyz(x: Float, y: Float, z: Float) -> Self {
        Self::new(ColorSpace::Xyz, [x, y, z])
    }

    /// Instantiate a new RGB color from its 24-bit representation.
    ///
    /// This function returns a new RGB color with the given red, green, and
    /// blue coordinates scaled by 1/255.
    ///
    /// ```
    /// # use prismatic::Color;
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, Color::rgb(1.0, 0.5764705882352941, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Rgb, from_24bit(r, g, b))
    }

    /// Create a copy of this color with the given alpha.
    ///
    /// The alpha is clamped to `0..=1`.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            alpha: clamp01(alpha),
            ..self.clone()
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace};
    /// let aqua = Color::lab(66.0, -20.0, -30.0);
    /// assert_eq!(aqua.space(), ColorSpace::Lab);
    /// ```
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha channel.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// If the target color space is this color's space, this method returns a
    /// copy of this color. Otherwise, it converts the coordinates to RGB, the
    /// hub of all conversions, and then to the target color space. The result
    /// retains this color's alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace};
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.to(ColorSpace::Hsl), Color::hsl(0.0, 1.0, 0.5));
    /// assert_eq!(red.to(ColorSpace::Hsb), Color::hsb(0.0, 1.0, 1.0));
    /// assert_eq!(red.to(ColorSpace::Rgb), red);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        if self.space == target {
            return self.clone();
        }

        Self {
            space: target,
            coordinates: convert(self.space, target, &self.coordinates),
            alpha: self.alpha,
        }
    }

    /// Compute the distance between this and the other color.
    ///
    /// The two colors may be in different color spaces. The result is
    /// non-negative and zero for a color and itself.
    ///
    /// ```
    /// # use prismatic::{Color, DeltaE};
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// let also_red = Color::hsl(0.0, 1.0, 0.5);
    /// assert!(red.distance(&also_red, DeltaE::CieDe2000) < 1e-2);
    /// assert!(red.distance(&Color::rgb(0.0, 0.0, 1.0), DeltaE::Cie76) > 100.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self, strategy: DeltaE) -> Float {
        strategy.compare(self, other)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to RGB and then quantizes each
    /// coordinate with [`to_byte`](crate::to_byte).
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(self.space, &self.coordinates)
    }

    /// Format this color in `#RRGGBB` hexadecimal notation.
    ///
    /// ```
    /// # use prismatic::Color;
    /// assert_eq!(Color::hsl(0.0, 1.0, 0.5).to_hex(), "#FF0000");
    /// assert_eq!(Color::from_24bit(0x31, 0x78, 0xea).to_hex(), "#3178EA");
    /// ```
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Format this color in `#AARRGGBB` hexadecimal notation.
    ///
    /// ```
    /// # use prismatic::Color;
    /// let ghost = Color::rgb(1.0, 1.0, 1.0).with_alpha(0.5);
    /// assert_eq!(ghost.to_hex_with_alpha(), "#80FFFFFF");
    /// ```
    pub fn to_hex_with_alpha(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02X}{:02X}{:02X}{:02X}", to_byte(self.alpha), r, g, b)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Color {
    /// Instantiate a new color with the given color space and coordinates. <i
    /// class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (space, coordinates, alpha = 1.0))]
    pub fn py_new(space: ColorSpace, coordinates: [Float; 3], alpha: Float) -> Self {
        Self::new(space, coordinates).with_alpha(alpha)
    }

    /// Parse a color from its hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "parse")]
    pub fn py_parse(s: &str) -> Result<Color, crate::error::ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new RGB color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "rgb")]
    pub fn py_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::rgb(r, g, b)
    }

    /// Instantiate a new HSB color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "hsb")]
    pub fn py_hsb(h: Float, s: Float, b: Float) -> Self {
        Self::hsb(h, s, b)
    }

    /// Instantiate a new HSL color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "hsl")]
    pub fn py_hsl(h: Float, s: Float, l: Float) -> Self {
        Self::hsl(h, s, l)
    }

    /// Instantiate a new CIELAB color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "lab")]
    pub fn py_lab(l: Float, a: Float, b: Float) -> Self {
        Self::lab(l, a, b)
    }

    /// Instantiate a new XYZ color. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "xyz")]
    pub fn py_xyz(x: Float, y: Float, z: Float) -> Self {
        Self::xyz(x, y, z)
    }

    /// Instantiate a new RGB color from its 24-bit representation. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_24bit")]
    pub fn py_from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_24bit(r, g, b)
    }

    /// Create a copy with the given alpha. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "with_alpha")]
    pub fn py_with_alpha(&self, alpha: Float) -> Self {
        self.with_alpha(alpha)
    }

    /// Access the color space. <i class=python-only>Python only!</i>
    #[pyo3(name = "space")]
    pub fn py_space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "coordinates")]
    pub fn py_coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha channel. <i class=python-only>Python only!</i>
    #[pyo3(name = "alpha")]
    pub fn py_alpha(&self) -> Float {
        self.alpha
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        3
    }

    /// Read coordinates by index. <i class=python-only>Python only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -3..=-1 => Ok(self.coordinates[(3 + index) as usize]),
            0..=2 => Ok(self.coordinates[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this color to the target color space. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "to")]
    pub fn py_to(&self, target: ColorSpace) -> Self {
        self.to(target)
    }

    /// Compute the distance to the other color. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "distance", signature = (other, strategy = DeltaE::CieDe2000))]
    pub fn py_distance(&self, other: &Self, strategy: DeltaE) -> Float {
        self.distance(other, strategy)
    }

    /// Find the index of the closest candidate. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "find_closest", signature = (candidates, strategy = DeltaE::CieDe2000))]
    pub fn py_find_closest(&self, candidates: Vec<Color>, strategy: DeltaE) -> Option<usize> {
        use crate::ColorExt;
        self.find_closest(&candidates, &strategy)
    }

    /// Mix this color with the other color. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "mix", signature = (other, weight = 0.5))]
    pub fn py_mix(&self, other: &Self, weight: Float) -> Self {
        use crate::ColorExt;
        self.mix_as(other, weight)
    }

    /// Adjust the hue by the given degrees. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "adjust_hue")]
    pub fn py_adjust_hue(&self, degrees: Float) -> Self {
        use crate::ColorExt;
        self.adjust_hue_as(degrees)
    }

    /// Lighten this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "lighten", signature = (amount = 0.2))]
    pub fn py_lighten(&self, amount: Float) -> Self {
        use crate::ColorExt;
        self.lighten_as(amount)
    }

    /// Darken this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "darken", signature = (amount = 0.2))]
    pub fn py_darken(&self, amount: Float) -> Self {
        use crate::ColorExt;
        self.darken_as(amount)
    }

    /// Compute the relative luminance. <i class=python-only>Python only!</i>
    #[pyo3(name = "relative_luminance")]
    pub fn py_relative_luminance(&self) -> Float {
        use crate::ColorExt;
        self.relative_luminance()
    }

    /// Compute the contrast ratio with the other color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "contrast_ratio")]
    pub fn py_contrast_ratio(&self, other: &Self) -> Float {
        use crate::ColorExt;
        self.contrast_ratio(other)
    }

    /// Determine whether this color is dark. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "is_dark")]
    pub fn py_is_dark(&self) -> bool {
        use crate::ColorExt;
        self.is_dark()
    }

    /// Determine whether this color is distinct from the other color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "is_distinct")]
    pub fn py_is_distinct(&self, other: &Self) -> bool {
        use crate::ColorExt;
        self.is_distinct(other)
    }

    /// Determine whether this color contrasts with the other color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "is_contrasting")]
    pub fn py_is_contrasting(&self, other: &Self) -> bool {
        use crate::ColorExt;
        self.is_contrasting(other)
    }

    /// Format this color in `#RRGGBB` notation. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> String {
        self.to_hex()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its (CSS-like) string representation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Default for Color {
    /// Create an instance of the default color, which is opaque black in RGB.
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace};
    /// let default = Color::default();
    /// assert_eq!(default.space(), ColorSpace::Rgb);
    /// assert_eq!(default.coordinates(), [0.0, 0.0, 0.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Rgb, [0.0, 0.0, 0.0])
    }
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate an RGB color from its hexadecimal representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space as well as an optional leading `#`. The remaining
    /// hexadecimal digits are case-insensitive. This method recognizes three
    /// notations:
    ///
    ///   * `RGB` with one digit per coordinate, which is repeated, i.e., `#123`
    ///     is the same as `#112233`;
    ///   * `RRGGBB` with two digits per coordinate;
    ///   * `AARRGGBB` with two digits for alpha followed by two digits per
    ///     coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace};
    /// # use prismatic::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let red = Color::from_str("#FF0000")?;
    /// assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
    ///
    /// let ghost: Color = str::parse("#80FFFFFF")?;
    /// assert_eq!(ghost.alpha(), 128.0 / 255.0);
    ///
    /// assert_eq!(Color::from_str("#FFFF"), Err(ColorFormatError::UnexpectedLength));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ([r, g, b], a) = parse_hex(s)?;
        Ok(Self::from_24bit(r, g, b).with_alpha(from_byte(a)))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prismatic::Color;
    /// let purple = Color::rgb(0.5, 0.4, 0.75);
    /// assert_eq!(purple[2], 0.75);
    /// ```
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
        to_eq_bits(self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both colors must have the same color space. Their coordinates and
    /// alphas are compared after normalization and rounding, which also is how
    /// [`Color`] hashes them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prismatic::{Color, Float};
    /// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
    /// assert_eq!(
    ///     Color::rgb(Float::NAN, 4.0 * delta, 0.12 + delta),
    ///     Color::rgb(0.0,        5.0 * delta, 0.12        )
    /// );
    ///
    /// assert_eq!(Color::hsl(665.0, 0.1, 0.5), Color::hsl(305.0, 0.1, 0.5));
    /// assert_ne!(Color::rgb(1.0, 0.0, 0.0), Color::hsl(0.0, 1.0, 0.5));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space || to_eq_bits(self.alpha) != to_eq_bits(other.alpha) {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}], {})",
            self.space, c1, c2, c3, self.alpha
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in a CSS-like function syntax with three
    /// space-separated coordinates. It uses `color(srgb ...)` for RGB,
    /// `hsb(...)` for HSB, `hsl(...)` for HSL, `lab(...)` for CIELAB, and
    /// `color(xyz-d65 ...)` for XYZ. If the color is not opaque, it appends
    /// the alpha after a slash. It respects the formatter's precision,
    /// defaulting to 5 digits past the decimal, with hues using 2 digits less.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prismatic::{Color, ColorSpace::*};
    /// # use prismatic::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(format!("{:.3}", lime.to(Hsl)), "hsl(135.9 0.353 0.727)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let alpha = if self.is_opaque() {
            None
        } else {
            Some(self.alpha)
        };
        format(self.space, &self.coordinates, alpha, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::ColorFormatError;
    use crate::{ColorSpace::*, Float};
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_normalization() {
        let color = Color::new(Rgb, [-1.0, Float::NAN, 7.0]);
        assert_eq!(color.coordinates(), [0.0, 0.0, 1.0]);

        let color = Color::hsb(-10.4, 2.0, -2.0);
        assert_eq!(color.coordinates(), [350.0, 1.0, 0.0]);

        let color = Color::xyz(1.0, 1.0, 1.5);
        assert_eq!(color.coordinates(), [0.9505, 1.0, 1.089]);

        let color = Color::lab(-5.0, 200.0, -300.0);
        assert_eq!(color.coordinates(), [-5.0, 200.0, -300.0]);

        assert_eq!(Color::rgb(0.0, 0.0, 0.0).with_alpha(7.0).alpha(), 1.0);
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).with_alpha(-7.0).alpha(), 0.0);
    }

    #[test]
    fn test_conversion() {
        let red = Color::rgb(1.0, 0.0, 0.0).with_alpha(0.25);
        let hsl = red.to(Hsl);
        assert_eq!(hsl, Color::hsl(0.0, 1.0, 0.5).with_alpha(0.25));
        assert_eq!(hsl.to(Rgb), red);

        // Lab goes through XYZ and back.
        let lab = red.to(Lab);
        assert_eq!(lab.space(), Lab);
        assert_eq!(lab.to(Rgb).to_24bit(), [0xff, 0, 0]);
    }

    #[test]
    fn test_hex() -> Result<(), ColorFormatError> {
        let red = Color::from_str("#FF0000")?;
        assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(red.alpha(), 1.0);
        assert_eq!(red.to_hex(), "#FF0000");
        assert_eq!(red.to_hex_with_alpha(), "#FFFF0000");

        let translucent = Color::try_from("#80FF0000")?;
        assert_eq!(translucent.to_24bit(), [0xff, 0, 0]);
        assert!((translucent.alpha() - 0.5).abs() < 0.01);
        assert_eq!(translucent.to_hex_with_alpha(), "#80FF0000");

        assert_eq!(
            Color::try_from(String::from("#12")),
            Err(ColorFormatError::UnexpectedLength)
        );

        Ok(())
    }

    #[test]
    fn test_equality() {
        let mut set = HashSet::new();
        set.insert(Color::hsl(370.0, 0.5, 0.5));
        assert!(set.contains(&Color::hsl(10.0, 0.5, 0.5)));
        assert!(!set.contains(&Color::hsl(10.0, 0.5, 0.5).with_alpha(0.5)));
        assert!(!set.contains(&Color::hsb(10.0, 0.5, 0.5)));
    }
}
