use std::str::FromStr;

use super::ColorModel;
use crate::core::{clamp01, from_byte, parse_hex, to_byte, to_eq_bits, ColorSpace};
use crate::error::ColorFormatError;
use crate::{Color, Float};

/// An RGB color with alpha.
///
/// All four channels are clamped to `0..=1` on construction and on every
/// write through a setter. Alpha defaults to one, i.e., opaque.
///
/// Besides coordinates, an RGB color can be created from and encoded as
/// 24-bit channels, packed integers, and hexadecimal strings. All encodings
/// quantize with [`to_byte`](crate::to_byte), so that colors created from
/// integer channels survive a round trip unchanged:
///
/// ```
/// # use prismatic::model::Rgb;
/// let orange = Rgb::from_packed_argb(0xcc_ff_93_00);
/// assert_eq!(orange.to_packed_argb(), 0xcc_ff_93_00);
/// assert_eq!(orange.to_packed_rgb(), 0xff_93_00);
/// assert_eq!(orange.to_hex_with_alpha(), "#CCFF9300");
/// assert_eq!(orange.to_hex(), "#FF9300");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Rgb {
    r: Float,
    g: Float,
    b: Float,
    a: Float,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a new opaque RGB color.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a new RGB color with the given alpha.
    pub fn rgba(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            a: clamp01(a),
        }
    }

    /// Create a new opaque RGB color from 0–255 integer channels.
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_24bit_with_alpha(r, g, b, 0xff)
    }

    /// Create a new RGB color from 0–255 integer channels including alpha.
    pub fn from_24bit_with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: from_byte(r),
            g: from_byte(g),
            b: from_byte(b),
            a: from_byte(a),
        }
    }

    /// Parse a hexadecimal color.
    ///
    /// This function accepts `#RGB`, `#RRGGBB`, and `#AARRGGBB`. The leading
    /// `#` is optional and surrounding white space is ignored.
    ///
    /// ```
    /// # use prismatic::model::Rgb;
    /// # use prismatic::error::ColorFormatError;
    /// assert_eq!(Rgb::from_hex("#FF0000")?, Rgb::new(1.0, 0.0, 0.0));
    /// assert_eq!(Rgb::from_hex("  0f0 ")?, Rgb::new(0.0, 1.0, 0.0));
    /// assert_eq!(Rgb::from_hex("#FF00"), Err(ColorFormatError::UnexpectedLength));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let ([r, g, b], a) = parse_hex(s)?;
        Ok(Self::from_24bit_with_alpha(r, g, b, a))
    }

    /// Create a new opaque RGB color from a packed `0xRRGGBB` integer.
    ///
    /// The most significant byte is ignored.
    pub fn from_packed_rgb(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self::from_24bit(r, g, b)
    }

    /// Create a new RGB color from a packed `0xAARRGGBB` integer.
    pub fn from_packed_argb(value: u32) -> Self {
        let [a, r, g, b] = value.to_be_bytes();
        Self::from_24bit_with_alpha(r, g, b, a)
    }

    /// Create a copy of this color with the given alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            a: clamp01(alpha),
            ..*self
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red channel.
    #[inline]
    pub fn r(&self) -> Float {
        self.r
    }

    /// Access the green channel.
    #[inline]
    pub fn g(&self) -> Float {
        self.g
    }

    /// Access the blue channel.
    #[inline]
    pub fn b(&self) -> Float {
        self.b
    }

    /// Access the alpha channel.
    #[inline]
    pub fn a(&self) -> Float {
        self.a
    }

    /// Update the red channel, clamping it to `0..=1`.
    pub fn set_r(&mut self, value: Float) {
        self.r = clamp01(value);
    }

    /// Update the green channel, clamping it to `0..=1`.
    pub fn set_g(&mut self, value: Float) {
        self.g = clamp01(value);
    }

    /// Update the blue channel, clamping it to `0..=1`.
    pub fn set_b(&mut self, value: Float) {
        self.b = clamp01(value);
    }

    /// Update the alpha channel, clamping it to `0..=1`.
    pub fn set_a(&mut self, value: Float) {
        self.a = clamp01(value);
    }

    /// Access the red, green, and blue coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Quantize the red, green, and blue channels to bytes.
    pub fn to_24bit(&self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Pack the red, green, and blue channels into a `0xRRGGBB` integer.
    pub fn to_packed_rgb(&self) -> u32 {
        let [r, g, b] = self.to_24bit();
        u32::from_be_bytes([0, r, g, b])
    }

    /// Pack all four channels into a `0xAARRGGBB` integer.
    pub fn to_packed_argb(&self) -> u32 {
        let [r, g, b] = self.to_24bit();
        u32::from_be_bytes([to_byte(self.a), r, g, b])
    }

    /// Update the red, green, and blue channels from a packed `0xRRGGBB`
    /// integer. Alpha remains unchanged.
    pub fn set_packed_rgb(&mut self, value: u32) {
        *self = Self::from_packed_rgb(value).with_alpha(self.a);
    }

    /// Update all four channels from a packed `0xAARRGGBB` integer.
    pub fn set_packed_argb(&mut self, value: u32) {
        *self = Self::from_packed_argb(value);
    }

    /// Format this color in `#RRGGBB` notation.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Format this color in `#AARRGGBB` notation.
    pub fn to_hex_with_alpha(&self) -> String {
        format!("#{:08X}", self.to_packed_argb())
    }
}

impl ColorModel for Rgb {
    fn to_color(&self) -> Color {
        Color::new(ColorSpace::Rgb, self.coordinates()).with_alpha(self.a)
    }

    fn from_color(color: &Color) -> Self {
        let [r, g, b] = color.to(ColorSpace::Rgb).coordinates();
        Self {
            r,
            g,
            b,
            a: color.alpha(),
        }
    }

    #[inline]
    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    #[inline]
    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl Default for Rgb {
    /// Create opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        value.to_color()
    }
}

impl From<&Color> for Rgb {
    fn from(value: &Color) -> Self {
        Rgb::from_color(value)
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl PartialEq for Rgb {
    /// Compare all four channels after rounding.
    fn eq(&self, other: &Self) -> bool {
        self.to_eq_channels() == other.to_eq_channels()
    }
}

impl Eq for Rgb {}

impl std::hash::Hash for Rgb {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_eq_channels().hash(state);
    }
}

impl Rgb {
    fn to_eq_channels(&self) -> [crate::Bits; 4] {
        [
            to_eq_bits(self.r),
            to_eq_bits(self.g),
            to_eq_bits(self.b),
            to_eq_bits(self.a),
        ]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_color(), f)
    }
}

// ====================================================================================================================
