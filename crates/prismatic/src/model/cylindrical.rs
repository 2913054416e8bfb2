use super::impl_color_value;
use crate::core::{normalize, ColorSpace};
use crate::Float;

/// An HSB (a.k.a. HSV) color.
///
/// The hue is rounded to whole degrees and wrapped into `0..360`. Saturation
/// and brightness are clamped to `0..=1`.
///
/// ```
/// # use prismatic::model::Hsb;
/// let hsb = Hsb::new(-89.6, 1.5, 0.5);
/// assert_eq!(hsb.coordinates(), [270.0, 1.0, 0.5]);
/// assert_eq!(Hsb::from_percent(270.0, 100.0, 50.0), hsb);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Hsb {
    h: Float,
    s: Float,
    b: Float,
}

impl Hsb {
    /// Create a new HSB color.
    pub fn new(h: Float, s: Float, b: Float) -> Self {
        let [h, s, b] = normalize(ColorSpace::Hsb, &[h, s, b]);
        Self { h, s, b }
    }

    /// Create a new HSB color from degrees and percentages.
    ///
    /// Saturation and brightness range `0..=100`.
    pub fn from_percent(h: Float, s: Float, b: Float) -> Self {
        Self::new(h, s / 100.0, b / 100.0)
    }

    /// Access the hue.
    #[inline]
    pub fn h(&self) -> Float {
        self.h
    }

    /// Access the saturation.
    #[inline]
    pub fn s(&self) -> Float {
        self.s
    }

    /// Access the brightness.
    #[inline]
    pub fn b(&self) -> Float {
        self.b
    }

    /// Update the hue, rounding and wrapping it.
    pub fn set_h(&mut self, value: Float) {
        *self = Self::new(value, self.s, self.b);
    }

    /// Update the saturation, clamping it.
    pub fn set_s(&mut self, value: Float) {
        *self = Self::new(self.h, value, self.b);
    }

    /// Update the brightness, clamping it.
    pub fn set_b(&mut self, value: Float) {
        *self = Self::new(self.h, self.s, value);
    }
}

impl_color_value!(Hsb, crate::ColorSpace::Hsb, [h, s, b]);

// --------------------------------------------------------------------------------------------------------------------

/// An HSL color.
///
/// The hue is wrapped into `0..360`. Saturation and lightness are clamped to
/// `0..=1`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Hsl {
    h: Float,
    s: Float,
    l: Float,
}

impl Hsl {
    /// Create a new HSL color.
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        let [h, s, l] = normalize(ColorSpace::Hsl, &[h, s, l]);
        Self { h, s, l }
    }

    /// Access the hue.
    #[inline]
    pub fn h(&self) -> Float {
        self.h
    }

    /// Access the saturation.
    #[inline]
    pub fn s(&self) -> Float {
        self.s
    }

    /// Access the lightness.
    #[inline]
    pub fn l(&self) -> Float {
        self.l
    }

    /// Update the hue, wrapping it.
    pub fn set_h(&mut self, value: Float) {
        *self = Self::new(value, self.s, self.l);
    }

    /// Update the saturation, clamping it.
    pub fn set_s(&mut self, value: Float) {
        *self = Self::new(self.h, value, self.l);
    }

    /// Update the lightness, clamping it.
    pub fn set_l(&mut self, value: Float) {
        *self = Self::new(self.h, self.s, value);
    }
}

impl_color_value!(Hsl, crate::ColorSpace::Hsl, [h, s, l]);

#[cfg(test)]
mod test {
    use super::{Hsb, Hsl};
    use crate::model::{ColorModel, Rgb};
    use crate::Float;
    use std::collections::HashSet;

    #[test]
    fn test_hsb() {
        let mut hsb = Hsb::new(400.4, -1.0, 2.0);
        assert_eq!(hsb.coordinates(), [40.0, 0.0, 1.0]);

        hsb.set_h(-0.4);
        assert_eq!(hsb.h(), 0.0);
        hsb.set_h(-10.0);
        assert_eq!(hsb.h(), 350.0);
        hsb.set_s(0.5);
        hsb.set_b(Float::NAN);
        assert_eq!(hsb.coordinates(), [350.0, 0.5, 0.0]);

        assert_eq!(Hsb::from_rgb(&Rgb::BLACK), Hsb::new(0.0, 0.0, 0.0));
        let gray = Hsb::from_rgb(&Rgb::new(0.5, 0.5, 0.5 + 1e-10));
        assert_eq!([gray.h(), gray.s()], [0.0, 0.0]);

        hsb.set_h(Float::NEG_INFINITY);
        assert_eq!(hsb.h(), 0.0);
        assert_eq!(Hsb::from_rgb(&Rgb::new(0.0, 0.0, 1.0)), Hsb::new(240.0, 1.0, 1.0));
    }

    #[test]
    fn test_hsl() {
        let mut hsl = Hsl::new(-10.0, 0.5, 0.5);
        assert_eq!(hsl.h(), 350.0);
        assert_eq!(Hsl::new(Float::INFINITY, 0.5, 0.5).h(), 0.0);

        hsl.set_h(370.5);
        assert_eq!(hsl.h(), 10.5);
        hsl.set_s(3.0);
        hsl.set_l(-3.0);
        assert_eq!(hsl.coordinates(), [10.5, 1.0, 0.0]);

        let red = Rgb::new(1.0, 0.0, 0.0);
        let hsl = Hsl::from_rgb(&red);
        assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(hsl.to_rgb(), red);

        // Achromatic colors have zero hue and saturation.
        let gray = Hsl::from_rgb(&Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(gray.coordinates(), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_hash() {
        let mut set = HashSet::new();
        set.insert(Hsl::new(720.0, 0.5, 0.25));
        assert!(set.contains(&Hsl::new(0.0, 0.5, 0.25)));
        assert!(!set.contains(&Hsl::new(0.0, 0.5, 0.26)));
        assert_eq!(format!("{}", Hsl::new(120.0, 1.0, 0.5)), "hsl(120 1 0.5)");
    }
}
