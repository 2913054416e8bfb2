use super::impl_color_value;
use crate::core::{normalize, ColorSpace, WHITE_REFERENCE, XYZ_BOUNDS};
use crate::Float;

/// A CIELAB color.
///
/// Coordinates are not clamped. Conversions from other color spaces yield a
/// non-negative lightness `L` that typically tops out at 100, with `a` and `b`
/// roughly within `-128..=128`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lab {
    l: Float,
    a: Float,
    b: Float,
}

impl Lab {
    /// Create a new CIELAB color.
    pub fn new(l: Float, a: Float, b: Float) -> Self {
        let [l, a, b] = normalize(ColorSpace::Lab, &[l, a, b]);
        Self { l, a, b }
    }

    /// Access the lightness.
    #[inline]
    pub fn l(&self) -> Float {
        self.l
    }

    /// Access the green-red axis.
    #[inline]
    pub fn a(&self) -> Float {
        self.a
    }

    /// Access the blue-yellow axis.
    #[inline]
    pub fn b(&self) -> Float {
        self.b
    }

    /// Update the lightness.
    pub fn set_l(&mut self, value: Float) {
        *self = Self::new(value, self.a, self.b);
    }

    /// Update the green-red axis.
    pub fn set_a(&mut self, value: Float) {
        *self = Self::new(self.l, value, self.b);
    }

    /// Update the blue-yellow axis.
    pub fn set_b(&mut self, value: Float) {
        *self = Self::new(self.l, self.a, value);
    }
}

impl_color_value!(Lab, crate::ColorSpace::Lab, [l, a, b]);

// --------------------------------------------------------------------------------------------------------------------

/// An XYZ color relative to the D65 illuminant.
///
/// Coordinates are clamped to the bounds of the white reference, i.e.,
/// [`Xyz::MAX`].
///
/// ```
/// # use prismatic::model::Xyz;
/// let xyz = Xyz::new(2.0, -1.0, 0.5);
/// assert_eq!(xyz.coordinates(), [0.9505, 0.0, 0.5]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Xyz {
    x: Float,
    y: Float,
    z: Float,
}

impl Xyz {
    /// The D65 white point.
    pub const WHITE_REFERENCE: Xyz = Xyz {
        x: WHITE_REFERENCE[0],
        y: WHITE_REFERENCE[1],
        z: WHITE_REFERENCE[2],
    };

    /// The largest coordinates.
    pub const MAX: Xyz = Xyz {
        x: XYZ_BOUNDS[0],
        y: XYZ_BOUNDS[1],
        z: XYZ_BOUNDS[2],
    };

    /// Create a new XYZ color.
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        let [x, y, z] = normalize(ColorSpace::Xyz, &[x, y, z]);
        Self { x, y, z }
    }

    /// Access the X coordinate.
    #[inline]
    pub fn x(&self) -> Float {
        self.x
    }

    /// Access the Y coordinate, i.e., the luminance.
    #[inline]
    pub fn y(&self) -> Float {
        self.y
    }

    /// Access the Z coordinate.
    #[inline]
    pub fn z(&self) -> Float {
        self.z
    }

    /// Update the X coordinate, clamping it to `0..=0.9505`.
    pub fn set_x(&mut self, value: Float) {
        *self = Self::new(value, self.y, self.z);
    }

    /// Update the Y coordinate, clamping it to `0..=1`.
    pub fn set_y(&mut self, value: Float) {
        *self = Self::new(self.x, value, self.z);
    }

    /// Update the Z coordinate, clamping it to `0..=1.089`.
    pub fn set_z(&mut self, value: Float) {
        *self = Self::new(self.x, self.y, value);
    }
}

impl_color_value!(Xyz, crate::ColorSpace::Xyz, [x, y, z]);

#[cfg(test)]
mod test {
    use super::{Lab, Xyz};
    use crate::core::assert_within;
    use crate::model::{ColorModel, Rgb};
    use crate::Float;

    #[test]
    fn test_lab() {
        let mut lab = Lab::new(-5.0, 300.0, Float::NAN);
        assert_eq!(lab.coordinates(), [-5.0, 300.0, 0.0]);
        lab.set_l(50.0);
        lab.set_a(-20.0);
        lab.set_b(Float::NAN);
        assert_eq!(lab.coordinates(), [50.0, -20.0, 0.0]);

        let black = Lab::from_rgb(&Rgb::BLACK);
        assert_eq!(black.l(), 0.0);
        let white = Lab::from_rgb(&Rgb::WHITE);
        assert_within!(white.l(), 100.0, 0.01);
        assert_within!(white.a(), 0.0, 0.02);
        assert_within!(white.b(), 0.0, 0.02);
    }

    #[test]
    fn test_xyz() {
        let mut xyz = Xyz::default();
        xyz.set_x(1.0);
        xyz.set_y(-1.0);
        xyz.set_z(Float::NAN);
        assert_eq!(xyz.coordinates(), [0.9505, 0.0, 0.0]);

        assert_eq!(Xyz::MAX, Xyz::new(10.0, 10.0, 10.0));
        assert_eq!(Xyz::new(0.95047, 1.0, 1.08883), Xyz::WHITE_REFERENCE);

        let white = Xyz::from_rgb(&Rgb::WHITE);
        assert_within!(white.x(), Xyz::WHITE_REFERENCE.x(), 1e-3);
        assert_within!(white.y(), 1.0, 1e-3);
        assert_within!(white.z(), Xyz::WHITE_REFERENCE.z(), 1e-3);
    }
}
