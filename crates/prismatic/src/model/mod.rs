//! Typed color values for the five color spaces.
//!
//! Where [`Color`] carries its color space at runtime, the structs in this
//! module fix it at compile time: [`Rgb`] (with alpha), [`Hsb`], [`Hsl`],
//! [`Lab`], and [`Xyz`]. Each struct enforces its color space's invariants on
//! construction and on every write through a setter, so that a value is always
//! valid.
//!
//! All of them implement [`ColorModel`], which is all that generic conversion
//! needs: Every color model can project itself onto a [`Color`] and initialize
//! itself from one. Since [`Color`] converts through RGB, so do the models.
//!
//! ```
//! # use prismatic::model::{ColorModel, Hsl, Lab, Rgb};
//! let red = Rgb::new(1.0, 0.0, 0.0);
//! let hsl: Hsl = red.convert();
//! assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));
//!
//! let lab = Lab::from_rgb(&red);
//! assert_eq!(lab.to_rgb().to_hex(), "#FF0000");
//! ```

mod cie;
mod cylindrical;
mod rgb;

pub use cie::{Lab, Xyz};
pub use cylindrical::{Hsb, Hsl};
pub use rgb::Rgb;

use crate::compare::ColorComparison;
use crate::{Color, Float};

/// The capability shared by all color values.
///
/// Implementors only need to provide [`ColorModel::to_color`] and
/// [`ColorModel::from_color`]. The remaining methods build on the two.
pub trait ColorModel: Sized {
    /// Project this value onto a dynamic color.
    fn to_color(&self) -> Color;

    /// Create a new value from the given color, converting it as necessary.
    fn from_color(color: &Color) -> Self;

    /// Create a new value from the given RGB value.
    fn from_rgb(rgb: &Rgb) -> Self {
        Self::from_color(&rgb.to_color())
    }

    /// Project this value onto RGB.
    fn to_rgb(&self) -> Rgb {
        Rgb::from_color(&self.to_color())
    }

    /// Replace this value with one derived from the given RGB value.
    fn initialize_from(&mut self, rgb: &Rgb) {
        *self = Self::from_rgb(rgb);
    }

    /// Convert this value to any other color model.
    ///
    /// Converting to the same color space only copies the coordinates.
    fn convert<T: ColorModel>(&self) -> T {
        T::from_color(&self.to_color())
    }

    /// Compute the distance to the other value with the given strategy.
    fn compare<M, S>(&self, other: &M, strategy: &S) -> Float
    where
        M: ColorModel,
        S: ColorComparison + ?Sized,
    {
        strategy.compare(&self.to_color(), &other.to_color())
    }
}

impl ColorModel for Color {
    #[inline]
    fn to_color(&self) -> Color {
        self.clone()
    }

    #[inline]
    fn from_color(color: &Color) -> Self {
        color.clone()
    }
}

/// Implement the traits shared by the color values without alpha.
///
/// Equality and hashing go through the same normalization as [`Color`], so
/// that values equal after rounding also hash equally.
macro_rules! impl_color_value {
    ($name:ident, $space:expr, [$c1:ident, $c2:ident, $c3:ident]) => {
        impl $name {
            /// Access the coordinates.
            #[inline]
            pub fn coordinates(&self) -> [$crate::Float; 3] {
                [self.$c1, self.$c2, self.$c3]
            }
        }

        impl $crate::model::ColorModel for $name {
            #[inline]
            fn to_color(&self) -> $crate::Color {
                $crate::Color::new($space, self.coordinates())
            }

            #[inline]
            fn from_color(color: &$crate::Color) -> Self {
                let [$c1, $c2, $c3] = color.to($space).coordinates();
                Self { $c1, $c2, $c3 }
            }
        }

        impl From<$name> for $crate::Color {
            fn from(value: $name) -> Self {
                $crate::model::ColorModel::to_color(&value)
            }
        }

        impl From<&$crate::Color> for $name {
            fn from(value: &$crate::Color) -> Self {
                <$name as $crate::model::ColorModel>::from_color(value)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::core::to_eq_coordinates($space, &self.coordinates())
                    == $crate::core::to_eq_coordinates($space, &other.coordinates())
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::core::to_eq_coordinates($space, &self.coordinates()).hash(state);
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&$crate::model::ColorModel::to_color(self), f)
            }
        }
    };
}

pub(crate) use impl_color_value;
