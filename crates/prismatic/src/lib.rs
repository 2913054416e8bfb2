//! # Prismatic
//!
//! Prismatic provides value types for colors in five color spaces, i.e., RGB,
//! HSB (a.k.a. HSV), HSL, CIELAB, and XYZ, conversion between any two of them,
//! and a library of derived operations built on top of conversion.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prismatic's main abstractions are:
//!
//!   * [`Color`] combines a [`ColorSpace`] with three [`Float`] coordinates
//!     and an alpha channel. It is valid by construction, since all
//!     constructors normalize coordinates for the color space. [`Color::to`]
//!     converts between color spaces, routing all conversions through RGB.
//!   * The [`model`] module offers the typed color values [`Rgb`](model::Rgb),
//!     [`Hsb`](model::Hsb), [`Hsl`](model::Hsl), [`Lab`](model::Lab), and
//!     [`Xyz`](model::Xyz). Each of them, as well as [`Color`], implements
//!     the [`ColorModel`] trait, which supports generic conversion with
//!     [`ColorModel::convert`].
//!   * [`ColorComparison`] abstracts over distance metrics between colors.
//!     [`DeltaE`] provides the stock CIE76 and CIEDE2000 metrics, and
//!     closures work as well.
//!   * [`ColorExt`] adds mixing, tinting and shading, hue, lightness, and
//!     saturation adjustments, contrast and distinctness tests, as well as
//!     nearest-match search to every [`ColorModel`].
//!
//! ```
//! # use prismatic::{Color, ColorExt, ColorModel, ColorSpace, DeltaE};
//! # use prismatic::model::{Hsl, Rgb};
//! # use prismatic::error::ColorFormatError;
//! let red: Rgb = "#FF0000".parse()?;
//! let hsl: Hsl = red.convert();
//! assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));
//!
//! let rose = red.tint(0.5);
//! assert_eq!(rose.to_hex(), "#FF8080");
//! assert!(red.is_contrasting(&Rgb::WHITE));
//!
//! let lab = Color::from(rose).to(ColorSpace::Lab);
//! let palette = [Rgb::BLACK, red, Rgb::WHITE];
//! assert_eq!(lab.find_closest(&palette, &DeltaE::CieDe2000), Some(1));
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Prismatic supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls prismatic's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 3. Acknowledgements
//!
//! Prismatic reuses [Color.js](https://colorjs.io)' matrices for conversion
//! between sRGB and XYZ as well as the CIEDE2000 implementation notes by
//! Sharma, Wu, and Dalal. Thank you! 🌈

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod compare;
mod core;
pub mod error;
pub mod model;
mod object;
mod ops;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use compare::{ColorComparison, DeltaE};
pub use core::{clamp01, to_byte, wrap_degrees, ColorSpace};
pub use model::ColorModel;
pub use object::Color;
pub use ops::ColorExt;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn prismatic(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clamp01, m)?)?;
    m.add_function(wrap_pyfunction!(to_byte, m)?)?;
    m.add_function(wrap_pyfunction!(wrap_degrees, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<DeltaE>()?;

    Ok(())
}
