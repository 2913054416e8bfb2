//! Utility module with prismatic's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Parsing a hexadecimal color is the only fallible operation of this crate.
/// All other inputs, including out-of-range coordinates, are silently clamped
/// or wrapped. The enumeration only has unit variants, since PyO3 only supports
/// those.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with characters outside ASCII. For example, `#💩00`
    /// contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format with an unexpected number of hexadecimal digits. Only
    /// 3, 6, and 8 digits are valid. For example, `#00` is missing a digit.
    UnexpectedLength,

    /// A color format with a character that is not a hexadecimal digit. For
    /// example, `#efg` has a malformed third digit.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            UnexpectedLength => {
                f.write_str("color format should have 3, 6, or 8 hexadecimal digits but does not")
            }
            MalformedHex => {
                f.write_str("color format digits should be hexadecimal but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
