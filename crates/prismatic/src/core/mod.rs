mod contrast;
mod conversion;
mod difference;
mod equality;
mod math;
mod space;
mod string;

// contrast
pub(crate) use contrast::{
    contrast_ratio, relative_luminance, CONTRASTING_THRESHOLD, DARK_THRESHOLD,
};

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit, WHITE_REFERENCE};

// difference
pub(crate) use difference::{delta_e_2000, delta_e_76, find_closest, interpolate};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, assert_within};
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates, XYZ_BOUNDS};

// math
pub use math::{clamp01, to_byte, wrap_degrees};
pub(crate) use math::{clamp_to, from_byte, FloatExt, ACHROMATIC_THRESHOLD};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse_hex};
