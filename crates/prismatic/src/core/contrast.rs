use crate::Float;

/// The coefficients for computing relative luminance from RGB coordinates.
const LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The relative luminance below which a color counts as dark.
pub(crate) const DARK_THRESHOLD: Float = 0.5;

/// The contrast ratio above which two colors count as contrasting.
pub(crate) const CONTRASTING_THRESHOLD: Float = 1.6;

/// Compute the relative luminance for the given RGB coordinates.
///
/// The luminance is the weighted sum of the gamma-encoded channels. Unlike
/// WCAG's formula, it does not linearize the channels first.
pub(crate) fn relative_luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *LUMINANCE;
    let [r, g, b] = *coordinates;

    r.mul_add(c1, g.mul_add(c2, b * c3))
}

/// Compute the WCAG-style contrast ratio between two relative luminances.
///
/// The arguments are interchangeable. The result ranges from 1 for identical
/// luminances to 21 for black and white.
pub(crate) fn contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (greater, lesser) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (greater + 0.05) / (lesser + 0.05)
}
