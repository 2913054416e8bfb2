//! Derived color operations.
//!
//! [`ColorExt`] adds mixing, hue and lightness adjustments, contrast and
//! distinctness tests, as well as nearest-match search to every
//! [`ColorModel`]. Operations that produce a new color return [`Rgb`]. Each of
//! them has a twin with an `_as` suffix, which re-projects the result into any
//! color model:
//!
//! ```
//! # use prismatic::{ColorExt, ColorModel};
//! # use prismatic::model::{Hsl, Rgb};
//! let red = Rgb::new(1.0, 0.0, 0.0);
//! assert_eq!(red.mix(&Rgb::WHITE, 0.5), Rgb::new(1.0, 0.5, 0.5));
//!
//! let cyan: Hsl = red.complementary_as();
//! assert_eq!(cyan, Hsl::new(180.0, 1.0, 0.5));
//! ```

use crate::compare::ColorComparison;
use crate::core::{
    contrast_ratio, interpolate, relative_luminance, ColorSpace, CONTRASTING_THRESHOLD,
    DARK_THRESHOLD,
};
use crate::model::{ColorModel, Rgb};
use crate::{Color, Float};

/// The minimum difference of any one channel for distinct colors.
const DISTINCT_THRESHOLD: Float = 0.25;

/// The maximum spread between channels for a near-grayscale color.
const GRAYSCALE_THRESHOLD: Float = 0.03;

/// Channels above this threshold are nearly white.
const WHITE_THRESHOLD: Float = 0.91;

/// Channels below this threshold are nearly black.
const BLACK_THRESHOLD: Float = 0.09;

/// Add the delta to one coordinate in the given color space.
///
/// The result retains the alpha.
fn adjust<M: ColorModel>(color: &M, space: ColorSpace, index: usize, delta: Float) -> Rgb {
    let color = color.to_color().to(space);
    let mut coordinates = color.coordinates();
    coordinates[index] += delta;
    Rgb::from_color(&Color::new(space, coordinates).with_alpha(color.alpha()))
}

/// Determine whether the RGB coordinates are nearly gray.
fn is_grayscale(coordinates: &[Float; 3]) -> bool {
    let [r, g, b] = *coordinates;
    (r - g).abs() < GRAYSCALE_THRESHOLD && (r - b).abs() < GRAYSCALE_THRESHOLD
}

/// Derived operations on colors.
///
/// This trait is implemented for every [`ColorModel`]. All operations accept
/// colors in any color space and compute their results in RGB, HSL, or HSB.
/// Weights and amounts are clamped as part of normalizing coordinates, so they
/// never produce invalid colors.
pub trait ColorExt: ColorModel {
    /// Mix this color with the other color.
    ///
    /// This method linearly interpolates each RGB channel from this color
    /// towards the other color, with the weight clamped to `0..=1`. The result
    /// is opaque.
    fn mix<M: ColorModel>(&self, other: &M, weight: Float) -> Rgb {
        let [r, g, b] = interpolate(
            weight,
            &self.to_rgb().coordinates(),
            &other.to_rgb().coordinates(),
        );
        Rgb::new(r, g, b)
    }

    /// Mix this color with the other color and convert the result.
    fn mix_as<T: ColorModel, M: ColorModel>(&self, other: &M, weight: Float) -> T {
        T::from_rgb(&self.mix(other, weight))
    }

    /// Mix this color with white.
    fn tint(&self, amount: Float) -> Rgb {
        self.mix(&Rgb::WHITE, amount)
    }

    /// Mix this color with white and convert the result.
    fn tint_as<T: ColorModel>(&self, amount: Float) -> T {
        T::from_rgb(&self.tint(amount))
    }

    /// Mix this color with black.
    fn shade(&self, amount: Float) -> Rgb {
        self.mix(&Rgb::BLACK, amount)
    }

    /// Mix this color with black and convert the result.
    fn shade_as<T: ColorModel>(&self, amount: Float) -> T {
        T::from_rgb(&self.shade(amount))
    }

    /// Rotate this color's HSL hue by the given degrees.
    fn adjust_hue(&self, degrees: Float) -> Rgb {
        adjust(self, ColorSpace::Hsl, 0, degrees)
    }

    /// Rotate this color's HSL hue and convert the result.
    fn adjust_hue_as<T: ColorModel>(&self, degrees: Float) -> T {
        T::from_rgb(&self.adjust_hue(degrees))
    }

    /// Determine the complementary color, i.e., rotate the hue by 180º.
    fn complementary(&self) -> Rgb {
        self.adjust_hue(180.0)
    }

    /// Determine the complementary color and convert the result.
    fn complementary_as<T: ColorModel>(&self) -> T {
        T::from_rgb(&self.complementary())
    }

    /// Increase this color's HSL lightness by the given amount.
    fn lighten(&self, amount: Float) -> Rgb {
        adjust(self, ColorSpace::Hsl, 2, amount)
    }

    /// Increase the HSL lightness and convert the result.
    fn lighten_as<T: ColorModel>(&self, amount: Float) -> T {
        T::from_rgb(&self.lighten(amount))
    }

    /// Decrease this color's HSL lightness by the given amount.
    fn darken(&self, amount: Float) -> Rgb {
        adjust(self, ColorSpace::Hsl, 2, -amount)
    }

    /// Decrease the HSL lightness and convert the result.
    fn darken_as<T: ColorModel>(&self, amount: Float) -> T {
        T::from_rgb(&self.darken(amount))
    }

    /// Increase this color's HSL saturation by the given amount.
    fn saturate(&self, amount: Float) -> Rgb {
        adjust(self, ColorSpace::Hsl, 1, amount)
    }

    /// Increase the HSL saturation and convert the result.
    fn saturate_as<T: ColorModel>(&self, amount: Float) -> T {
        T::from_rgb(&self.saturate(amount))
    }

    /// Decrease this color's HSL saturation by the given amount.
    fn desaturate(&self, amount: Float) -> Rgb {
        adjust(self, ColorSpace::Hsl, 1, -amount)
    }

    /// Decrease the HSL saturation and convert the result.
    fn desaturate_as<T: ColorModel>(&self, amount: Float) -> T {
        T::from_rgb(&self.desaturate(amount))
    }

    /// Fully desaturate this color.
    fn grayscale(&self) -> Rgb {
        self.desaturate(1.0)
    }

    /// Fully desaturate this color and convert the result.
    fn grayscale_as<T: ColorModel>(&self) -> T {
        T::from_rgb(&self.grayscale())
    }

    /// Invert each RGB channel. The result is opaque.
    fn invert(&self) -> Rgb {
        let [r, g, b] = self.to_rgb().coordinates();
        Rgb::new(1.0 - r, 1.0 - g, 1.0 - b)
    }

    /// Invert each RGB channel and convert the result.
    fn invert_as<T: ColorModel>(&self) -> T {
        T::from_rgb(&self.invert())
    }

    /// Raise this color's HSB saturation to at least the given minimum.
    ///
    /// ```
    /// # use prismatic::{ColorExt, model::{Hsb, Rgb}};
    /// let pale = Hsb::new(0.0, 0.2, 0.5);
    /// assert_eq!(pale.with_minimum_saturation(0.6), Rgb::new(0.5, 0.2, 0.2));
    /// assert_eq!(pale.with_minimum_saturation(0.1), Rgb::new(0.5, 0.4, 0.4));
    /// ```
    fn with_minimum_saturation(&self, minimum: Float) -> Rgb {
        let saturation = self.to_color().to(ColorSpace::Hsb)[1];
        if saturation < minimum {
            adjust(self, ColorSpace::Hsb, 1, minimum - saturation)
        } else {
            self.to_rgb()
        }
    }

    /// Raise the HSB saturation to the minimum and convert the result.
    fn with_minimum_saturation_as<T: ColorModel>(&self, minimum: Float) -> T {
        T::from_rgb(&self.with_minimum_saturation(minimum))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute this color's relative luminance, i.e., `0.2126R + 0.7152G +
    /// 0.0722B`.
    fn relative_luminance(&self) -> Float {
        relative_luminance(&self.to_rgb().coordinates())
    }

    /// Compute the contrast ratio between this and the other color.
    ///
    /// The ratio divides the greater relative luminance plus 0.05 by the
    /// lesser one plus 0.05. It is symmetric and ranges from 1 to 21.
    fn contrast_ratio<M: ColorModel>(&self, other: &M) -> Float {
        contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    /// Determine whether this color is dark, i.e., has a relative luminance
    /// below one half.
    fn is_dark(&self) -> bool {
        self.relative_luminance() < DARK_THRESHOLD
    }

    /// Determine whether all RGB channels are nearly white or nearly black.
    fn is_black_or_white(&self) -> bool {
        let coordinates = self.to_rgb().coordinates();
        coordinates.iter().all(|c| *c > WHITE_THRESHOLD)
            || coordinates.iter().all(|c| *c < BLACK_THRESHOLD)
    }

    /// Determine whether this and the other color are distinct.
    ///
    /// Two colors are distinct if any RGB channel differs by more than a
    /// quarter. However, two near-grayscale colors are never distinct.
    ///
    /// ```
    /// # use prismatic::{ColorExt, model::Rgb};
    /// let red = Rgb::new(1.0, 0.0, 0.0);
    /// assert!(red.is_distinct(&Rgb::new(0.0, 0.0, 1.0)));
    /// assert!(!red.is_distinct(&Rgb::new(0.8, 0.0, 0.0)));
    /// assert!(!Rgb::BLACK.is_distinct(&Rgb::WHITE));
    /// ```
    fn is_distinct<M: ColorModel>(&self, other: &M) -> bool {
        let coordinates1 = self.to_rgb().coordinates();
        let coordinates2 = other.to_rgb().coordinates();

        let differs = coordinates1
            .iter()
            .zip(coordinates2.iter())
            .any(|(c1, c2)| (c1 - c2).abs() > DISTINCT_THRESHOLD);

        differs && !(is_grayscale(&coordinates1) && is_grayscale(&coordinates2))
    }

    /// Determine whether this and the other color contrast with each other,
    /// i.e., have a contrast ratio above 1.6.
    fn is_contrasting<M: ColorModel>(&self, other: &M) -> bool {
        self.contrast_ratio(other) > CONTRASTING_THRESHOLD
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Find the index of the candidate closest to this color.
    ///
    /// This method scans the candidates in order, computing distances with
    /// the given strategy, and returns the index of the first candidate with
    /// the smallest distance. It returns `None` if there are no candidates.
    ///
    /// ```
    /// # use prismatic::{ColorExt, DeltaE, model::Rgb};
    /// let candidates = [Rgb::BLACK, Rgb::new(1.0, 0.0, 0.0), Rgb::WHITE];
    /// let orange = Rgb::from_24bit(0xff, 0x66, 0x00);
    /// assert_eq!(orange.find_closest(&candidates, &DeltaE::CieDe2000), Some(1));
    /// ```
    fn find_closest<'c, M, C, S>(&self, candidates: C, strategy: &S) -> Option<usize>
    where
        M: ColorModel + 'c,
        C: IntoIterator<Item = &'c M>,
        S: ColorComparison + ?Sized,
    {
        let origin = self.to_color();
        let candidates: Vec<Color> = candidates.into_iter().map(M::to_color).collect();
        crate::core::find_closest(&origin, &candidates, |c1: &Color, c2: &Color| {
            strategy.compare(c1, c2)
        })
    }

    /// Find the candidate closest to this color.
    fn nearest<'c, M, C, S>(&self, candidates: C, strategy: &S) -> Option<Rgb>
    where
        M: ColorModel + 'c,
        C: IntoIterator<Item = &'c M>,
        S: ColorComparison + ?Sized,
    {
        let candidates: Vec<&M> = candidates.into_iter().collect();
        let index = self.find_closest(candidates.iter().copied(), strategy)?;
        candidates.get(index).map(|candidate| candidate.to_rgb())
    }

    /// Find the candidate closest to this color and convert it.
    fn nearest_as<'c, T, M, C, S>(&self, candidates: C, strategy: &S) -> Option<T>
    where
        T: ColorModel,
        M: ColorModel + 'c,
        C: IntoIterator<Item = &'c M>,
        S: ColorComparison + ?Sized,
    {
        self.nearest(candidates, strategy).map(|rgb| T::from_rgb(&rgb))
    }
}

impl<T: ColorModel> ColorExt for T {}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::ColorExt;
    use crate::model::{ColorModel, Hsb, Hsl, Lab, Rgb};
    use crate::{Color, ColorSpace, DeltaE, Float};

    #[test]
    fn test_mix() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(red.mix(&Rgb::WHITE, 0.5), Rgb::new(1.0, 0.5, 0.5));
        assert_eq!(red.mix(&Rgb::WHITE, 7.0), Rgb::WHITE);
        assert_eq!(red.mix(&Rgb::WHITE, -7.0), red);

        // Alpha does not carry over.
        let ghost = red.with_alpha(0.25);
        assert_eq!(ghost.mix(&ghost, 0.5).a(), 1.0);

        // Mixing works across color spaces.
        let blue = Hsl::new(240.0, 1.0, 0.5);
        let purple: Hsb = red.mix_as(&blue, 0.5);
        assert_eq!(purple, Hsb::new(300.0, 1.0, 0.5));

        assert_eq!(red.tint(0.5), Rgb::new(1.0, 0.5, 0.5));
        assert_eq!(red.shade(0.5), Rgb::new(0.5, 0.0, 0.0));
        let shade: Color = red.shade_as(0.5);
        assert_eq!(shade, Color::rgb(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_hue() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(red.adjust_hue(120.0), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(red.adjust_hue(-120.0), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(red.complementary(), Rgb::new(0.0, 1.0, 1.0));

        let hsl: Hsl = red.adjust_hue_as(480.0);
        assert_eq!(hsl, Hsl::new(120.0, 1.0, 0.5));

        // Hue adjustments retain alpha.
        assert_eq!(red.with_alpha(0.5).complementary().a(), 0.5);
    }

    #[test]
    fn test_lightness_and_saturation() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(red.lighten(0.2), Rgb::new(1.0, 0.4, 0.4));
        assert_eq!(red.darken(0.2), Rgb::new(0.6, 0.0, 0.0));
        assert_eq!(red.lighten(1.0), Rgb::WHITE);
        assert_eq!(red.darken(1.0), Rgb::BLACK);

        assert_eq!(red.desaturate(0.5), Rgb::new(0.75, 0.25, 0.25));
        assert_eq!(red.grayscale(), Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(red.desaturate(0.5).saturate(0.5), red);

        let gray: Hsl = red.grayscale_as();
        assert_eq!(gray.s(), 0.0);

        let lighter: Hsl = Hsl::new(30.0, 0.5, 0.25).lighten_as(0.25);
        assert_eq!(lighter, Hsl::new(30.0, 0.5, 0.5));
        let darker: Hsl = lighter.darken_as(0.5);
        assert_eq!(darker.l(), 0.0);
    }

    #[test]
    fn test_invert_and_saturation() {
        let color = Rgb::new(0.25, 0.5, 1.0).with_alpha(0.5);
        let inverted = color.invert();
        assert_eq!(inverted, Rgb::new(0.75, 0.5, 0.0));
        assert_eq!(inverted.a(), 1.0);

        let lab: Lab = Rgb::BLACK.invert_as();
        assert_eq!(lab.to_rgb().to_24bit(), [0xff, 0xff, 0xff]);

        let pale = Rgb::new(0.5, 0.4, 0.4);
        assert_eq!(pale.with_minimum_saturation(0.6), Rgb::new(0.5, 0.2, 0.2));
        assert_eq!(pale.with_minimum_saturation(0.1), pale);
        let vivid: Hsb = pale.with_minimum_saturation_as(1.0);
        assert_eq!(vivid, Hsb::new(0.0, 1.0, 0.5));
    }

    const TOLERANCE: Float = if cfg!(feature = "f64") { 1e-9 } else { 1e-4 };

    #[test]
    fn test_contrast() {
        let gray = Rgb::new(0.5, 0.5, 0.5);
        let other_gray = Rgb::new(0.51, 0.51, 0.51);
        assert!(Rgb::BLACK.is_contrasting(&Rgb::WHITE));
        assert!(Rgb::WHITE.is_contrasting(&Rgb::BLACK));
        assert!(!gray.is_contrasting(&other_gray));

        let ratio = Rgb::BLACK.contrast_ratio(&Color::hsl(0.0, 0.0, 1.0));
        assert!((ratio - 21.0).abs() < TOLERANCE, "{}", ratio);

        assert!(Rgb::BLACK.is_dark());
        assert!(!Rgb::WHITE.is_dark());
        assert!(Rgb::new(0.0, 0.0, 1.0).is_dark());
        assert!(!Rgb::new(0.0, 1.0, 0.0).is_dark());
        assert!((Rgb::new(0.0, 1.0, 0.0).relative_luminance() - 0.7152).abs() < TOLERANCE);
    }

    #[test]
    fn test_black_or_white() {
        assert!(Rgb::BLACK.is_black_or_white());
        assert!(Rgb::WHITE.is_black_or_white());
        assert!(Rgb::new(0.92, 0.95, 1.0).is_black_or_white());
        assert!(Rgb::new(0.05, 0.0, 0.08).is_black_or_white());
        assert!(!Rgb::new(0.5, 0.5, 0.5).is_black_or_white());
        assert!(!Rgb::new(0.92, 0.05, 1.0).is_black_or_white());
        assert!(!Rgb::new(0.91, 0.95, 1.0).is_black_or_white());
    }

    #[test]
    fn test_distinct() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        assert!(red.is_distinct(&Rgb::new(0.0, 0.0, 1.0)));
        assert!(red.is_distinct(&Rgb::new(0.74, 0.0, 0.0)));
        assert!(!red.is_distinct(&Rgb::new(0.75, 0.0, 0.0)));
        assert!(!red.is_distinct(&red));

        // Two near-grays are never distinct, however far apart.
        let dark = Rgb::new(0.1, 0.11, 0.12);
        let light = Rgb::new(0.9, 0.9, 0.88);
        assert!(!dark.is_distinct(&light));
        assert!(!Rgb::BLACK.is_distinct(&Rgb::WHITE));

        // One gray and one color may be distinct.
        assert!(dark.is_distinct(&Rgb::new(0.9, 0.1, 0.1)));
        assert!(Hsl::new(0.0, 0.0, 0.5).is_distinct(&Hsl::new(240.0, 1.0, 0.5)));
    }

    #[test]
    fn test_nearest() {
        let candidates = [
            Rgb::BLACK,
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::WHITE,
        ];

        let maroon = Rgb::new(0.6, 0.0, 0.0);
        for strategy in [DeltaE::Cie76, DeltaE::CieDe2000] {
            // The first of two equal candidates wins.
            assert_eq!(maroon.find_closest(&candidates, &strategy), Some(1));
        }

        assert_eq!(
            maroon.nearest(&candidates, &DeltaE::default()),
            Some(Rgb::new(1.0, 0.0, 0.0))
        );
        let hsl: Option<Hsl> = maroon.nearest_as(&candidates, &DeltaE::default());
        assert_eq!(hsl, Some(Hsl::new(0.0, 1.0, 0.5)));
        assert_eq!(maroon.find_closest(&[] as &[Rgb; 0], &DeltaE::default()), None);

        // Closures are strategies, too.
        let blue_only = |c1: &Color, c2: &Color| -> Float {
            let (b1, b2) = (c1.to(ColorSpace::Rgb)[2], c2.to(ColorSpace::Rgb)[2]);
            (b1 - b2).abs()
        };
        let navy = Color::rgb(0.0, 0.0, 0.9);
        assert_eq!(navy.find_closest(&candidates, &blue_only), Some(4));

        // A strategy without finite distances still yields a match.
        let unbounded = |_: &Color, _: &Color| Float::INFINITY;
        assert_eq!(navy.find_closest(&candidates, &unbounded), Some(0));
        assert_eq!(maroon.nearest(&candidates, &unbounded), Some(Rgb::BLACK));
    }
}
