use super::{from_byte, normalize, to_byte, wrap_degrees, ColorSpace, ACHROMATIC_THRESHOLD};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [from_byte(r), from_byte(g), from_byte(b)]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function first converts the coordinates to RGB and then quantizes each
/// component with [`to_byte`](crate::to_byte), i.e., clamps, scales, and
/// rounds half-up. Hexadecimal and packed-integer encodings share this
/// quantization.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = convert(space, ColorSpace::Rgb, coordinates);
    [to_byte(r), to_byte(g), to_byte(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Determine the hue in degrees from the RGB channels, their maximum, and the
/// chroma.
///
/// The hue falls into one of six 60º sectors, as determined by the channel
/// holding the maximum. The chroma must be strictly positive.
#[inline]
fn hue(rgb: &[Float; 3], max: Float, chroma: Float) -> Float {
    let [r, g, b] = *rgb;

    let sector = if max == r {
        (g - b) / chroma
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    wrap_degrees(60.0 * sector)
}

/// Determine the maximum, minimum, and chroma of the RGB channels.
#[inline]
fn decompose(rgb: &[Float; 3]) -> (Float, Float, Float) {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (max, min, max - min)
}

/// Reassemble RGB from the hue, chroma, and offset added to every channel.
///
/// This is the inverse of the 60º sector table used by [`hue`].
#[inline]
fn from_sector(hue: Float, chroma: Float, offset: Float) -> [Float; 3] {
    let h = wrap_degrees(hue) / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

    let [r, g, b] = match h as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    [r + offset, g + offset, b + offset]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from RGB to HSB. This is a one-hop, direct conversion.
///
/// If the maximum channel is (nearly) zero, the color is black and the result
/// is `[0, 0, 0]`. If the chroma is (nearly) zero, the color is a gray with
/// zero hue and saturation.
pub(crate) fn rgb_to_hsb(value: &[Float; 3]) -> [Float; 3] {
    let (max, _, chroma) = decompose(value);
    if max <= ACHROMATIC_THRESHOLD {
        return [0.0, 0.0, 0.0];
    }

    if chroma <= ACHROMATIC_THRESHOLD {
        return [0.0, 0.0, max];
    }

    [hue(value, max, chroma), chroma / max, max]
}

/// Convert coordinates from HSB to RGB. This is a one-hop, direct conversion.
pub(crate) fn hsb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, b] = *value;
    let chroma = b * s;
    from_sector(h, chroma, b - chroma)
}

/// Convert coordinates from RGB to HSL. This is a one-hop, direct conversion.
///
/// If the chroma is (nearly) zero, the color is achromatic with zero hue and
/// saturation.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let (max, min, chroma) = decompose(value);
    let lightness = (max + min) / 2.0;
    if chroma <= ACHROMATIC_THRESHOLD {
        return [0.0, 0.0, lightness];
    }

    let saturation = if lightness <= 0.5 {
        chroma / (max + min)
    } else {
        chroma / (2.0 - max - min)
    };

    [hue(value, max, chroma), saturation, lightness]
}

/// Convert coordinates from HSL to RGB. This is a one-hop, direct conversion.
///
/// This function uses the two-parameter algorithm, which evaluates the same
/// piecewise function for three hue phases offset by 120º.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = wrap_degrees(h) / 360.0;

    #[inline]
    fn channel(p: Float, q: Float, t: Float) -> Float {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    [
        channel(p, q, h + 1.0 / 3.0),
        channel(p, q, h),
        channel(p, q, h - 1.0 / 3.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates from sRGB to XYZ. This is a two-hop conversion through
/// linear sRGB.
pub(crate) fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, &rgb_to_linear_rgb(value))
}

/// Convert coordinates from XYZ to sRGB. This is a two-hop conversion through
/// linear sRGB.
pub(crate) fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_SRGB, value))
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 white reference, scaled so that Y is one.
pub(crate) const WHITE_REFERENCE: [Float; 3] = [0.95047, 1.0, 1.08883];

/// The CIE ε, i.e., 216/24389.
const EPSILON: Float = 216.0 / 24389.0;

/// The CIE κ, i.e., 24389/27.
const KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates from XYZ to CIELAB. This is a one-hop, direct
/// conversion.
///
/// The pivot function takes the cube root of ratios above ε and compresses
/// ratios below it linearly. Lightness never drops below zero.
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn pivot(ratio: Float) -> Float {
        if ratio > EPSILON {
            ratio.cbrt()
        } else {
            KAPPA.mul_add(ratio, 16.0) / 116.0
        }
    }

    let [xn, yn, zn] = WHITE_REFERENCE;
    let fx = pivot(value[0] / xn);
    let fy = pivot(value[1] / yn);
    let fz = pivot(value[2] / zn);

    [
        (116.0 as Float).mul_add(fy, -16.0).max(0.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert coordinates from CIELAB to XYZ. This is a one-hop, direct
/// conversion.
pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn unpivot(f: Float) -> Float {
        let cube = f * f * f;
        if cube > EPSILON {
            cube
        } else {
            (116.0 as Float).mul_add(f, -16.0) / KAPPA
        }
    }

    let [l, a, b] = *value;
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let y = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };

    let [xn, yn, zn] = WHITE_REFERENCE;
    [unpivot(fx) * xn, y * yn, unpivot(fz) * zn]
}

// --------------------------------------------------------------------------------------------------------------------

/// Project normalized coordinates in the given color space onto RGB.
///
/// CIELAB passes through XYZ, which is clamped to the white reference's
/// bounds on the way.
fn to_rgb(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    let rgb = match space {
        Rgb => *coordinates,
        Hsb => hsb_to_rgb(coordinates),
        Hsl => hsl_to_rgb(coordinates),
        Xyz => xyz_to_rgb(coordinates),
        Lab => xyz_to_rgb(&normalize(Xyz, &lab_to_xyz(coordinates))),
    };

    normalize(Rgb, &rgb)
}

/// Project normalized RGB coordinates onto the given color space.
fn from_rgb(space: ColorSpace, rgb: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    let coordinates = match space {
        Rgb => *rgb,
        Hsb => rgb_to_hsb(rgb),
        Hsl => rgb_to_hsl(rgb),
        Xyz => rgb_to_xyz(rgb),
        Lab => xyz_to_lab(&normalize(Xyz, &rgb_to_xyz(rgb))),
    };

    normalize(space, &coordinates)
}

/// Convert the coordinates from one color space to another.
///
/// This function normalizes the coordinates for the source color space and, if
/// the two color spaces are the same, returns them right away. Otherwise, it
/// projects the coordinates onto RGB, the hub of all conversions, and then
/// re-projects them onto the target color space, whose invariants the result
/// satisfies.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Project onto the hub and then onto the target.
    let rgb = to_rgb(from_space, &coordinates);
    from_rgb(to_space, &rgb)
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, assert_within, ColorSpace::*};
    use crate::Float;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const TOLERANCE: Float = if cfg!(feature = "f64") { 1e-9 } else { 1e-3 };

    macro_rules! assert_coordinates_within {
        ($cs1:expr, $cs2:expr, $tolerance:expr $(,)?) => {
            let (cs1, cs2): (&[Float; 3], &[Float; 3]) = ($cs1, $cs2);
            for index in 0..3 {
                assert_within!(cs1[index], cs2[index], $tolerance);
            }
        };
    }

    struct Representations {
        rgb: [Float; 3],
        hsb: [Float; 3],
        hsl: [Float; 3],
        xyz: [Float; 3],
        lab: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        rgb: [0.0, 0.0, 0.0],
        hsb: [0.0, 0.0, 0.0],
        hsl: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
    };

    const RED: Representations = Representations {
        // #ff0000
        rgb: [1.0, 0.0, 0.0],
        hsb: [0.0, 1.0, 1.0],
        hsl: [0.0, 1.0, 0.5],
        xyz: [0.41239079926595934, 0.21263900587151027, 0.01933081871559182],
        lab: [53.23711559542936, 80.08824532367986, 67.19962622113603],
    };

    const YELLOW: Representations = Representations {
        // #ffca00
        rgb: [1.0, 0.792156862745098, 0.0],
        hsb: [47.52941176470588, 1.0, 1.0],
        hsl: [47.52941176470588, 1.0, 0.5],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
        lab: [83.70638900177585, 4.697468457239118, 84.87367866720633],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        rgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        hsb: [216.97297297297297, 0.7905982905982906, 0.9176470588235294],
        hsl: [216.97297297297297, 0.8149779735682817, 0.5549019607843138],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
        lab: [51.86582883269902, 18.294323178078496, -63.840709525202755],
    };

    const GRAY: Representations = Representations {
        // #808080
        rgb: [0.5019607843137255, 0.5019607843137255, 0.5019607843137255],
        hsb: [0.0, 0.0, 0.5019607843137255],
        hsl: [0.0, 0.0, 0.5019607843137255],
        xyz: [0.2051658917495936, 0.21586050011389926, 0.23508455073194565],
        lab: [53.585013452169036, -0.0014803189503642677, -0.008364422192297383],
    };

    #[test]
    fn test_conversions() {
        for color in [&BLACK, &RED, &YELLOW, &BLUE, &GRAY] {
            // Test all one-hop conversions. HSB hues are unrounded here.
            let hsb = rgb_to_hsb(&color.rgb);
            assert_coordinates_within!(&hsb, &color.hsb, TOLERANCE);
            let rgb = hsb_to_rgb(&hsb);
            assert_coordinates_within!(&rgb, &color.rgb, TOLERANCE);

            let hsl = rgb_to_hsl(&color.rgb);
            assert_coordinates_within!(&hsl, &color.hsl, TOLERANCE);
            let rgb = hsl_to_rgb(&hsl);
            assert_coordinates_within!(&rgb, &color.rgb, TOLERANCE);

            let xyz = rgb_to_xyz(&color.rgb);
            assert_coordinates_within!(&xyz, &color.xyz, TOLERANCE);
            let rgb = xyz_to_rgb(&xyz);
            assert_coordinates_within!(&rgb, &color.rgb, TOLERANCE);

            let lab = xyz_to_lab(&xyz);
            assert_coordinates_within!(&lab, &color.lab, 1000.0 * TOLERANCE);
            let also_xyz = lab_to_xyz(&lab);
            assert_coordinates_within!(&also_xyz, &xyz, TOLERANCE);
        }
    }

    #[test]
    fn test_red() {
        assert_same_coordinates!(Hsl, &convert(Rgb, Hsl, &[1.0, 0.0, 0.0]), &[0.0, 1.0, 0.5]);
        assert_same_coordinates!(Rgb, &convert(Hsl, Rgb, &[0.0, 1.0, 0.5]), &[1.0, 0.0, 0.0]);
        assert_same_coordinates!(Hsb, &convert(Rgb, Hsb, &[1.0, 0.0, 0.0]), &[0.0, 1.0, 1.0]);
        assert_same_coordinates!(Rgb, &convert(Hsb, Rgb, &[360.0, 1.0, 1.0]), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_degenerate() {
        // Black and grays have no hue, and black no saturation.
        assert_eq!(rgb_to_hsb(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsb(&[1e-12, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsb(&[0.3, 0.3, 0.3]), [0.0, 0.0, 0.3]);
        assert_eq!(rgb_to_hsl(&[0.3, 0.3, 0.3]), [0.0, 0.0, 0.3]);
        assert_eq!(rgb_to_hsl(&[1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(hsl_to_rgb(&[120.0, 0.0, 0.25]), [0.25, 0.25, 0.25]);

        // Nearly gray is gray, too.
        assert_eq!(rgb_to_hsb(&[0.5, 0.5, 0.5 + 1e-10]), [0.0, 0.0, 0.5 + 1e-10]);
        assert_eq!(rgb_to_hsl(&[0.5, 0.5, 0.5 + 1e-10])[..2], [0.0, 0.0]);

        for coordinates in [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.5, 0.5, 0.5]] {
            for space in [Hsb, Hsl, Lab, Xyz] {
                let result = convert(Rgb, space, &coordinates);
                assert!(result.iter().all(|c| c.is_finite()), "{:?}", result);
            }
        }
    }

    #[test]
    fn test_lab_lightness_floor() {
        // A vanishingly small Y still yields a non-negative lightness.
        let lab = xyz_to_lab(&[0.0, 1e-12, 0.0]);
        assert!(lab[0] >= 0.0);

        let lab = convert(Rgb, Lab, &[0.0, 0.0, 0.0]);
        assert_same_coordinates!(Lab, &lab, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_identity() {
        // Same-space conversions only normalize.
        assert_eq!(convert(Lab, Lab, &[-5.0, 300.0, 7.0]), [-5.0, 300.0, 7.0]);
        assert_eq!(convert(Hsl, Hsl, &[-10.0, 2.0, 0.5]), [350.0, 1.0, 0.5]);
        assert_eq!(convert(Rgb, Rgb, &[2.0, -1.0, 0.5]), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(to_24bit(Rgb, &from_24bit(0x31, 0x78, 0xea)), [0x31, 0x78, 0xea]);
        assert_eq!(to_24bit(Hsl, &[0.0, 1.0, 0.5]), [0xff, 0, 0]);
        assert_eq!(to_24bit(Rgb, &[0.5, 2.0, -1.0]), [0x80, 0xff, 0]);
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..2_000 {
            let rgb = [rng.random::<Float>(), rng.random::<Float>(), rng.random::<Float>()];

            // HSB rounds hue to whole degrees, which shifts channels by at
            // most half a degree's worth of chroma.
            for (space, tolerance) in [
                (Hsb, 1.0 / 120.0),
                (Hsl, 1.0 / 255.0),
                (Xyz, 1.0 / 255.0),
                (Lab, 1.0 / 255.0),
            ] {
                let there = convert(Rgb, space, &rgb);
                let back = convert(space, Rgb, &there);
                assert_coordinates_within!(&back, &rgb, tolerance);
            }
        }
    }

    #[test]
    fn test_integral_hue_round_trips() {
        // Colors with whole-degree hues survive the HSB round trip within one
        // quantization step.
        for hue in (0..360).step_by(15) {
            let rgb = hsb_to_rgb(&[hue as Float, 0.8, 0.6]);
            let back = convert(Hsb, Rgb, &convert(Rgb, Hsb, &rgb));
            assert_coordinates_within!(&back, &rgb, 1.0 / 255.0);
        }
    }
}
