use crate::core::clamp01;
use crate::Float;

/// Compute Delta-E 1976 for CIELAB, i.e., the Euclidian distance.
#[allow(non_snake_case)]
pub(crate) fn delta_e_76(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

/// Compute CIEDE2000 for CIELAB.
///
/// This function implements the formula as published by Sharma, Wu, and Dalal
/// in "The CIEDE2000 Color-Difference Formula: Implementation Notes,
/// Supplementary Test Data, and Mathematical Observations" with all parametric
/// weighting factors set to one. Hue angles are in degrees.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // 25^7
    const POW25_7: Float = 6_103_515_625.0;

    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let C_bar7 = ((C1 + C2) / 2.0).powi(7);
    let G = 0.5 * (1.0 - (C_bar7 / (C_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + G) * a1;
    let a2p = (1.0 + G) * a2;
    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);

    #[inline]
    fn hue(b: Float, ap: Float) -> Float {
        if b == 0.0 && ap == 0.0 {
            0.0
        } else {
            crate::core::wrap_degrees(b.atan2(ap).to_degrees())
        }
    }

    let h1p = hue(b1, a1p);
    let h2p = hue(b2, a2p);
    let is_achromatic = C1p * C2p == 0.0;

    let ΔLp = L2 - L1;
    let ΔCp = C2p - C1p;
    let Δhp = if is_achromatic {
        0.0
    } else {
        let Δ = h2p - h1p;
        if Δ > 180.0 {
            Δ - 360.0
        } else if Δ < -180.0 {
            Δ + 360.0
        } else {
            Δ
        }
    };
    let ΔHp = 2.0 * (C1p * C2p).sqrt() * (Δhp / 2.0).to_radians().sin();

    let Lp_bar = (L1 + L2) / 2.0;
    let Cp_bar = (C1p + C2p) / 2.0;
    let hp_bar = if is_achromatic {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let cos = |degrees: Float| degrees.to_radians().cos();
    let T = 1.0 - 0.17 * cos(hp_bar - 30.0)
        + 0.24 * cos(2.0 * hp_bar)
        + 0.32 * cos(3.0 * hp_bar + 6.0)
        - 0.20 * cos(4.0 * hp_bar - 63.0);

    let Δθ = 30.0 * (-((hp_bar - 275.0) / 25.0).powi(2)).exp();
    let Cp_bar7 = Cp_bar.powi(7);
    let R_C = 2.0 * (Cp_bar7 / (Cp_bar7 + POW25_7)).sqrt();
    let Lp_bar50 = (Lp_bar - 50.0).powi(2);
    let S_L = 1.0 + 0.015 * Lp_bar50 / (20.0 + Lp_bar50).sqrt();
    let S_C = 1.0 + 0.045 * Cp_bar;
    let S_H = 1.0 + 0.015 * Cp_bar * T;
    let R_T = -(2.0 * Δθ).to_radians().sin() * R_C;

    let L = ΔLp / S_L;
    let C = ΔCp / S_C;
    let H = ΔHp / S_H;

    (L * L + C * C + H * H + R_T * C * H).max(0.0).sqrt()
}

/// Find the candidate closest to the origin.
///
/// This function compares the origin to every candidate, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate, or `None` if there are no candidates. The first candidate
/// always becomes the initial minimum, even if its distance is infinite or
/// not-a-number. Since only strictly smaller distances replace the current
/// minimum, ties resolve to the first candidate in iteration order.
pub(crate) fn find_closest<'c, T, C, F>(
    origin: &T,
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    T: 'c,
    C: IntoIterator<Item = &'c T>,
    F: FnMut(&T, &T) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if min_index.is_none() || distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    if let Some(index) = min_index {
        log::trace!("closest candidate is #{} at distance {}", index, min_distance);
    }
    min_index
}

// --------------------------------------------------------------------------------------------------------------------

/// Interpolate between the two coordinate arrays.
///
/// This function computes `c1 + weight * (c2 - c1)` for each coordinate. It
/// clamps the weight to `0..=1` before use, so the result always lies between
/// the two inputs.
pub(crate) fn interpolate(
    weight: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    let weight = clamp01(weight);

    #[inline]
    fn lerp(weight: Float, c1: Float, c2: Float) -> Float {
        weight.mul_add(c2 - c1, c1)
    }

    [
        lerp(weight, coordinates1[0], coordinates2[0]),
        lerp(weight, coordinates1[1], coordinates2[1]),
        lerp(weight, coordinates1[2], coordinates2[2]),
    ]
}
