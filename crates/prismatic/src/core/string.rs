use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a color in hexadecimal format.
///
/// This function trims surrounding white space and an optional leading `#`.
/// It accepts three digits for `RGB`, six digits for `RRGGBB`, and eight digits
/// for `AARRGGBB`, in upper or lower case. If successful, it returns the three
/// coordinates and the alpha channel as unsigned bytes. Colors without alpha
/// are opaque.
pub(crate) fn parse_hex(s: &str) -> Result<([u8; 3], u8), ColorFormatError> {
    let result = parse_digits(s);
    if let Err(error) = &result {
        log::debug!("rejected hex color {:?}: {}", s, error);
    }
    result
}

fn parse_digits(s: &str) -> Result<([u8; 3], u8), ColorFormatError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    // Since the digits are ASCII, byte offsets are character offsets.
    fn parse_byte(digits: &str, index: usize, width: usize) -> Result<u8, ColorFormatError> {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedLength)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }

        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(if width == 1 { 16 * n + n } else { n })
    }

    match digits.len() {
        3 | 6 => {
            let width = digits.len() / 3;
            let r = parse_byte(digits, 0, width)?;
            let g = parse_byte(digits, 1, width)?;
            let b = parse_byte(digits, 2, width)?;
            Ok(([r, g, b], 0xff))
        }
        8 => {
            let a = parse_byte(digits, 0, 2)?;
            let r = parse_byte(digits, 1, 2)?;
            let g = parse_byte(digits, 2, 2)?;
            let b = parse_byte(digits, 3, 2)?;
            Ok(([r, g, b], a))
        }
        _ => Err(ColorFormatError::UnexpectedLength),
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;
    match space {
        Rgb => "color(srgb ",
        Hsb => "hsb(",
        Hsl => "hsl(",
        Lab => "lab(",
        Xyz => "color(xyz-d65 ",
    }
}

/// Write a single number without trailing zeros.
fn format_number(
    value: Float,
    factor: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    // Formatting floats with a precision produces trailing zeros. Rounding
    // avoids them, for the most part. If the fractional part is zero, we do
    // need an explicit precision of zero.
    let mut c = (value * factor).round() / factor;
    if c == 0.0 {
        c = 0.0;
    }

    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

/// Format the color as a string.
///
/// This function formats the given coordinates for the given color space in
/// CSS-like function syntax with space-separated arguments. It appends the
/// alpha channel after a slash if there is one. It respects the
/// formatter's precision, defaulting to 5 digits past the decimal. Since hues
/// are up to two orders of magnitude larger than other coordinates, this
/// function uses a precision smaller by 2 for them. `hsb()` is not a CSS
/// function; it mirrors `hsl()`.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(css_prefix(space))?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        let factor = if space.is_polar() && index == 0 {
            factor / 100.0
        } else {
            factor
        };

        format_number(*coordinate, factor, f)?;
        if index < 2 {
            f.write_str(" ")?;
        }
    }

    if let Some(alpha) = alpha {
        f.write_str(" / ")?;
        format_number(alpha, factor, f)?;
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#123")?, ([0x11_u8, 0x22, 0x33], 0xff));
        assert_eq!(parse_hex("#112233")?, ([0x11_u8, 0x22, 0x33], 0xff));
        assert_eq!(parse_hex("abc")?, ([0xaa_u8, 0xbb, 0xcc], 0xff));
        assert_eq!(parse_hex("  #FfA07a  ")?, ([0xff_u8, 0xa0, 0x7a], 0xff));
        assert_eq!(parse_hex("#80FF0000")?, ([0xff_u8, 0, 0], 0x80));
        assert_eq!(parse_hex("#00FF0080")?, ([0xff_u8, 0, 0x80], 0));

        for s in ["", "#", "#ff", "#ffff", "#12345", "#1234567", "#123456789"] {
            assert_eq!(parse_hex(s), Err(ColorFormatError::UnexpectedLength));
        }

        assert_eq!(
            parse_hex("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#00000g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+f+f+f"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("##12"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_format() {
        // Color as Display directly invokes format().
        use crate::Color;

        let clr = Color::rgb(0.3, 0.336, 0.123456);
        assert_eq!(clr.to_string(), "color(srgb 0.3 0.336 0.12346)");
        assert_eq!(format!("{:.2}", clr), "color(srgb 0.3 0.34 0.12)");
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_string(), "color(srgb 1 0 0)");
        assert_eq!(
            Color::hsl(216.97297, 0.8, 0.5).to_string(),
            "hsl(216.973 0.8 0.5)"
        );
        assert_eq!(Color::hsb(120.0, 1.0, 1.0).to_string(), "hsb(120 1 1)");
        assert_eq!(Color::lab(50.0, -20.5, 10.0).to_string(), "lab(50 -20.5 10)");
        assert_eq!(
            Color::xyz(0.25, 0.5, 0.75).to_string(),
            "color(xyz-d65 0.25 0.5 0.75)"
        );
        assert_eq!(
            Color::rgb(1.0, 1.0, 1.0).with_alpha(0.5).to_string(),
            "color(srgb 1 1 1 / 0.5)"
        );

        // Fully transparent colors still show their alpha, opaque ones don't.
        let clear = Color::rgb(1.0, 1.0, 1.0).with_alpha(0.0);
        assert!(!clear.is_opaque());
        assert_eq!(clear.to_string(), "color(srgb 1 1 1 / 0)");
        let solid = clear.with_alpha(7.0);
        assert!(solid.is_opaque());
        assert_eq!(solid.to_string(), "color(srgb 1 1 1)");
    }
}
