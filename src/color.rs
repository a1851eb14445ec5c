//! Conversion between `#rrggbb` strings and RGB triples.
//!
//! Normalized colors are [`RGB<f64>`] with channels in \[0, 1\];
//! stored colors are [`RGB8`].  Quantization rounds half away from
//! zero (the semantics of [`f64::round`]), so that
//! `rgb_to_hex(hex_to_rgb(s)) == s.to_lowercase()` for every well
//! formed `s`.

use rgb::{RGB, RGB8};
use crate::PaletteError;

/// Pure white, the neutral anchor of sequential and diverging
/// gradients.
pub const WHITE: RGB<f64> = RGB { r: 1., g: 1., b: 1. };

/// Parse `#RRGGBB` (hex digits in either case) into a normalized
/// color.
///
/// # Example
///
/// ```
/// use rgb::RGB;
/// use tidyplots_palettes::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#FF0000")?, RGB::new(1., 0., 0.));
/// # Ok::<(), tidyplots_palettes::PaletteError>(())
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<RGB<f64>, PaletteError> {
    parse_hex(hex).map(normalize)
}

/// Format a normalized color as a lowercase `#rrggbb` string.
/// Channels outside \[0, 1\] are clamped; NaN channels become `00`.
///
/// ```
/// use tidyplots_palettes::rgb_to_hex;
/// assert_eq!(rgb_to_hex((1., 0., 0.)), "#ff0000");
/// ```
pub fn rgb_to_hex(c: impl Into<RGB<f64>>) -> String {
    to_hex(quantize(c.into()))
}

/// Parse `#RRGGBB` into 8-bit channels.
pub fn parse_hex(hex: &str) -> Result<RGB8, PaletteError> {
    let bytes = hex.as_bytes();
    // Checking every byte first keeps the slicing below on char
    // boundaries and rejects the `+` that `from_str_radix` accepts.
    if bytes.len() != 7 || bytes[0] != b'#'
        || !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
        return Err(PaletteError::InvalidColorFormat(hex.to_string()))
    }
    let channel = |k: usize| {
        u8::from_str_radix(&hex[k .. k + 2], 16)
            .map_err(|_| PaletteError::InvalidColorFormat(hex.to_string()))
    };
    Ok(RGB8 { r: channel(1)?, g: channel(3)?, b: channel(5)? })
}

/// Format 8-bit channels as `#rrggbb`.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Map 8-bit channels to \[0, 1\].
#[inline]
pub fn normalize(c: RGB8) -> RGB<f64> {
    RGB { r: c.r as f64 / 255., g: c.g as f64 / 255., b: c.b as f64 / 255. }
}

/// Map normalized channels to the nearest 8-bit values.
#[inline]
pub fn quantize(c: RGB<f64>) -> RGB8 {
    RGB8 { r: to_byte(c.r), g: to_byte(c.g), b: to_byte(c.b) }
}

#[inline]
fn to_byte(x: f64) -> u8 {
    // `as` saturates and sends NaN to 0.
    (x.clamp(0., 1.) * 255.).round() as u8
}

/// Color from a `0xRRGGBB` literal.
pub(crate) const fn rgb24(x: u32) -> RGB8 {
    RGB8 { r: (x >> 16) as u8, g: (x >> 8) as u8, b: x as u8 }
}
