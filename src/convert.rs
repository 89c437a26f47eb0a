//! Conversions between hex strings, 8-bit sRGB and integer HSL.
//!
//! sRGB (`Srgb<u8>`) is the canonical color representation. Hex <-> RGB is exact.
//! RGB <-> HSL rounds every component to an integer, so a round trip may drift by one
//! step per channel.

use std::str::FromStr;

use csscolorparser::Color as CssColor;
use palette::{Hsl as HslF64, IntoColor, Srgb, encoding};
use rand::Rng;

use crate::error::PaletteError;

/// Integer HSL triple: hue in degrees (0-359), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Build an HSL triple, wrapping the hue into 0-359 and clamping percentages to 100.
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Parse a six-digit hex color (case-insensitive, optional leading `#`).
///
/// Shorthand forms such as `#fff` are rejected.
///
/// # Example
///
/// ```
/// use hueloom::convert::hex_to_rgb;
///
/// let color = hex_to_rgb("#1a1a2e").unwrap();
/// assert_eq!((color.red, color.green, color.blue), (0x1a, 0x1a, 0x2e));
/// assert!(hex_to_rgb("#fff").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Srgb<u8>, PaletteError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidFormat(format!(
            "expected 6 hex digits, got '{}'",
            hex
        )));
    }

    // palette's FromStr expects hex chars without #
    Srgb::from_str(digits).map_err(|e| PaletteError::InvalidFormat(format!("'{}': {}", hex, e)))
}

/// Format a color as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Convert sRGB to integer HSL.
///
/// Achromatic colors (r = g = b) map to hue 0 and saturation 0.
pub fn rgb_to_hsl(color: Srgb<u8>) -> Hsl {
    let hsl: HslF64<encoding::Srgb, f64> = color.into_format::<f64>().into_color();

    // A hue of 359.5 or above rounds up to a full turn
    let hue = (hsl.hue.into_positive_degrees().round() as u16) % 360;

    Hsl {
        hue,
        saturation: (hsl.saturation * 100.0).round().clamp(0.0, 100.0) as u8,
        lightness: (hsl.lightness * 100.0).round().clamp(0.0, 100.0) as u8,
    }
}

/// Convert integer HSL back to sRGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Srgb<u8> {
    let hsl = HslF64::<encoding::Srgb, f64>::new(
        f64::from(hsl.hue % 360),
        f64::from(hsl.saturation.min(100)) / 100.0,
        f64::from(hsl.lightness.min(100)) / 100.0,
    );
    let rgb: Srgb<f64> = hsl.into_color();

    Srgb::new(
        channel_to_u8(rgb.red),
        channel_to_u8(rgb.green),
        channel_to_u8(rgb.blue),
    )
}

/// Parse a hex color straight into integer HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, PaletteError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Parse the `rgb(r, g, b)` functional notation.
///
/// Older saved collections stored colors in this form.
pub fn parse_rgb_function(input: &str) -> Result<Srgb<u8>, PaletteError> {
    let invalid =
        || PaletteError::InvalidFormat(format!("expected rgb(r, g, b), got '{}'", input));

    let inner = input
        .trim()
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let channels = inner
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match channels.as_slice() {
        [r, g, b] => Ok(Srgb::new(*r, *g, *b)),
        _ => Err(invalid()),
    }
}

/// Parse any CSS color string into Srgb<u8>.
///
/// Supports: hex (#RRGGBB, #RGB), rgb(), hsl(), named colors, etc. Alpha is discarded.
pub fn parse_color(input: &str) -> Result<Srgb<u8>, PaletteError> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| PaletteError::InvalidFormat(format!("'{}': {}", input, e)))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}

/// Draw a uniformly random 24-bit color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Srgb<u8> {
    Srgb::new(rng.random(), rng.random(), rng.random())
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
