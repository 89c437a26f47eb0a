//! Display strings and export text for palettes.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::convert::{rgb_to_hex, rgb_to_hsl};

/// How a color is shown to the user. Never changes the underlying color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl DisplayFormat {
    /// All formats in selector order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Get the next format in sequence.
    pub fn next(self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hsl,
            Self::Hsl => Self::Hex,
        }
    }

    /// Display name for the format.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl std::fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown display format: {}", s))
    }
}

/// Whole-palette export shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// `:root { --color-NAME: VALUE; }` custom-property block
    #[default]
    Css,
    /// JSON array of `{name, value}` records
    Json,
}

/// One exported color: its display string and its CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub name: String,
    pub value: String,
}

/// Render a color in the requested display format.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use hueloom::format::{DisplayFormat, format_color};
///
/// let red = Srgb::new(255u8, 0, 0);
/// assert_eq!(format_color(red, DisplayFormat::Hex), "#FF0000");
/// assert_eq!(format_color(red, DisplayFormat::Rgb), "rgb(255, 0, 0)");
/// assert_eq!(format_color(red, DisplayFormat::Hsl), "hsl(0, 100%, 50%)");
/// ```
pub fn format_color(color: Srgb<u8>, format: DisplayFormat) -> String {
    match format {
        DisplayFormat::Hex => rgb_to_hex(color),
        DisplayFormat::Rgb => format!("rgb({}, {}, {})", color.red, color.green, color.blue),
        DisplayFormat::Hsl => rgb_to_hsl(color).to_string(),
    }
}

/// Strip every character that is not an ASCII letter or digit.
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Export records: the display string in `format` as name, the computed `rgb()` form as value.
pub fn export_entries(colors: &[Srgb<u8>], format: DisplayFormat) -> Vec<ExportEntry> {
    colors
        .iter()
        .map(|&color| ExportEntry {
            name: format_color(color, format),
            value: format_color(color, DisplayFormat::Rgb),
        })
        .collect()
}

/// CSS custom-property block, one `--color-<name>: <value>;` line per color.
pub fn export_css(colors: &[Srgb<u8>], format: DisplayFormat) -> String {
    let lines = export_entries(colors, format)
        .iter()
        .map(|entry| format!("--color-{}: {};", sanitize_name(&entry.name), entry.value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(":root {{\n{}\n}}", lines)
}

/// JSON array of `{"name", "value"}` records with 2-space indentation.
pub fn export_json(colors: &[Srgb<u8>], format: DisplayFormat) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_entries(colors, format))
}

/// Export in the given shape.
pub fn export(
    colors: &[Srgb<u8>],
    format: DisplayFormat,
    shape: ExportFormat,
) -> serde_json::Result<String> {
    match shape {
        ExportFormat::Css => Ok(export_css(colors, format)),
        ExportFormat::Json => export_json(colors, format),
    }
}
