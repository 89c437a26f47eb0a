//! Error taxonomy shared by the palette core.

/// Errors surfaced by palette operations.
///
/// None of these are fatal to a session: the active palette is left untouched and the
/// caller is expected to report the message to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Malformed color string (not exactly six hex digits, or unparseable CSS color)
    InvalidFormat(String),
    /// Persistence read, write or decode failed
    StorageUnavailable(String),
    /// Copy to the clipboard failed
    ClipboardDenied(String),
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid color format: {}", s),
            Self::StorageUnavailable(s) => write!(f, "Storage unavailable: {}", s),
            Self::ClipboardDenied(s) => write!(f, "Clipboard unavailable: {}", s),
        }
    }
}

impl std::error::Error for PaletteError {}

impl From<std::io::Error> for PaletteError {
    fn from(e: std::io::Error) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(e: serde_json::Error) -> Self {
        Self::StorageUnavailable(format!("corrupt saved palettes: {}", e))
    }
}
