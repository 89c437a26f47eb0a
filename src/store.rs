//! Persisted collection of saved palettes.
//!
//! The whole collection lives under a single storage key as a JSON array of palettes,
//! each an array of `#RRGGBB` strings. Entries are addressed by position only: deleting
//! one shifts every later entry down by one.

use std::path::{Path, PathBuf};

use palette::Srgb;
use tracing::{info, warn};

use crate::convert::{hex_to_rgb, parse_rgb_function, rgb_to_hex};
use crate::error::PaletteError;
use crate::generate::PaletteSlot;

/// Default storage key (and file stem for [`FileStorage`]).
pub const DEFAULT_KEY: &str = "saved_palettes";

/// Durable key-value capability holding the serialized collection.
pub trait Storage {
    /// Read the serialized collection. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, PaletteError>;

    /// Replace the serialized collection.
    fn write(&mut self, contents: &str) -> Result<(), PaletteError>;
}

/// In-process storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    /// Storage pre-seeded with serialized contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    /// The raw serialized collection, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, PaletteError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), PaletteError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage for `key` inside `dir` (`<dir>/<key>.json`).
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{key}.json")),
        }
    }

    /// Platform data directory for the application.
    ///
    /// - Linux: `~/.local/share/hueloom/`
    /// - macOS: `~/Library/Application Support/hueloom/`
    /// - Windows: `%APPDATA%\hueloom\`
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("hueloom"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, PaletteError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PaletteError::StorageUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), PaletteError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents).map_err(|e| {
            PaletteError::StorageUnavailable(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// A saved palette snapshot and its current position in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPalette {
    pub index: usize,
    pub colors: Vec<Srgb<u8>>,
}

/// Saved-palette collection over an injected [`Storage`].
#[derive(Debug, Clone, Default)]
pub struct PaletteStore<S> {
    storage: S,
}

impl<S: Storage> PaletteStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a copy of `colors`. Returns the index it was stored at.
    pub fn save(&mut self, colors: &[Srgb<u8>]) -> Result<usize, PaletteError> {
        let mut raw = self.read_raw()?;
        raw.push(colors.iter().map(|&c| rgb_to_hex(c)).collect());
        self.write_raw(&raw)?;

        let index = raw.len() - 1;
        info!(index, colors = colors.len(), "Saved palette");
        Ok(index)
    }

    /// All saved palettes in insertion order.
    pub fn list(&self) -> Result<Vec<SavedPalette>, PaletteError> {
        Ok(self
            .read_raw()?
            .iter()
            .enumerate()
            .map(|(index, stored)| SavedPalette {
                index,
                colors: decode_palette(stored),
            })
            .collect())
    }

    /// Remove the palette at `index`.
    ///
    /// Returns `Ok(false)` without touching storage when `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Result<bool, PaletteError> {
        let mut raw = self.read_raw()?;
        if index >= raw.len() {
            return Ok(false);
        }

        raw.remove(index);
        self.write_raw(&raw)?;
        info!(index, remaining = raw.len(), "Deleted palette");
        Ok(true)
    }

    /// Fresh unlocked slots built from the snapshot at `index`, or `None` when out of range.
    pub fn load(&self, index: usize) -> Result<Option<Vec<PaletteSlot>>, PaletteError> {
        let slots = self.read_raw()?.get(index).map(|stored| {
            decode_palette(stored)
                .into_iter()
                .map(PaletteSlot::new)
                .collect::<Vec<_>>()
        });

        if let Some(ref slots) = slots {
            info!(index, colors = slots.len(), "Loaded palette");
        }
        Ok(slots)
    }

    /// Stored strings as written, so entries that fail to decode survive rewrites.
    fn read_raw(&self) -> Result<Vec<Vec<String>>, PaletteError> {
        let Some(contents) = self.storage.read()? else {
            return Ok(Vec::new());
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn write_raw(&mut self, raw: &[Vec<String>]) -> Result<(), PaletteError> {
        let contents = serde_json::to_string(raw)?;
        self.storage.write(&contents)
    }
}

fn decode_palette(stored: &[String]) -> Vec<Srgb<u8>> {
    stored.iter().filter_map(|s| decode_color(s)).collect()
}

/// Decode one stored color: `#RRGGBB`, or the older `rgb(r, g, b)` form.
fn decode_color(stored: &str) -> Option<Srgb<u8>> {
    let decoded = if stored.trim_start().starts_with("rgb") {
        parse_rgb_function(stored)
    } else {
        hex_to_rgb(stored.trim())
    };

    match decoded {
        Ok(color) => Some(color),
        Err(e) => {
            warn!(stored, error = %e, "Skipping unreadable saved color");
            None
        }
    }
}
