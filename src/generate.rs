//! Palette generation logic.

use palette::Srgb;
use rand::Rng;
use tracing::debug;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::convert::random_color;
use crate::harmony::{HarmonyMode, harmonize};

/// A palette position: a color plus whether it survives regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSlot {
    pub color: Srgb<u8>,
    pub locked: bool,
}

impl PaletteSlot {
    /// An unlocked slot.
    pub fn new(color: Srgb<u8>) -> Self {
        Self {
            color,
            locked: false,
        }
    }

    /// A locked slot.
    pub fn locked(color: Srgb<u8>) -> Self {
        Self {
            color,
            locked: true,
        }
    }
}

/// Configuration for palette generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Harmony rule (determines palette size)
    pub mode: HarmonyMode,
    /// Fixed generator color. `None` draws a fresh random base.
    pub base: Option<Srgb<u8>>,
}

/// Generate a new palette for `mode`, keeping every locked slot of `previous` that still
/// fits in the new size.
///
/// Slot 0 holds a fresh random base unless it was locked. Locked indices beyond the new
/// size are dropped along with their colors.
pub fn generate<R: Rng + ?Sized>(
    mode: HarmonyMode,
    previous: &[PaletteSlot],
    rng: &mut R,
) -> Vec<PaletteSlot> {
    let base = random_color(rng);
    generate_from_base(mode, base, previous, rng)
}

/// Generate a palette around a caller-chosen base color.
///
/// Same lock semantics as [`generate`].
#[cfg_attr(
    debug_assertions,
    instrument(skip(previous, rng), fields(previous_len = previous.len()))
)]
pub fn generate_from_base<R: Rng + ?Sized>(
    mode: HarmonyMode,
    base: Srgb<u8>,
    previous: &[PaletteSlot],
    rng: &mut R,
) -> Vec<PaletteSlot> {
    let mut slots: Vec<PaletteSlot> = harmonize(base, mode, rng)
        .into_iter()
        .map(PaletteSlot::new)
        .collect();

    for (index, kept) in previous.iter().enumerate().filter(|(_, slot)| slot.locked) {
        match slots.get_mut(index) {
            Some(slot) => *slot = PaletteSlot::locked(kept.color),
            None => debug!(index, %mode, "Dropping lock outside palette size"),
        }
    }

    debug!(
        %mode,
        size = slots.len(),
        locked = slots.iter().filter(|s| s.locked).count(),
        "Generated palette"
    );

    slots
}

/// Generate from a [`GenerateConfig`], with no previous slots.
pub fn generate_with_config<R: Rng + ?Sized>(
    config: &GenerateConfig,
    rng: &mut R,
) -> Vec<PaletteSlot> {
    match config.base {
        Some(base) => generate_from_base(config.mode, base, &[], rng),
        None => generate(config.mode, &[], rng),
    }
}

/// Replace the color of slot 0 in place, keeping its lock flag.
///
/// Companions are not re-derived. Returns `false` when there is no slot 0.
pub fn with_base_color(slots: &mut [PaletteSlot], color: Srgb<u8>) -> bool {
    match slots.first_mut() {
        Some(slot) => {
            slot.color = color;
            true
        }
        None => false,
    }
}
