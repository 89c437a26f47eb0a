//! Harmony rules: derive companion colors from a base color.

use serde::{Deserialize, Serialize};

use palette::Srgb;
use rand::Rng;

use crate::convert::{Hsl, hsl_to_rgb, random_color, rgb_to_hsl};

/// Harmony rule used to derive a palette from its base color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyMode {
    /// Independent random colors
    #[default]
    Random,
    /// Base plus the opposite hue
    Complementary,
    /// Base plus its neighbours 30 degrees either side
    Analogous,
    /// Base plus two hues evenly spaced around the wheel
    Triadic,
}

impl HarmonyMode {
    /// All modes in selector order.
    pub const ALL: [Self; 4] = [
        Self::Random,
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
    ];

    /// Number of colors in a palette of this mode, base included.
    pub fn size(self) -> usize {
        match self {
            Self::Random => 5,
            Self::Complementary => 2,
            Self::Analogous | Self::Triadic => 3,
        }
    }

    /// Hue rotations (degrees) applied to the base for each companion.
    ///
    /// Empty for [`HarmonyMode::Random`], whose companions are not hue-derived.
    pub fn hue_offsets(self) -> &'static [i32] {
        match self {
            Self::Random => &[],
            Self::Complementary => &[180],
            Self::Analogous => &[30, -30],
            Self::Triadic => &[120, 240],
        }
    }

    /// Get the next mode in sequence.
    pub fn next(self) -> Self {
        match self {
            Self::Random => Self::Complementary,
            Self::Complementary => Self::Analogous,
            Self::Analogous => Self::Triadic,
            Self::Triadic => Self::Random,
        }
    }

    /// Get the previous mode in sequence.
    pub fn prev(self) -> Self {
        match self {
            Self::Random => Self::Triadic,
            Self::Complementary => Self::Random,
            Self::Analogous => Self::Complementary,
            Self::Triadic => Self::Analogous,
        }
    }

    /// Display name for the mode.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
        }
    }
}

impl std::fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for HarmonyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown harmony mode: {}", s))
    }
}

/// Rotate a hue by `degrees`, normalizing into [0, 360). Saturation and lightness are kept.
pub fn rotate_hue(hsl: Hsl, degrees: i32) -> Hsl {
    let hue = (i32::from(hsl.hue) + degrees).rem_euclid(360) as u16;
    Hsl { hue, ..hsl }
}

/// Companion colors for `base` under `mode`, excluding the base itself.
///
/// Hue-derived companions share the base's rounded saturation and lightness.
/// Random companions are drawn from `rng` and ignore the base.
pub fn companions<R: Rng + ?Sized>(
    base: Srgb<u8>,
    mode: HarmonyMode,
    rng: &mut R,
) -> Vec<Srgb<u8>> {
    if mode == HarmonyMode::Random {
        return (1..mode.size()).map(|_| random_color(rng)).collect();
    }

    let hsl = rgb_to_hsl(base);
    mode.hue_offsets()
        .iter()
        .map(|&offset| hsl_to_rgb(rotate_hue(hsl, offset)))
        .collect()
}

/// The full harmony for `base`: the base at position 0 followed by its companions.
///
/// The result always has `mode.size()` colors.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use rand::{SeedableRng, rngs::StdRng};
/// use hueloom::harmony::{HarmonyMode, harmonize};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let colors = harmonize(Srgb::new(255u8, 0, 0), HarmonyMode::Complementary, &mut rng);
/// assert_eq!(colors, vec![Srgb::new(255u8, 0, 0), Srgb::new(0u8, 255, 255)]);
/// ```
pub fn harmonize<R: Rng + ?Sized>(
    base: Srgb<u8>,
    mode: HarmonyMode,
    rng: &mut R,
) -> Vec<Srgb<u8>> {
    let mut colors = Vec::with_capacity(mode.size());
    colors.push(base);
    colors.extend(companions(base, mode, rng));
    colors
}
