//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{ConfigOverrides, LoggingOverrides, PaletteOverrides, StorageOverrides};
use crate::format::{DisplayFormat, ExportFormat};
use crate::harmony::HarmonyMode;

/// CLI-compatible harmony mode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Five independent random colors
    Random,
    /// Base plus opposite hue
    Complementary,
    /// Base plus hues 30 degrees either side
    Analogous,
    /// Base plus hues 120 and 240 degrees away
    Triadic,
}

impl From<ModeArg> for HarmonyMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Random => HarmonyMode::Random,
            ModeArg::Complementary => HarmonyMode::Complementary,
            ModeArg::Analogous => HarmonyMode::Analogous,
            ModeArg::Triadic => HarmonyMode::Triadic,
        }
    }
}

/// CLI-compatible display format enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// #RRGGBB
    Hex,
    /// rgb(r, g, b)
    Rgb,
    /// hsl(h, s%, l%)
    Hsl,
}

impl From<FormatArg> for DisplayFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => DisplayFormat::Hex,
            FormatArg::Rgb => DisplayFormat::Rgb,
            FormatArg::Hsl => DisplayFormat::Hsl,
        }
    }
}

/// Export shape selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    /// CSS custom properties
    Css,
    /// JSON array of {name, value}
    Json,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Css => ExportFormat::Css,
            ExportArg::Json => ExportFormat::Json,
        }
    }
}

/// Harmony-based color palette generator.
#[derive(Parser, Debug)]
#[command(name = "hueloom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Load configuration from TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding saved palettes (default: platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log file path (default: <data dir>/hueloom.log)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Interactive palette editor (default)
    Tui(PaletteArgs),
    /// Print one generated palette
    Generate(GenerateArgs),
    /// Manage saved palettes
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

/// Mode and format selection shared by commands.
#[derive(Args, Debug, Default, Clone)]
pub struct PaletteArgs {
    /// Harmony mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Display format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Base color in any CSS format (random when omitted)
    #[arg(short, long, value_parser = parse_css_color)]
    pub base: Option<String>,

    /// Print the palette as CSS variables or JSON instead of one color per line
    #[arg(short, long, value_enum)]
    pub export: Option<ExportArg>,

    /// Seed for reproducible palettes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also append the palette to the saved collection
    #[arg(long)]
    pub save: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SavedAction {
    /// List saved palettes
    List {
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Print one saved palette
    Show {
        index: usize,
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        #[arg(short, long, value_enum)]
        export: Option<ExportArg>,
    },
    /// Save a palette given as 6-digit hex colors
    Add {
        #[arg(required = true, value_name = "HEX")]
        colors: Vec<String>,
    },
    /// Delete a saved palette (later entries shift down)
    Delete { index: usize },
}

impl Cli {
    /// Mode/format flags of the selected command, if it has any.
    fn palette_args(&self) -> Option<&PaletteArgs> {
        match &self.command {
            Some(CliCommand::Tui(args)) => Some(args),
            Some(CliCommand::Generate(args)) => Some(&args.palette),
            _ => None,
        }
    }

    /// Convert flags to sparse config overrides for Figment merging.
    ///
    /// Only flags that were given end up in the serialized overrides, so file settings
    /// survive where the command line is silent.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let palette = self.palette_args();

        ConfigOverrides {
            palette: PaletteOverrides {
                mode: palette.and_then(|p| p.mode).map(Into::into),
                format: palette.and_then(|p| p.format).map(Into::into),
            },
            storage: StorageOverrides {
                data_dir: self.data_dir.clone(),
            },
            logging: LoggingOverrides {
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
        }
    }
}

/// Accept anything CSS can name, keeping the original text for later parsing.
fn parse_css_color(s: &str) -> Result<String, String> {
    s.parse::<csscolorparser::Color>()
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}
