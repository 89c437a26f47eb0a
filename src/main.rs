//! CLI entry point for hueloom.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail};
use palette::Srgb;
use rand::{SeedableRng, rngs::StdRng};

use hueloom::cli::{Cli, CliCommand, ExportArg, FormatArg, GenerateArgs, SavedAction};
use hueloom::config::AppConfig;
use hueloom::convert::{hex_to_rgb, parse_color};
use hueloom::format::{DisplayFormat, export, format_color};
use hueloom::generate::{GenerateConfig, generate_with_config};
use hueloom::logging::init_logging;
use hueloom::store::{FileStorage, PaletteStore};
use hueloom::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "hueloom", &mut io::stdout());
        return Ok(());
    }

    let config_path = cli.config.clone().or_else(AppConfig::default_path);
    let config = AppConfig::resolve(config_path.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    let _guard = init_logging(&config);

    let store = PaletteStore::new(config.storage());

    match cli.command {
        None | Some(CliCommand::Tui(_)) => tui::run(&config, store),
        Some(CliCommand::Generate(args)) => run_generate(&config, store, &args),
        Some(CliCommand::Saved { action }) => run_saved(&config, store, action),
    }
}

fn run_generate(
    config: &AppConfig,
    mut store: PaletteStore<FileStorage>,
    args: &GenerateArgs,
) -> Result<()> {
    let base = args
        .base
        .as_deref()
        .map(parse_color)
        .transpose()
        .wrap_err("Invalid base color")?;

    let generate_config = GenerateConfig {
        mode: config.palette.mode,
        base,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let slots = generate_with_config(&generate_config, &mut rng);
    let colors: Vec<_> = slots.iter().map(|slot| slot.color).collect();

    print_colors(&colors, config.palette.format, args.export)?;

    if args.save {
        let index = store.save(&colors)?;
        eprintln!("Saved palette {index}");
    }

    Ok(())
}

fn run_saved(
    config: &AppConfig,
    mut store: PaletteStore<FileStorage>,
    action: SavedAction,
) -> Result<()> {
    match action {
        SavedAction::List { format } => {
            let format = resolve_format(config, format);
            let saved = store.list()?;
            if saved.is_empty() {
                println!("No saved palettes");
            }
            for palette in saved {
                let values: Vec<String> = palette
                    .colors
                    .iter()
                    .map(|&color| format_color(color, format))
                    .collect();
                println!("{}: {}", palette.index, values.join("  "));
            }
        }
        SavedAction::Show {
            index,
            format,
            export,
        } => {
            let Some(slots) = store.load(index)? else {
                bail!("No saved palette at index {index}");
            };
            let colors: Vec<_> = slots.iter().map(|slot| slot.color).collect();
            print_colors(&colors, resolve_format(config, format), export)?;
        }
        SavedAction::Add { colors } => {
            let colors = colors
                .iter()
                .map(|hex| hex_to_rgb(hex))
                .collect::<Result<Vec<_>, _>>()?;
            let index = store.save(&colors)?;
            println!("Saved palette {index}");
        }
        SavedAction::Delete { index } => {
            if store.delete(index)? {
                println!("Deleted palette {index}");
            } else {
                eprintln!("No saved palette at index {index}");
            }
        }
    }

    Ok(())
}

fn resolve_format(config: &AppConfig, arg: Option<FormatArg>) -> DisplayFormat {
    arg.map(Into::into).unwrap_or(config.palette.format)
}

fn print_colors(
    colors: &[Srgb<u8>],
    format: DisplayFormat,
    shape: Option<ExportArg>,
) -> Result<()> {
    match shape {
        Some(shape) => {
            let text = export(colors, format, shape.into()).wrap_err("Failed to export palette")?;
            println!("{text}");
        }
        None => {
            for &color in colors {
                println!("{}", format_color(color, format));
            }
        }
    }
    Ok(())
}
