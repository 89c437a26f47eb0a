//! Harmony-based color palette generator.
//!
//! Palettes are built from a base color and a harmony rule, individual swatches can be
//! locked across regenerations, and palettes can be saved, reloaded and exported as CSS
//! custom properties or JSON.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod generate;
pub mod harmony;
pub mod logging;
pub mod state;
pub mod store;
pub mod tui;
