//! TUI widget components.

mod help;
mod palette;
mod saved;

pub use help::draw_help_overlay;
pub use palette::{contrast_color, draw_palette};
pub use saved::draw_saved;
