//! Paint Studio: a pixel canvas with a palette, brush sizes and a gallery.

mod canvas;
mod config;
mod palette;
mod studio;

pub use canvas::Canvas;
pub use config::PaintSettings;
pub use palette::{PaletteColor, Rgb};
pub use studio::{Artwork, PaintEvent, PaintOutcome, PaintStudio};
