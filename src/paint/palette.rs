//! Colours.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// An RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Any colour at all.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(rng.gen_u8(), rng.gen_u8(), rng.gen_u8())
    }

    /// `#rrggbb`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colours offered in the studio's picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Orange,
        PaletteColor::Purple,
        PaletteColor::Black,
        PaletteColor::White,
    ];

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Red => Rgb::new(255, 0, 0),
            PaletteColor::Blue => Rgb::new(0, 0, 255),
            PaletteColor::Green => Rgb::new(0, 255, 0),
            PaletteColor::Yellow => Rgb::new(255, 255, 0),
            PaletteColor::Orange => Rgb::new(255, 165, 0),
            PaletteColor::Purple => Rgb::new(128, 0, 128),
            PaletteColor::Black => Rgb::BLACK,
            PaletteColor::White => Rgb::WHITE,
        }
    }

    /// Picker label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PaletteColor::Red => "❤️ Red",
            PaletteColor::Blue => "💙 Blue",
            PaletteColor::Green => "💚 Green",
            PaletteColor::Yellow => "💛 Yellow",
            PaletteColor::Orange => "🧡 Orange",
            PaletteColor::Purple => "💜 Purple",
            PaletteColor::Black => "🖤 Black",
            PaletteColor::White => "🤍 White",
        }
    }
}

impl From<PaletteColor> for Rgb {
    fn from(value: PaletteColor) -> Self {
        value.rgb()
    }
}
