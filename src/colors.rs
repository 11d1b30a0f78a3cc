use crate::fire::palette::Rgb;
use clap::ValueEnum;
use crossterm::event::KeyCode;
use serde::Deserialize;

/// Fire tint, applied as a channel swap on palette colors at render time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FireColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl FireColor {
    /// Reorder palette channels for this tint
    #[inline]
    pub fn permute(self, (r, g, b): Rgb) -> Rgb {
        match self {
            FireColor::Red => (r, g, b),
            FireColor::Green => (b, r, g),
            FireColor::Blue => (b, g, r),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FireColor::Red => "red",
            FireColor::Green => "green",
            FireColor::Blue => "blue",
        }
    }

    /// Map a color key to a tint. Returns None if the key isn't a color key.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('r') => Some(FireColor::Red),
            KeyCode::Char('g') => Some(FireColor::Green),
            KeyCode::Char('b') => Some(FireColor::Blue),
            _ => None,
        }
    }
}

/// Convert an RGB triple to a crossterm truecolor
pub fn to_color((r, g, b): Rgb) -> crossterm::style::Color {
    crossterm::style::Color::Rgb { r, g, b }
}
