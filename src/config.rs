use crate::colors::FireColor;
use clap::ValueEnum;
use serde::Deserialize;

/// Default cooling bound, matching a mid-position height slider
pub const DEFAULT_DECAY: u32 = 3;
/// Default seconds per frame
pub const DEFAULT_TIME_STEP: f32 = 0.03;
/// Frames simulated before dumping in print mode
pub const DEFAULT_PRINT_FRAMES: u32 = 120;

/// Horizontal drift applied when heat moves up a row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
    Center,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Center => "center",
        }
    }
}

/// Configuration for a fire run, resolved from CLI and settings file
#[derive(Clone, Debug)]
pub struct FireConfig {
    /// Grid columns; `None` follows the terminal width
    pub width: Option<usize>,
    /// Grid rows; `None` follows twice the terminal height
    pub height: Option<usize>,
    pub decay: u32,
    pub direction: Direction,
    pub color: FireColor,
    pub time_step: f32,
    pub seed: Option<u64>,
    pub print: bool,
    pub frames: u32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            decay: DEFAULT_DECAY,
            direction: Direction::default(),
            color: FireColor::default(),
            time_step: DEFAULT_TIME_STEP,
            seed: None,
            print: false,
            frames: DEFAULT_PRINT_FRAMES,
        }
    }
}
