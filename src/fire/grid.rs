//! Fire simulation state and the per-frame propagation rule

use super::palette::MAX_INTENSITY;
use crate::colors::FireColor;
use crate::config::Direction;
use rand::prelude::*;
use tracing::debug;

/// Parameters read by every step. Not validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireParams {
    /// Exclusive upper bound on the random cooling per cell per step
    pub decay_size: u32,
    pub direction: Direction,
    /// Render-only tint
    pub color: FireColor,
}

/// Row-major intensity buffer with a heat source along the bottom row
pub struct FireGrid {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    params: FireParams,
    rng: StdRng,
}

impl FireGrid {
    /// Create a grid with no buffer; call `create_fire_structure` before use
    pub fn new(width: usize, height: usize, params: FireParams, rng: StdRng) -> Self {
        Self {
            width,
            height,
            pixels: Vec::new(),
            params,
            rng,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn params(&self) -> FireParams {
        self.params
    }

    /// Flat intensity buffer, `column + width * row`
    pub fn intensities(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at a cell, or None outside the grid or before allocation
    pub fn intensity(&self, column: usize, row: usize) -> Option<u8> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.pixels.get(column + self.width * row).copied()
    }

    /// Allocate the buffer, every cell cold
    pub fn create_fire_structure(&mut self) {
        self.pixels.clear();
        self.pixels.resize(self.width * self.height, 0);
        debug!(width = self.width, height = self.height, "fire structure created");
    }

    /// Heat the bottom row to full intensity
    pub fn create_fire_source(&mut self) {
        self.fill_source_row(MAX_INTENSITY);
        debug!("fire source started");
    }

    /// Cool the bottom row so the flames die out
    pub fn stop_fire_source(&mut self) {
        self.fill_source_row(0);
        debug!("fire source stopped");
    }

    /// True if any cell of the source row is hot
    pub fn is_burning(&self) -> bool {
        self.source_row().is_some_and(|row| row.iter().any(|&v| v > 0))
    }

    /// Advance the simulation one step.
    ///
    /// Rows run top to bottom and each row reads only the row beneath it,
    /// which has not been written yet this step, so the in-place pass always
    /// sees pre-step source values. The bottom row has nothing below it and
    /// is left alone. Drifted writes are clamped to the row.
    pub fn update_fire_structure(&mut self) {
        let (w, h) = (self.width, self.height);
        if w == 0 || h == 0 || self.pixels.len() != w * h {
            return;
        }

        for row in 0..h - 1 {
            for column in 0..w {
                let decay = self.draw_decay();
                let below = self.pixels[column + w * (row + 1)];
                let value = u32::from(below).saturating_sub(decay) as u8;

                let drift = decay as usize;
                let target = match self.params.direction {
                    Direction::Left => column.saturating_sub(drift),
                    Direction::Right => column.saturating_add(drift).min(w - 1),
                    Direction::Center => column,
                };
                self.pixels[target + w * row] = value;
            }
        }
    }

    pub fn set_new_size(&mut self, decay_size: u32) {
        self.params.decay_size = decay_size;
        debug!(decay_size, "decay size changed");
    }

    pub fn set_new_direction(&mut self, direction: Direction) {
        self.params.direction = direction;
        debug!(direction = direction.label(), "direction changed");
    }

    pub fn set_new_color(&mut self, color: FireColor) {
        self.params.color = color;
        debug!(color = color.label(), "color changed");
    }

    /// Build a fresh grid of a new size, keeping parameters and whether the
    /// source was burning
    pub fn resized(self, width: usize, height: usize) -> Self {
        let burning = self.is_burning();
        let mut grid = Self::new(width, height, self.params, self.rng);
        grid.create_fire_structure();
        if burning {
            grid.create_fire_source();
        }
        debug!(width, height, burning, "fire grid resized");
        grid
    }

    fn draw_decay(&mut self) -> u32 {
        if self.params.decay_size == 0 {
            0
        } else {
            self.rng.gen_range(0..self.params.decay_size)
        }
    }

    fn source_row(&self) -> Option<&[u8]> {
        let start = (self.width * self.height).checked_sub(self.width)?;
        self.pixels.get(start..)
    }

    fn fill_source_row(&mut self, value: u8) {
        let Some(start) = (self.width * self.height).checked_sub(self.width) else {
            return;
        };
        if let Some(row) = self.pixels.get_mut(start..) {
            row.fill(value);
        }
    }
}
