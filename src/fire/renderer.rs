//! Paints a fire grid onto a raster surface

use super::grid::FireGrid;
use super::palette::{Rgb, MAX_INTENSITY, PALETTE};
use crate::canvas::Surface;
use crate::colors::FireColor;

/// Maps intensities through a palette and tint onto surface rectangles
pub struct FireRenderer {
    palette: &'static [Rgb; MAX_INTENSITY as usize + 1],
}

impl Default for FireRenderer {
    fn default() -> Self {
        Self { palette: &PALETTE }
    }
}

impl FireRenderer {
    /// Color for one intensity under a tint
    #[inline]
    pub fn fire_color(&self, intensity: u8, color: FireColor) -> Rgb {
        color.permute(self.palette[intensity.min(MAX_INTENSITY) as usize])
    }

    /// Paint every grid cell as a `width / fire_width` by
    /// `height / fire_height` rectangle. Reads the grid only.
    pub fn render_fire_canvas<S: Surface>(
        &self,
        grid: &FireGrid,
        surface: &mut S,
        width: usize,
        height: usize,
    ) {
        let (fire_w, fire_h) = (grid.width(), grid.height());
        let cells = grid.intensities();
        if fire_w == 0 || fire_h == 0 || cells.len() != fire_w * fire_h {
            return;
        }

        let cell_w = width / fire_w;
        let cell_h = height / fire_h;
        if cell_w == 0 || cell_h == 0 {
            return;
        }

        let color = grid.params().color;
        for (row, line) in cells.chunks_exact(fire_w).enumerate() {
            for (column, &intensity) in line.iter().enumerate() {
                surface.fill_rect(
                    cell_w * column,
                    cell_h * row,
                    cell_w,
                    cell_h,
                    self.fire_color(intensity, color),
                );
            }
        }
    }
}
