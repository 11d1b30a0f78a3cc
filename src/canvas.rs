//! Pixel surface drawn into terminal cells with half blocks

use crate::colors::to_color;
use crate::fire::palette::Rgb;
use crate::terminal::Terminal;

/// A raster target addressed by filled rectangles
pub trait Surface {
    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Rgb);
}

/// RGB pixels, two rows per terminal cell
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![(0, 0, 0); width * height],
        }
    }

    /// Canvas covering a terminal of `cols` x `rows` cells
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize, rows as usize * 2)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[x + self.width * y])
    }

    pub fn clear(&mut self) {
        self.pixels.fill((0, 0, 0));
    }

    /// Copy pixels into the terminal: top pixel as `▀` foreground, bottom
    /// pixel as background
    pub fn blit(&self, term: &mut Terminal) {
        let (cols, rows) = term.size();
        let cols = (cols as usize).min(self.width);
        let rows = (rows as usize).min(self.height.div_ceil(2));

        for cy in 0..rows {
            for cx in 0..cols {
                let top = self.pixels[cx + self.width * cy * 2];
                let bottom = self.pixel(cx, cy * 2 + 1).unwrap_or((0, 0, 0));
                term.set(
                    cx as i32,
                    cy as i32,
                    '▀',
                    Some(to_color(top)),
                    Some(to_color(bottom)),
                );
            }
        }
    }
}

impl Surface for PixelCanvas {
    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Rgb) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = self.width * py;
            self.pixels[row + x.min(x_end)..row + x_end].fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut canvas = PixelCanvas::new(4, 3);
        canvas.fill_rect(2, 1, 10, 10, (9, 9, 9));
        assert_eq!(canvas.pixel(1, 1), Some((0, 0, 0)));
        assert_eq!(canvas.pixel(2, 1), Some((9, 9, 9)));
        assert_eq!(canvas.pixel(3, 2), Some((9, 9, 9)));
        assert_eq!(canvas.pixel(3, 0), Some((0, 0, 0)));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn fill_rect_fully_outside_is_ignored() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.fill_rect(5, 5, 2, 2, (1, 1, 1));
        assert!((0..2).all(|y| (0..2).all(|x| canvas.pixel(x, y) == Some((0, 0, 0)))));
    }

    #[test]
    fn blit_packs_two_rows_per_cell() {
        let mut canvas = PixelCanvas::for_terminal(2, 1);
        canvas.fill_rect(0, 0, 2, 1, (255, 0, 0));
        canvas.fill_rect(0, 1, 2, 1, (0, 0, 255));

        let mut term = Terminal::offscreen(2, 1);
        canvas.blit(&mut term);

        let cell = term.get(1, 0).cloned().unwrap_or_default();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.fg, Some(to_color((255, 0, 0))));
        assert_eq!(cell.bg, Some(to_color((0, 0, 255))));
    }

    #[test]
    fn clear_blackens_every_pixel() {
        let mut canvas = PixelCanvas::new(3, 3);
        canvas.fill_rect(0, 0, 3, 3, (5, 5, 5));
        canvas.clear();
        assert_eq!(canvas.pixel(2, 2), Some((0, 0, 0)));
    }
}
