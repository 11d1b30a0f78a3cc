//! Drives the engine the way a frame loop does, through the public API only
use doomfire::canvas::{PixelCanvas, Surface};
use doomfire::colors::FireColor;
use doomfire::config::Direction;
use doomfire::fire::palette::{MAX_INTENSITY, PALETTE};
use doomfire::fire::FireEngine;

#[test]
fn fire_lifecycle() {
    let mut engine = FireEngine::new(50, 50, 3, Direction::Left, FireColor::Red);
    engine.create_fire_structure();
    assert_eq!(engine.grid().intensities().len(), 2500);
    assert!(engine.grid().intensities().iter().all(|&v| v == 0));

    engine.create_fire_source();
    let mut canvas = PixelCanvas::new(400, 400);
    for _ in 0..100 {
        engine.tick(&mut canvas, 400, 400);
    }
    let grid = engine.grid();
    assert!(grid.intensities().iter().all(|&v| v <= MAX_INTENSITY));
    assert!(grid.intensity(25, 48).is_some_and(|v| v > 0), "flames should rise");

    // Drift leaves some cells unwritten for a step; without it every cell
    // above the source is rewritten each step.
    engine.set_new_direction(Direction::Center);
    engine.stop_fire_source();
    for _ in 0..50 {
        engine.update_fire_structure();
    }
    assert!(engine.grid().intensities().iter().all(|&v| v == 0), "fire should die out");
}

#[test]
fn canvas_matches_palette_and_tint() {
    let mut engine = FireEngine::with_seed(4, 4, 0, Direction::Center, FireColor::Red, 3);
    engine.create_fire_structure();
    engine.create_fire_source();

    let mut canvas = PixelCanvas::new(8, 8);
    engine.render_fire_canvas(&mut canvas, 8, 8);
    assert_eq!(canvas.pixel(0, 0), Some(PALETTE[0]));
    assert_eq!(canvas.pixel(7, 7), Some(PALETTE[36]));

    engine.set_new_color(FireColor::Green);
    engine.render_fire_canvas(&mut canvas, 8, 8);
    let (r, g, b) = PALETTE[0];
    assert_eq!(canvas.pixel(1, 1), Some((b, r, g)));

    engine.set_new_color(FireColor::Blue);
    engine.render_fire_canvas(&mut canvas, 8, 8);
    let (r, g, b) = PALETTE[36];
    assert_eq!(canvas.pixel(6, 6), Some((b, g, r)));
}

#[test]
fn parameters_apply_on_next_step() {
    let mut engine = FireEngine::with_seed(6, 6, 5, Direction::Left, FireColor::Red, 9);
    engine.create_fire_structure();
    engine.create_fire_source();

    engine.set_new_size(0);
    engine.set_new_direction(Direction::Right);
    engine.update_fire_structure();
    assert_eq!(engine.grid().params().direction, Direction::Right);
    assert!(
        (0..6).all(|c| engine.grid().intensity(c, 4) == Some(MAX_INTENSITY)),
        "zero decay copies the source row up unchanged"
    );
}

struct Counter(usize);

impl Surface for Counter {
    fn fill_rect(&mut self, _x: usize, _y: usize, _w: usize, _h: usize, _color: (u8, u8, u8)) {
        self.0 += 1;
    }
}

#[test]
fn render_without_structure_paints_nothing() {
    let engine = FireEngine::with_seed(3, 3, 3, Direction::Left, FireColor::Red, 1);
    let mut counter = Counter(0);
    engine.render_fire_canvas(&mut counter, 30, 30);
    assert_eq!(counter.0, 0);
}
