//! Doom fire engine and its terminal frame loop
//!
//! `FireEngine` owns the simulation grid and the renderer. The loop here is
//! the only caller: each tick paints the current state, advances one step,
//! then presents and sleeps.

pub mod grid;
pub mod palette;
pub mod renderer;

use crate::canvas::{PixelCanvas, Surface};
use crate::colors::FireColor;
use crate::config::{Direction, FireConfig};
use crate::help::{show_help_modal, FIRE_HELP};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use grid::{FireGrid, FireParams};
use rand::prelude::*;
use renderer::FireRenderer;
use std::io;
use tracing::{debug, info};

/// Lowest decay the controls will step down to; below this nothing cools
pub const MIN_DECAY: u32 = 2;
/// Highest decay the controls will step up to
pub const MAX_DECAY: u32 = 8;
/// Print-mode fallback when the terminal size can't be read
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Simulation plus renderer, driven one tick at a time
pub struct FireEngine {
    grid: FireGrid,
    renderer: FireRenderer,
}

impl FireEngine {
    pub fn new(
        width: usize,
        height: usize,
        decay_size: u32,
        direction: Direction,
        color: FireColor,
    ) -> Self {
        Self::with_rng(width, height, decay_size, direction, color, StdRng::from_entropy())
    }

    pub fn with_seed(
        width: usize,
        height: usize,
        decay_size: u32,
        direction: Direction,
        color: FireColor,
        seed: u64,
    ) -> Self {
        Self::with_rng(width, height, decay_size, direction, color, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        width: usize,
        height: usize,
        decay_size: u32,
        direction: Direction,
        color: FireColor,
        rng: StdRng,
    ) -> Self {
        let params = FireParams {
            decay_size,
            direction,
            color,
        };
        Self {
            grid: FireGrid::new(width, height, params, rng),
            renderer: FireRenderer::default(),
        }
    }

    pub fn grid(&self) -> &FireGrid {
        &self.grid
    }

    pub fn create_fire_structure(&mut self) {
        self.grid.create_fire_structure();
    }

    pub fn create_fire_source(&mut self) {
        self.grid.create_fire_source();
    }

    pub fn stop_fire_source(&mut self) {
        self.grid.stop_fire_source();
    }

    pub fn update_fire_structure(&mut self) {
        self.grid.update_fire_structure();
    }

    pub fn render_fire_canvas<S: Surface>(&self, surface: &mut S, width: usize, height: usize) {
        self.renderer.render_fire_canvas(&self.grid, surface, width, height);
    }

    pub fn set_new_size(&mut self, decay_size: u32) {
        self.grid.set_new_size(decay_size);
    }

    pub fn set_new_direction(&mut self, direction: Direction) {
        self.grid.set_new_direction(direction);
    }

    pub fn set_new_color(&mut self, color: FireColor) {
        self.grid.set_new_color(color);
    }

    /// One animation frame: paint the current state, then advance
    pub fn tick<S: Surface>(&mut self, surface: &mut S, width: usize, height: usize) {
        self.render_fire_canvas(surface, width, height);
        self.update_fire_structure();
    }

    /// Replace the grid with a new one of the given size
    pub fn resized(self, width: usize, height: usize) -> Self {
        Self {
            grid: self.grid.resized(width, height),
            renderer: self.renderer,
        }
    }
}

/// What the loop should do after a keypress
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Help,
    Quit,
}

/// Runtime state for interactive controls
pub struct FireControls {
    pub speed: f32,
    pub paused: bool,
}

impl FireControls {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            paused: false,
        }
    }

    /// Apply a keypress to the controls and the engine
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        _modifiers: KeyModifiers,
        engine: &mut FireEngine,
    ) -> KeyAction {
        if let Some(color) = FireColor::from_key(code) {
            engine.set_new_color(color);
            return KeyAction::Continue;
        }

        let decay = engine.grid().params().decay_size;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('?') => return KeyAction::Help,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') => engine.create_fire_source(),
            KeyCode::Char('x') => engine.stop_fire_source(),
            KeyCode::Char('t') => {
                if engine.grid().is_burning() {
                    engine.stop_fire_source();
                } else {
                    engine.create_fire_source();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => engine.set_new_direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => engine.set_new_direction(Direction::Right),
            KeyCode::Down | KeyCode::Char('c') => engine.set_new_direction(Direction::Center),
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                engine.set_new_size(taller(decay));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                engine.set_new_size(shorter(decay));
            }
            // Number keys: change speed (1=fastest, 9=slowest, 0=very slow)
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.speed = match c {
                    '1' => 0.005,
                    '2' => 0.01,
                    '3' => 0.02,
                    '4' => 0.03,
                    '5' => 0.05,
                    '6' => 0.07,
                    '7' => 0.1,
                    '8' => 0.15,
                    _ => 0.2,
                };
            }
            _ => {}
        }
        KeyAction::Continue
    }
}

/// One step less cooling, kept within the control range. Never raises decay,
/// so an out-of-range start only moves toward taller flames.
fn taller(decay: u32) -> u32 {
    decay.min(decay.saturating_sub(1).clamp(MIN_DECAY, MAX_DECAY))
}

/// One step more cooling, kept within the control range. Never lowers decay.
fn shorter(decay: u32) -> u32 {
    decay.max(decay.saturating_add(1).clamp(MIN_DECAY, MAX_DECAY))
}

/// Grid size for a terminal: one column per cell, two rows per cell
fn grid_size(config: &FireConfig, cols: u16, rows: u16) -> (usize, usize) {
    let width = config.width.unwrap_or(cols as usize).max(1);
    let height = config.height.unwrap_or(rows as usize * 2).max(1);
    (width, height)
}

fn engine_for(config: &FireConfig, width: usize, height: usize, seed: u64) -> FireEngine {
    let mut engine = FireEngine::with_seed(
        width,
        height,
        config.decay,
        config.direction,
        config.color,
        seed,
    );
    engine.create_fire_structure();
    engine.create_fire_source();
    engine
}

/// Paint, advance, and copy the frame into the terminal back buffer
fn draw_frame(engine: &mut FireEngine, canvas: &mut PixelCanvas, term: &mut Terminal) {
    canvas.clear();
    let (width, height) = (canvas.width(), canvas.height());
    engine.tick(canvas, width, height);
    canvas.blit(term);
}

/// Run the fire
pub fn run(config: FireConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });

    if config.print {
        run_print_mode(&config, seed)
    } else {
        run_interactive(&config, seed)
    }
}

fn run_print_mode(config: &FireConfig, seed: u64) -> io::Result<()> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
    // Leave a line for the shell prompt
    let rows = rows.saturating_sub(1).max(1);

    let mut term = Terminal::offscreen(cols, rows);
    let mut canvas = PixelCanvas::for_terminal(cols, rows);
    let (width, height) = grid_size(config, cols, rows);
    let mut engine = engine_for(config, width, height, seed);
    info!(width, height, seed, frames = config.frames, "printing fire");

    for _ in 0..config.frames {
        engine.update_fire_structure();
    }

    let (canvas_w, canvas_h) = (canvas.width(), canvas.height());
    engine.render_fire_canvas(&mut canvas, canvas_w, canvas_h);
    canvas.blit(&mut term);
    term.print_to_stdout()
}

fn run_interactive(config: &FireConfig, seed: u64) -> io::Result<()> {
    let mut term = Terminal::new(true)?;
    term.clear_screen()?;

    let (mut cols, mut rows) = term.size();
    let (width, height) = grid_size(config, cols, rows);
    let mut engine = engine_for(config, width, height, seed);
    let mut canvas = PixelCanvas::for_terminal(cols, rows);
    let mut controls = FireControls::new(config.time_step);
    info!(width, height, seed, "fire started");

    loop {
        let (new_cols, new_rows) = crossterm::terminal::size().unwrap_or((cols, rows));
        if new_cols != cols || new_rows != rows {
            cols = new_cols;
            rows = new_rows;
            term.resize(cols, rows);
            term.clear_screen()?;
            canvas = PixelCanvas::for_terminal(cols, rows);
            debug!(cols, rows, "terminal resized");

            let (width, height) = grid_size(config, cols, rows);
            if (width, height) != (engine.grid().width(), engine.grid().height()) {
                engine = engine.resized(width, height);
            }
        }

        if let Some((code, mods)) = term.check_key()? {
            match controls.handle_key(code, mods, &mut engine) {
                KeyAction::Quit => break,
                KeyAction::Help => {
                    if show_help_modal(&mut term, FIRE_HELP)? {
                        break;
                    }
                }
                KeyAction::Continue => {}
            }
        }

        if controls.paused {
            term.sleep(0.1);
            continue;
        }

        draw_frame(&mut engine, &mut canvas, &mut term);
        term.present()?;
        term.sleep(controls.speed);
    }

    info!("fire stopped");
    Ok(())
}
