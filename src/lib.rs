//! Doom-style fire for the terminal
//!
//! The engine lives in [`fire`]: a cellular automaton that carries heat up
//! from a burning bottom row, cooling it at random, and a renderer that maps
//! heat through a fixed palette onto any [`canvas::Surface`].

pub mod canvas;
pub mod colors;
pub mod config;
pub mod fire;
pub mod help;
pub mod settings;
pub mod terminal;
