// ABOUTME: Shared types and configuration for the bingo board.
// ABOUTME: Defines board state, preset persistence, colors, and config handling.

pub mod board;
pub mod config;
pub mod preset;
pub mod theme;

pub use board::{Board, GridSize};
pub use config::{Config, ConfigError};
pub use preset::{Preset, PresetError};
pub use theme::Color;
