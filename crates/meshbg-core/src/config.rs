//! Fixed configuration for the particle field.
//!
//! These are not runtime-configurable.

use std::time::Duration;

use ratatui::style::Color;

/// Number of particles alive at any time.
pub const PARTICLE_COUNT: usize = 40;

/// Pairs closer than this (surface units) are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 120.0;

/// Opacity of a connection between two particles at the same position.
pub const MAX_LINE_OPACITY: f64 = 0.3;

/// Rust accent used for particles and connections (`#c84a00`).
pub const ACCENT: Color = Color::Rgb(0xc8, 0x4a, 0x00);

/// Near-black surface fill (`#0a0a0a`).
pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0a);

/// Lower bound of the particle size range (inclusive).
pub const SIZE_MIN: f64 = 1.0;

/// Upper bound of the particle size range (exclusive).
pub const SIZE_MAX: f64 = 2.0;

/// Multiplier applied to a particle's size when it is drawn.
pub const SIZE_SCALE: f64 = 2.0;

/// Smallest per-axis speed a particle is created with.
pub const MIN_SPEED: f64 = 0.05;

/// Per-axis speed bound (exclusive), in surface units per frame.
pub const MAX_SPEED: f64 = 0.25;

/// Delay between two frames, roughly one display refresh at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Surface units covered by one terminal column.
pub const CELL_WIDTH: f64 = 8.0;

/// Surface units covered by one terminal row.
pub const CELL_HEIGHT: f64 = 16.0;
