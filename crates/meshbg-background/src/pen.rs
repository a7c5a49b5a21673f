//! Stroke state shared by the connection lines of a frame.

use ratatui::style::Color;

use crate::color::blend;

/// The renderer's stroke: a base color and a transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    color: Color,
    alpha: f64,
}

impl Pen {
    /// Create a fully opaque pen.
    pub fn new(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Current transparency, 1.0 being fully opaque.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Set the transparency for subsequent strokes.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Return to full opacity.
    pub fn reset(&mut self) {
        self.alpha = 1.0;
    }

    /// Color a stroke takes when drawn over `background`.
    pub fn stroke_color(&self, background: Color) -> Color {
        blend(self.color, background, self.alpha())
    }
}
