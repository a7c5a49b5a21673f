//! Drawing surface dimensions.

use crate::config::{CELL_HEIGHT, CELL_WIDTH};

/// Size of the drawing surface in surface units.
///
/// The origin is the top-left corner and y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSize {
    /// Width of the surface.
    pub width: f64,
    /// Height of the surface.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a surface size, treating negative or NaN dimensions as zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Size of a surface spanning `cols` x `rows` terminal cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self::new(cols as f64 * CELL_WIDTH, rows as f64 * CELL_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells() {
        let size = SurfaceSize::from_cells(100, 30);
        assert_eq!(size.width, 800.0);
        assert_eq!(size.height, 480.0);
    }

    #[test]
    fn test_negative_dimensions_are_zero() {
        let size = SurfaceSize::new(-5.0, f64::NAN);
        assert_eq!(size, SurfaceSize::new(0.0, 0.0));
    }
}
