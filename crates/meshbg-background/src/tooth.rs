//! Tooth silhouette drawn for each particle.

use ratatui::{
    style::Color,
    widgets::canvas::{Painter, Shape},
};

/// Segments used to flatten each quadratic curve of the outline.
const CURVE_STEPS: usize = 6;

/// One piece of the outline path, in unit coordinates with y growing down.
enum Segment {
    Line(f64, f64),
    Quad { ctrl: (f64, f64), end: (f64, f64) },
}

/// Start of the outline: the top-left corner of the crown.
const START: (f64, f64) = (-0.4, -0.3);

/// Crown across the top, rounded shoulders, tapering root.
const PATH: [Segment; 6] = [
    Segment::Line(0.4, -0.3),
    Segment::Quad {
        ctrl: (0.5, -0.2),
        end: (0.4, 0.0),
    },
    Segment::Line(0.2, 0.5),
    Segment::Line(-0.2, 0.5),
    Segment::Line(-0.4, 0.0),
    Segment::Quad {
        ctrl: (-0.5, -0.2),
        end: (-0.4, -0.3),
    },
];

/// A filled tooth centered on a canvas point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooth {
    /// Center x in canvas coordinates.
    pub x: f64,
    /// Center y in canvas coordinates (y grows upward on a canvas).
    pub y: f64,
    /// Outline scale; the silhouette spans roughly one `scale` each way.
    pub scale: f64,
    pub color: Color,
}

impl Tooth {
    /// The closed outline polygon in canvas coordinates.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        unit_outline()
            .into_iter()
            .map(|(ux, uy)| (self.x + ux * self.scale, self.y - uy * self.scale))
            .collect()
    }
}

impl Shape for Tooth {
    fn draw(&self, painter: &mut Painter) {
        let outline = self.outline();
        let (min_x, max_x, min_y, max_y) = outline.iter().fold(
            (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
            |(min_x, max_x, min_y, max_y), &(x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );

        // Sample finer than any marker resolution so small teeth still fill.
        let step = (self.scale / 8.0).max(0.05);
        let mut y = min_y;
        while y <= max_y {
            let mut x = min_x;
            while x <= max_x {
                if contains(&outline, x, y) {
                    if let Some((px, py)) = painter.get_point(x, y) {
                        painter.paint(px, py, self.color);
                    }
                }
                x += step;
            }
            y += step;
        }

        // At a particle's usual size the silhouette is smaller than a dot.
        if let Some((px, py)) = painter.get_point(self.x, self.y) {
            painter.paint(px, py, self.color);
        }
    }
}

/// Flatten [`PATH`] into a polygon in unit coordinates.
fn unit_outline() -> Vec<(f64, f64)> {
    let mut points = vec![START];
    let mut current = START;
    for segment in &PATH {
        match *segment {
            Segment::Line(x, y) => {
                current = (x, y);
                points.push(current);
            }
            Segment::Quad { ctrl, end } => {
                for step in 1..=CURVE_STEPS {
                    let t = step as f64 / CURVE_STEPS as f64;
                    points.push(quadratic(current, ctrl, end, t));
                }
                current = end;
            }
        }
    }
    points
}

fn quadratic(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    (
        u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0,
        u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1,
    )
}

/// Even-odd point-in-polygon test.
fn contains(polygon: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
