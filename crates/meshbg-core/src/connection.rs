//! Proximity connections between particles.

use crate::config::{CONNECTION_DISTANCE, MAX_LINE_OPACITY};
use crate::particle::Particle;

/// A line joining two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Start point (surface coordinates).
    pub from: (f64, f64),
    /// End point (surface coordinates).
    pub to: (f64, f64),
    /// Opacity in (0, MAX_LINE_OPACITY].
    pub opacity: f64,
}

/// Opacity of a line between two particles `distance` apart, or `None` if
/// they are too far apart to be connected.
///
/// Fades linearly from [`MAX_LINE_OPACITY`] at zero distance to nothing at
/// [`CONNECTION_DISTANCE`].
pub fn connection_opacity(distance: f64) -> Option<f64> {
    if distance < CONNECTION_DISTANCE {
        Some((1.0 - distance / CONNECTION_DISTANCE) * MAX_LINE_OPACITY)
    } else {
        None
    }
}

/// All connections between unordered pairs of `particles`.
///
/// A plain O(n²) scan; the particle count is small and fixed.
pub fn connections(particles: &[Particle]) -> Vec<Connection> {
    let mut lines = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(opacity) = connection_opacity(a.distance_to(b)) {
                lines.push(Connection {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    opacity,
                });
            }
        }
    }
    lines
}
