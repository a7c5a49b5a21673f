//! A single drifting particle.

use rand::Rng;

use crate::config::{MAX_SPEED, MIN_SPEED, SIZE_MAX, SIZE_MIN, SIZE_SCALE};
use crate::surface::SurfaceSize;

/// A particle drifting across the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position, growing downward.
    pub y: f64,
    /// Horizontal velocity in surface units per frame.
    pub vx: f64,
    /// Vertical velocity in surface units per frame.
    pub vy: f64,
    /// Base size, fixed for the particle's lifetime.
    pub size: f64,
}

/// Axes on which a particle bounced during an [`Particle::advance`] step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    /// Whether the particle bounced on either axis.
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl Particle {
    /// Create a particle at a random position inside `bounds` with a random
    /// velocity and size.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: SurfaceSize) -> Self {
        Self {
            x: rng.gen_range(0.0..=bounds.width),
            y: rng.gen_range(0.0..=bounds.height),
            vx: random_speed(rng),
            vy: random_speed(rng),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
        }
    }

    /// Move by one frame's worth of velocity.
    ///
    /// Leaving [0, dimension] on an axis flips that axis's velocity; the
    /// position is then clamped back into bounds. This is a velocity flip,
    /// not an exact reflection off the edge.
    pub fn advance(&mut self, bounds: SurfaceSize) -> Bounce {
        self.x += self.vx;
        self.y += self.vy;

        let bounce = Bounce {
            x: self.x < 0.0 || self.x > bounds.width,
            y: self.y < 0.0 || self.y > bounds.height,
        };
        if bounce.x {
            self.vx = -self.vx;
        }
        if bounce.y {
            self.vy = -self.vy;
        }

        self.x = self.x.clamp(0.0, bounds.width);
        self.y = self.y.clamp(0.0, bounds.height);

        bounce
    }

    /// Size used when drawing the particle.
    pub fn draw_size(&self) -> f64 {
        self.size * SIZE_SCALE
    }

    /// Euclidean distance to another particle.
    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Nonzero speed in [MIN_SPEED, MAX_SPEED) with a random sign.
fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
    if rng.gen_bool(0.5) { speed } else { -speed }
}
