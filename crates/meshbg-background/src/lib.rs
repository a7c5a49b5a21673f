//! Particle field rendering for meshbg.
//!
//! [`ParticleField`] owns the particles and draws them, together with the
//! proximity lines between them, onto a full-frame braille canvas.

mod color;
mod field;
mod pen;
mod tooth;

pub use field::ParticleField;
