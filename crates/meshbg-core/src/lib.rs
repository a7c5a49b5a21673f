//! Core types for the meshbg particle background.
//!
//! Everything here is independent of the terminal: fixed configuration
//! constants, the surface dimensions, the particle record and the pairwise
//! connection math. Rendering lives in `meshbg-background`.

pub mod config;
mod connection;
mod particle;
mod surface;

pub use connection::{Connection, connection_opacity, connections};
pub use particle::{Bounce, Particle};
pub use surface::SurfaceSize;
