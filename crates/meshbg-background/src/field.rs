//! Particle field state and per-frame rendering.

use log::{debug, trace};
use meshbg_core::{
    Particle, SurfaceSize,
    config::{ACCENT, BACKGROUND, PARTICLE_COUNT},
    connections,
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    Frame,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine},
};

use crate::{pen::Pen, tooth::Tooth};

/// Particle field renderer state.
#[derive(Debug)]
pub struct ParticleField {
    /// Live particles.
    particles: Vec<Particle>,
    /// Current surface size in surface units.
    bounds: SurfaceSize,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
    /// Stroke used for connection lines.
    pen: Pen,
    /// Frames rendered since creation.
    frames: u64,
    rng: StdRng,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    /// Create an empty field seeded from OS entropy.
    ///
    /// Particles are created on the first [`resize`](Self::resize) or
    /// [`render`](Self::render).
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty field drawing randomness from `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            bounds: SurfaceSize::default(),
            last_width: 0,
            last_height: 0,
            pen: Pen::new(ACCENT),
            frames: 0,
            rng,
        }
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current surface size.
    pub fn bounds(&self) -> SurfaceSize {
        self.bounds
    }

    /// Frames rendered since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Resize to a `cols` x `rows` terminal and reinitialize every particle.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.last_width = cols;
        self.last_height = rows;
        self.reset(SurfaceSize::from_cells(cols, rows));
    }

    /// Discard all particles and scatter a fresh batch across `bounds`.
    pub fn reset(&mut self, bounds: SurfaceSize) {
        self.bounds = bounds;
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(&mut self.rng, bounds))
            .collect();
        debug!(
            "reinitialized {} particles on a {}x{} surface",
            self.particles.len(),
            bounds.width,
            bounds.height
        );
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self) {
        let bounds = self.bounds;
        let mut bounced = 0;
        for particle in &mut self.particles {
            if particle.advance(bounds).any() {
                bounced += 1;
            }
        }
        if bounced > 0 {
            trace!("{bounced} particles bounced");
        }
    }

    /// Advance the field and draw it over the whole frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Reinitialize if dimensions changed or particles not initialized
        if area.width != self.last_width
            || area.height != self.last_height
            || self.particles.is_empty()
        {
            self.resize(area.width, area.height);
        }

        self.update();
        self.frames += 1;

        if area.is_empty() {
            return;
        }

        let height = self.bounds.height;
        let teeth: Vec<Tooth> = self
            .particles
            .iter()
            .map(|p| Tooth {
                x: p.x,
                y: height - p.y,
                scale: p.draw_size(),
                color: ACCENT,
            })
            .collect();

        let lines: Vec<CanvasLine> = connections(&self.particles)
            .into_iter()
            .map(|c| {
                self.pen.set_alpha(c.opacity);
                CanvasLine::new(
                    c.from.0,
                    height - c.from.1,
                    c.to.0,
                    height - c.to.1,
                    self.pen.stroke_color(BACKGROUND),
                )
            })
            .collect();
        self.pen.reset();

        // A terminal cell holds one color, so lines go on the lower layer to
        // keep the faint strokes from hiding the particles they meet at.
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(BACKGROUND)
            .x_bounds([0.0, self.bounds.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for line in &lines {
                    ctx.draw(line);
                }
                ctx.layer();
                for tooth in &teeth {
                    ctx.draw(tooth);
                }
            });

        frame.render_widget(canvas, area);
    }
}
