//! Drawing capabilities consumed by the simulation
//!
//! The simulation never draws; a platform renderer (canvas, WebGPU, a test
//! recorder) implements these traits.

use crate::sim::Particle;

/// Draws one particle per call
pub trait ParticleRenderer {
    fn draw_particle(&mut self, particle: &Particle);
}

/// Collects draw calls, for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub drawn: Vec<Particle>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.drawn.clear();
    }
}

impl ParticleRenderer for RecordingRenderer {
    fn draw_particle(&mut self, particle: &Particle) {
        self.drawn.push(particle.clone());
    }
}
