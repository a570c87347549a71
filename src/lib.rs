//! Flex Quest - A fitness-themed 2D platformer
//!
//! Core modules:
//! - `sim`: Per-frame simulation (physics, tile collision, particles)
//! - `renderer`: Drawing capability consumed by the particle system
//! - `settings`: Player preferences and physics tuning

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::ParticleRenderer;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Canonical frame length in milliseconds (60 fps). All per-frame constants
    /// are expressed relative to this.
    pub const FRAME_MS: f32 = 16.67;
    /// Longest frame delta accepted from the clock (tab stalls, breakpoints)
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Edge length of one level tile, in world units
    pub const TILE_SIZE: f32 = 16.0;

    /// Downward acceleration per 60fps frame
    pub const GRAVITY: f32 = 0.42;
    /// Terminal velocity (hard ceiling on vy)
    pub const MAX_FALL_SPEED: f32 = 8.0;
    /// Ground friction multiplier applied to vx while grounded
    pub const FRICTION: f32 = 0.85;
    /// Below this |vx| friction snaps horizontal velocity to zero
    pub const FRICTION_SNAP: f32 = 0.1;

    /// Particle pool capacity
    pub const MAX_PARTICLES: usize = 200;
    /// Particles at or below this size are culled
    pub const MIN_PARTICLE_SIZE: f32 = 0.1;
}

/// Scale factor turning a frame delta in milliseconds into "60fps frames".
#[inline]
pub fn time_scale(dt_ms: f32) -> f32 {
    dt_ms / consts::FRAME_MS
}
