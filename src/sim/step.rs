//! Per-frame update pipeline
//!
//! The game loop calls [`FrameClock::advance`] once per animation frame and
//! feeds the resulting delta to [`step_body`] for every gameplay body and to
//! `ParticleSystem::update`.

use super::body::Body;
use super::collision::TileCollider;
use super::physics::{PhysicsConfig, apply_friction, apply_gravity, move_entity};
use crate::consts::{FRAME_MS, MAX_FRAME_MS};
use crate::time_scale;

/// Number of frame timestamps used for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Advance one gameplay body by one frame.
///
/// Order: gravity, ground friction, then collision-resolved movement using
/// the finalized velocity.
pub fn step_body<B, L>(body: &mut B, level: Option<&L>, config: &PhysicsConfig, dt: f32)
where
    B: Body + ?Sized,
    L: TileCollider + ?Sized,
{
    apply_gravity(body, config, dt);
    apply_friction(body, config.friction);
    let delta = body.vel() * time_scale(dt);
    move_entity(body, delta, level);
}

/// Turns animation-frame timestamps (milliseconds) into frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    /// Timestamps recorded so far, saturating at `FPS_WINDOW`
    samples: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            samples: 0,
            fps: 0,
        }
    }

    /// Record a frame at `time` and return its delta in milliseconds.
    ///
    /// The first frame reports one canonical frame. Deltas are clamped to
    /// `[0, MAX_FRAME_MS]` so a stalled tab does not launch bodies through walls.
    pub fn advance(&mut self, time: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((time - last) as f32).clamp(0.0, MAX_FRAME_MS),
            None => FRAME_MS,
        };
        self.last_time = Some(time);

        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.samples = (self.samples + 1).min(FPS_WINDOW);

        // Oldest sample is the one about to be overwritten
        if self.samples == FPS_WINDOW {
            let elapsed = time - self.frame_times[self.frame_index];
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }

        dt
    }

    /// Frames per second over the last `FPS_WINDOW` frames (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Forget the previous timestamp, e.g. after the game was paused or hidden
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}
