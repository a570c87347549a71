//! Per-frame simulation module
//!
//! Everything here is synchronous and deterministic:
//! - Frame deltas in milliseconds, normalized against a 60fps frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod kinematics;
pub mod level;
pub mod particle;
pub mod particles;
pub mod physics;
pub mod step;

pub use body::{Actor, Body};
pub use collision::{TileCollider, check_tile_collision, overlapping_cells};
pub use kinematics::{Rect, clamp, distance, lerp, normalize, point_in_rect, rect_overlap};
pub use level::{LevelError, TileGrid, TileKind};
pub use particle::{KindProfile, Particle, ParticleKind};
pub use particles::{GameEvent, ParticleSystem};
pub use physics::{PhysicsConfig, apply_friction, apply_gravity, move_entity, update_position};
pub use step::{FrameClock, step_body};
