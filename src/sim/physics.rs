//! Body physics: gravity, friction, integration and tile-resolved movement
//!
//! All rates are "per 60fps frame" and scaled by `dt / FRAME_MS`, so a body
//! covers the same distance per second at any frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::{TileCollider, check_tile_collision};
use crate::consts::{FRICTION, FRICTION_SNAP, GRAVITY, MAX_FALL_SPEED};
use crate::time_scale;

/// Physics tuning shared by every body in a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Added to vy each frame while airborne
    pub gravity: f32,
    /// Terminal velocity
    pub max_fall_speed: f32,
    /// Ground friction multiplier for vx
    pub friction: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            friction: FRICTION,
        }
    }
}

/// Accelerate an airborne body downward, capped at terminal velocity
pub fn apply_gravity<B: Body + ?Sized>(body: &mut B, config: &PhysicsConfig, dt: f32) {
    if body.on_ground() {
        return;
    }
    let vel = body.vel_mut();
    vel.y += config.gravity * time_scale(dt);
    vel.y = vel.y.min(config.max_fall_speed);
}

/// Unconstrained integration, for bodies that ignore the level
pub fn update_position<B: Body + ?Sized>(body: &mut B, dt: f32) {
    let step = body.vel() * time_scale(dt);
    *body.pos_mut() += step;
}

/// Slow a grounded body horizontally, snapping to rest below `FRICTION_SNAP`
pub fn apply_friction<B: Body + ?Sized>(body: &mut B, coefficient: f32) {
    if !body.on_ground() {
        return;
    }
    let vel = body.vel_mut();
    vel.x *= coefficient;
    if vel.x.abs() < FRICTION_SNAP {
        vel.x = 0.0;
    }
}

/// Move a body by `delta`, resolving each axis against the level separately.
///
/// Horizontal first, then vertical. A blocked axis reverts to its position
/// before this call and loses its velocity. The grounded flag is re-derived
/// on every call: it is set only by a blocked downward move and cleared by
/// any unblocked vertical pass. With no level, movement is unconstrained.
pub fn move_entity<B, L>(body: &mut B, delta: Vec2, level: Option<&L>)
where
    B: Body + ?Sized,
    L: TileCollider + ?Sized,
{
    let origin = body.pos();

    body.pos_mut().x += delta.x;
    if level.is_some_and(|level| check_tile_collision(&*body, level)) {
        body.pos_mut().x = origin.x;
        body.vel_mut().x = 0.0;
    }

    body.pos_mut().y += delta.y;
    if level.is_some_and(|level| check_tile_collision(&*body, level)) {
        body.pos_mut().y = origin.y;
        if delta.y > 0.0 {
            body.set_on_ground(true);
        }
        body.vel_mut().y = 0.0;
    } else {
        body.set_on_ground(false);
    }
}
