//! Simulated bodies
//!
//! Physics never owns an entity; it mutates anything implementing [`Body`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::Rect;
use crate::consts::TILE_SIZE;

/// Capability set the physics functions operate on
pub trait Body {
    /// Top-left corner in world units
    fn pos(&self) -> Vec2;
    fn pos_mut(&mut self) -> &mut Vec2;
    /// Velocity in world units per 60fps frame
    fn vel(&self) -> Vec2;
    fn vel_mut(&mut self) -> &mut Vec2;
    fn on_ground(&self) -> bool;
    fn set_on_ground(&mut self, on_ground: bool);
    /// Bounding box extent (width, height)
    fn size(&self) -> Vec2;

    /// World-space bounding box
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos(), self.size())
    }
}

/// A plain moving body: players, enemies, thrown items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    #[serde(default)]
    pub on_ground: bool,
}

impl Actor {
    pub fn new(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
        }
    }

    /// One-tile player box
    pub fn player(id: u32, pos: Vec2) -> Self {
        Self::new(id, pos, Vec2::splat(TILE_SIZE))
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Body for Actor {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn vel(&self) -> Vec2 {
        self.vel
    }

    fn vel_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }

    fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn set_on_ground(&mut self, on_ground: bool) {
        self.on_ground = on_ground;
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}
