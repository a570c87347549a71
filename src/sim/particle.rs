//! Decorative particles
//!
//! A particle lives until its life runs out or it shrinks below
//! `MIN_PARTICLE_SIZE`. Dead particles never come back.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_PARTICLE_SIZE;
use crate::time_scale;

/// Baseline gravity before the emitter applies a kind profile
const BASE_GRAVITY: f32 = 0.05;
const BASE_SPARK_GRAVITY: f32 = 0.1;
/// Remaining life at which a particle starts shrinking
const SHRINK_LIFE: f32 = 0.3;
/// Size multiplier per 60fps frame while shrinking
const SHRINK_RATE: f32 = 0.98;

/// Particle types, one per gameplay flavour of effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParticleKind {
    Dust,
    Spark,
    Coin,
    PowerUp,
    Enemy,
    Break,
    #[default]
    Default,
}

/// Per-kind emission policy applied on top of a freshly spawned particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    /// 0xRRGGBB
    pub color: u32,
    pub gravity: f32,
    /// Multiplier on the random horizontal velocity
    pub vx_scale: f32,
    /// `Some(k)` forces the particle upward: `vy = -|vy| * k`
    pub lift: Option<f32>,
    /// Starting life in seconds (also `max_life`)
    pub life: f32,
}

const PROFILES: [KindProfile; 7] = [
    // Dust
    KindProfile {
        color: 0xC8B08A,
        gravity: 0.05,
        vx_scale: 1.5,
        lift: Some(0.5),
        life: 0.6,
    },
    // Spark
    KindProfile {
        color: 0xFFE066,
        gravity: 0.2,
        vx_scale: 2.0,
        lift: Some(2.0),
        life: 1.0,
    },
    // Coin
    KindProfile {
        color: 0xFFC107,
        gravity: 0.15,
        vx_scale: 1.0,
        lift: Some(1.5),
        life: 1.0,
    },
    // PowerUp
    KindProfile {
        color: 0xFF5CCB,
        gravity: 0.02,
        vx_scale: 1.0,
        lift: Some(1.0),
        life: 2.0,
    },
    // Enemy
    KindProfile {
        color: 0xE53935,
        gravity: 0.15,
        vx_scale: 1.5,
        lift: Some(1.5),
        life: 1.0,
    },
    // Break
    KindProfile {
        color: 0xA0522D,
        gravity: 0.3,
        vx_scale: 1.5,
        lift: Some(3.0),
        life: 1.2,
    },
    // Default
    KindProfile {
        color: 0xFFFFFF,
        gravity: BASE_GRAVITY,
        vx_scale: 1.0,
        lift: None,
        life: 1.0,
    },
];

impl ParticleKind {
    pub const ALL: [ParticleKind; 7] = [
        ParticleKind::Dust,
        ParticleKind::Spark,
        ParticleKind::Coin,
        ParticleKind::PowerUp,
        ParticleKind::Enemy,
        ParticleKind::Break,
        ParticleKind::Default,
    ];

    /// Emission table row for this kind
    pub fn profile(self) -> &'static KindProfile {
        &PROFILES[self as usize]
    }

    pub fn color(self) -> u32 {
        self.profile().color
    }
}

/// A single decorative particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per 60fps frame
    pub vel: Vec2,
    pub kind: ParticleKind,
    /// Seconds remaining at 60fps
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub gravity: f32,
}

impl Particle {
    /// Baseline particle: random velocity in [-2, 2], size in [1, 4], one second of life.
    pub fn spawn<R: Rng>(pos: Vec2, kind: ParticleKind, rng: &mut R) -> Self {
        let vel = Vec2::new(rng.random_range(-2.0..=2.0), rng.random_range(-2.0..=2.0));
        let gravity = if kind == ParticleKind::Spark {
            BASE_SPARK_GRAVITY
        } else {
            BASE_GRAVITY
        };
        Self {
            pos,
            vel,
            kind,
            life: 1.0,
            max_life: 1.0,
            size: rng.random_range(1.0..=4.0),
            color: kind.color(),
            gravity,
        }
    }

    /// Apply the kind's emission profile (velocity shaping, gravity, life)
    pub fn apply_profile(&mut self) {
        let profile = self.kind.profile();
        self.vel.x *= profile.vx_scale;
        if let Some(lift) = profile.lift {
            self.vel.y = -self.vel.y.abs() * lift;
        }
        self.gravity = profile.gravity;
        self.life = profile.life;
        self.max_life = profile.life;
        self.color = profile.color;
    }

    /// Advance one frame. Returns false once the particle should be removed.
    ///
    /// Position integrates with the velocity from the start of the frame,
    /// then gravity is added to vy.
    pub fn update(&mut self, dt: f32) -> bool {
        let ts = time_scale(dt);
        self.pos += self.vel * ts;
        self.vel.y += self.gravity * ts;
        self.life -= ts / 60.0;

        if self.life <= SHRINK_LIFE {
            self.size *= SHRINK_RATE.powf(ts);
        }

        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.size > MIN_PARTICLE_SIZE
    }

    /// Opacity for drawing, fading with remaining life
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// CSS `rgba()` string for canvas renderers
    pub fn css_color(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            (self.color >> 16) & 0xFF,
            (self.color >> 8) & 0xFF,
            self.color & 0xFF,
            self.alpha()
        )
    }
}
