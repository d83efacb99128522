//! Host-facing interfaces
//!
//! The overlay host owns the game process reader and the entity/component
//! framework. The plugin only sees the player through [`PlayerSource`] and
//! the camera through [`Projector`], so everything downstream can be driven
//! by fakes in tests.

use thiserror::Error;

use crate::effects::EffectInstance;

/// Screen-space point in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The host reports "not on screen" as the origin
    pub fn is_origin(&self) -> bool {
        *self == Self::ZERO
    }
}

/// World-space position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// An unloaded entity reads back as the origin
    pub fn is_origin(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Errors raised while reading player state from the host
#[derive(Debug, Error)]
pub enum HostError {
    #[error("player entity is not valid")]
    InvalidPlayer,

    #[error("player has no {0} component")]
    MissingComponent(&'static str),

    #[error("failed to read {what}: {reason}")]
    Read { what: &'static str, reason: String },
}

/// Read access to the local player entity
pub trait PlayerSource {
    /// Whether the entity handle still points at a live player
    fn is_valid(&self) -> bool;

    /// Position in world space
    fn world_position(&self) -> Vec3;

    /// Live buff list from the player's buff component
    fn buffs(&self) -> Result<Vec<EffectInstance>, HostError>;
}

/// Camera projection from world to screen space
pub trait Projector {
    /// Returns [`Vec2::ZERO`] when the point is not visible
    fn world_to_screen(&self, pos: Vec3) -> Vec2;
}
