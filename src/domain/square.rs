//! Square - an axis-aligned, non-rotating body
//!
//! The body kind is a tagged variant: only `Dynamic` carries a velocity, so a
//! static square has no velocity to corrupt and nothing for integration to touch.

use crate::core::error::{EngineError, EngineResult};

use super::vec2::Vec2;

/// Static squares are immovable markers; dynamic squares carry a velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyKind {
    Static,
    Dynamic { velocity: Vec2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    /// Label only, never used for identity
    name: String,
    kind: BodyKind,
    /// Top-left corner
    pos: Vec2,
    /// Edge length
    size: f32,
    mass: f32,
}

impl Square {
    /// Create a square at rest. Size and mass must be positive, position finite.
    pub fn new(name: &str, is_static: bool, x: f32, y: f32, size: f32, mass: f32) -> EngineResult<Self> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(EngineError::InvalidBody(format!("position ({x}, {y}) must be finite")));
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(EngineError::InvalidBody(format!("size {size} must be positive")));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(EngineError::InvalidBody(format!("mass {mass} must be positive")));
        }

        let kind = if is_static {
            BodyKind::Static
        } else {
            BodyKind::Dynamic { velocity: Vec2::zero() }
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            pos: Vec2::new(x, y),
            size,
            mass,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, BodyKind::Static)
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Current velocity; always zero for static squares.
    pub fn velocity(&self) -> Vec2 {
        match self.kind {
            BodyKind::Static => Vec2::zero(),
            BodyKind::Dynamic { velocity } => velocity,
        }
    }

    /// Mutable (position, velocity) of a dynamic square, `None` for static ones.
    #[inline]
    pub(crate) fn motion_mut(&mut self) -> Option<(&mut Vec2, &mut Vec2)> {
        match &mut self.kind {
            BodyKind::Static => None,
            BodyKind::Dynamic { velocity } => Some((&mut self.pos, velocity)),
        }
    }

    /// Strict AABB overlap with a square of `size` at (x, y); touching edges do not overlap.
    pub fn overlaps(&self, x: f32, y: f32, size: f32) -> bool {
        let overlap_x = x < self.pos.x + self.size && x + size > self.pos.x;
        let overlap_y = y < self.pos.y + self.size && y + size > self.pos.y;
        overlap_x && overlap_y
    }

    /// True when no part of the square lies inside [0, width] x [0, height].
    pub fn is_offscreen(&self, width: f32, height: f32) -> bool {
        self.pos.x + self.size < 0.0
            || self.pos.y + self.size < 0.0
            || self.pos.x > width
            || self.pos.y > height
    }
}
