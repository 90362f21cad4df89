//! Arena geometry.
//!
//! Simulation runs in *arena space*: origin at the top-left corner, x grows to
//! the right, y grows downward, so a movement axis of `-1.0` on y means "up".
//! Each ship owns one horizontal half and the full height.
//!
//! Rendering converts to Bevy world space (y-up, origin at the arena centre)
//! through [`Arena::to_world`]; nothing else should care about the difference.

use bevy::prelude::*;

/// Which half of the arena a ship lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing at the other half.
    #[inline]
    pub fn toward_enemy(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Yellow",
            Side::Right => "Red",
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The region a ship on `side` may occupy.
    #[inline]
    pub fn half(&self, side: Side) -> Rect {
        let mid = self.width * 0.5;
        match side {
            Side::Left => Rect::new(0.0, 0.0, mid, self.height),
            Side::Right => Rect::new(mid, 0.0, self.width, self.height),
        }
    }

    /// True when `rect` lies entirely inside the half owned by `side`.
    #[inline]
    pub fn fits(&self, side: Side, rect: Rect) -> bool {
        let half = self.half(side);
        rect.min.x >= half.min.x
            && rect.min.y >= half.min.y
            && rect.max.x <= half.max.x
            && rect.max.y <= half.max.y
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Arena space -> Bevy world space.
    #[inline]
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }
}
