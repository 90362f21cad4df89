use bevy::prelude::*;

use crate::common::arena::{Arena, Side};
use crate::common::tunables::Tunables;

/// Fraction of the hull that bullets can actually hit.
pub const HITBOX_SHRINK: f32 = 0.6;

/// A ship's hull and combat state, in arena space.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Ship {
    pub side: Side,
    pub rect: Rect,
    pub velocity: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub score: u32,
    pub speed: f32,
    pub accel: f32,
    pub decel: f32,
}

/// The ship this one fights. Fixed at spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opponent(pub Entity);

impl Ship {
    pub fn new(side: Side, t: &Tunables) -> Self {
        Self {
            side,
            rect: Self::spawn_rect(side, t),
            velocity: Vec2::ZERO,
            health: t.ship_health,
            max_health: t.ship_health,
            score: 0,
            speed: t.ship_speed,
            accel: t.ship_accel,
            decel: t.ship_decel,
        }
    }

    /// Left ship starts in the top-left corner, right ship in the bottom-right.
    pub fn spawn_rect(side: Side, t: &Tunables) -> Rect {
        let size = t.ship_size();
        let arena: Arena = t.arena();
        let min = match side {
            Side::Left => Vec2::splat(t.ship_margin),
            Side::Right => Vec2::new(arena.width, arena.height) - size - t.ship_margin,
        };
        Rect::from_corners(min, min + size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    /// The hull shrunk around its centre.
    pub fn hitbox(&self) -> Rect {
        Rect::from_center_size(self.center(), self.size() * HITBOX_SHRINK)
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Subtract `amount`. Returns `true` only for the hit that killed the ship.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let was_alive = !self.is_dead();
        self.health -= amount;
        was_alive && self.is_dead()
    }

    /// Bullet launch point: middle of the edge facing the enemy.
    pub fn muzzle(&self) -> Vec2 {
        let x = match self.side {
            Side::Left => self.rect.max.x,
            Side::Right => self.rect.min.x,
        };
        Vec2::new(x, self.center().y)
    }

    /// Back to spawn for a new round. Score survives.
    pub fn reset(&mut self, t: &Tunables) {
        *self = Self {
            score: self.score,
            ..Self::new(self.side, t)
        };
    }
}
