use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::math::normalize;
use crate::common::tunables::Tunables;

use super::arena::{Projectile, ProjectileArena};

/// Bullets expire this far past the left edge (the right edge has no slack).
pub const BULLET_EXPIRY_SLACK: f32 = 10.0;

/// A straight shot. `vx` is signed: positive flies right.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
    pub vx: f32,
    pub damage: f32,
    pub active: bool,
}

impl Bullet {
    /// A bullet whose trailing edge sits on `muzzle`, centred vertically on it.
    pub fn fired_from(muzzle: Vec2, size: Vec2, vx: f32, damage: f32) -> Self {
        let min_x = if vx >= 0.0 { muzzle.x } else { muzzle.x - size.x };
        let min = Vec2::new(min_x, muzzle.y - size.y * 0.5);
        Self {
            rect: Rect::from_corners(min, min + size),
            vx,
            damage,
            active: true,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn advance(&mut self, dt: f32, arena_width: f32) {
        if !self.active {
            return;
        }
        let dx = Vec2::new(self.vx * dt, 0.0);
        self.rect.min += dx;
        self.rect.max += dx;

        let x = self.rect.min.x;
        if x < -BULLET_EXPIRY_SLACK || x > arena_width {
            self.active = false;
        }
    }
}

impl Projectile for Bullet {
    #[inline]
    fn is_active(&self) -> bool {
        self.active
    }
}

/// Homing energy weapon.
///
/// Steers toward its target for `homing_secs` after launch, then flies
/// straight and dies once it leaves the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyOrb {
    pub pos: Vec2,
    /// Unit travel direction.
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub homing: bool,
    pub active: bool,
    /// Match clock at launch.
    pub emitted_at: f32,
    pub homing_secs: f32,
    pub homing_strength: f32,
    pub damage: f32,
    pub target: Entity,
}

impl EnergyOrb {
    #[inline]
    pub fn time_alive(&self, now: f32) -> f32 {
        now - self.emitted_at
    }

    /// Blend the travel direction toward `target_center`.
    pub fn steer_toward(&mut self, target_center: Vec2, dt: f32) {
        let to_target = normalize(target_center - self.pos);
        self.dir += (to_target - self.dir) * self.homing_strength * dt;
        self.dir = normalize(self.dir);
    }

    /// One flight step. `target_center` is `None` once the target is gone.
    pub fn advance(&mut self, target_center: Option<Vec2>, now: f32, dt: f32, arena: &Arena) {
        if !self.active {
            return;
        }

        if self.time_alive(now) > self.homing_secs {
            self.homing = false;
        }
        if !self.homing && !arena.contains_point(self.pos) {
            self.active = false;
        }

        if self.homing {
            if let Some(center) = target_center {
                self.steer_toward(center, dt);
            }
        }

        self.pos += self.dir * self.speed * dt;
    }

    /// Circle vs rectangle overlap.
    pub fn overlaps(&self, rect: Rect) -> bool {
        let closest = self.pos.clamp(rect.min, rect.max);
        closest.distance_squared(self.pos) <= self.radius * self.radius
    }
}

impl Projectile for EnergyOrb {
    #[inline]
    fn is_active(&self) -> bool {
        self.active
    }
}

/// Everything a ship has fired, plus its weapon limits.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Arsenal {
    pub bullets: ProjectileArena<Bullet>,
    pub orbs: ProjectileArena<EnergyOrb>,
    pub bullet_limit: usize,
    pub max_energy_shots: usize,
    pub bullet_damage: f32,
    pub energy_damage: f32,
}

impl Arsenal {
    pub fn from_tunables(t: &Tunables) -> Self {
        Self {
            bullets: ProjectileArena::with_capacity(t.bullet_limit),
            orbs: ProjectileArena::with_capacity(t.max_energy_shots),
            bullet_limit: t.bullet_limit,
            max_energy_shots: t.max_energy_shots,
            bullet_damage: t.bullet_damage,
            energy_damage: t.energy_damage,
        }
    }

    #[inline]
    pub fn can_fire_bullet(&self) -> bool {
        self.bullets.len() < self.bullet_limit
    }

    #[inline]
    pub fn can_fire_energy(&self) -> bool {
        self.orbs.len() < self.max_energy_shots
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
        self.orbs.clear();
    }
}
