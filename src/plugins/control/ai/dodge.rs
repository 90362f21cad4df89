//! Dodge search.
//!
//! Searches return a raw direction; callers normalize at the point of use.
//! Energy candidates are filtered by reaction delay, a per-orb dice roll,
//! and alignment, then ranked by `alignment / distance`.

use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::math::{cross_z, dot, normalize};
use crate::plugins::control::dice::Dice;
use crate::plugins::projectiles::arena::ProjectileArena;
use crate::plugins::projectiles::components::{Arsenal, Bullet, EnergyOrb};
use crate::plugins::ships::components::Ship;

use super::threat::{any_lane_threat, energy_threat_present, is_incoming_threat};

/// How far ahead a dodge direction is checked against the ship's half.
pub const DODGE_PROBE: f32 = 100.0;
/// Orbs younger than this are ignored.
pub const REACTION_DELAY: f32 = 0.2;
/// A `roll(0, 100)` above this skips the orb for the tick.
pub const REACTION_ROLL_CUTOFF: i32 = 70;
pub const MIN_ALIGNMENT: f32 = 0.3;

pub const ENERGY_DODGE_COOLDOWN: f32 = 1.2;
pub const BULLET_DODGE_COOLDOWN: f32 = 1.0;
/// Cooldown jitter, in hundredths of a second either way.
pub const DODGE_JITTER: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreatKind {
    Bullet,
    Energy,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DodgeState {
    #[default]
    Idle,
    Dodging { threat: ThreatKind, dir: Vec2 },
}

impl DodgeState {
    #[inline]
    pub fn is_dodging(&self) -> bool {
        matches!(self, DodgeState::Dodging { .. })
    }

    pub fn threat(&self) -> Option<ThreatKind> {
        match self {
            DodgeState::Idle => None,
            DodgeState::Dodging { threat, .. } => Some(*threat),
        }
    }
}

/// True when moving the ship's centre `DODGE_PROBE` units along `dir` keeps
/// the whole hull in its half.
pub fn probe_fits(ship: &Ship, arena: &Arena, dir: Vec2) -> bool {
    let probe = Rect::from_center_size(ship.center() + dir * DODGE_PROBE, ship.size());
    arena.fits(ship.side, probe)
}

/// Sidestep for the most dangerous homing orb, if any qualifies.
pub fn energy_dodge(
    ship: &Ship,
    arena: &Arena,
    orbs: &ProjectileArena<EnergyOrb>,
    now: f32,
    dice: &mut dyn Dice,
) -> Option<Vec2> {
    let center = ship.center();
    let mut best: Option<(f32, Vec2)> = None;

    for orb in orbs {
        if !orb.active || !orb.homing {
            continue;
        }
        if orb.time_alive(now) <= REACTION_DELAY {
            continue;
        }
        if dice.roll(0, 100) > REACTION_ROLL_CUTOFF {
            continue;
        }

        let to_ship = center - orb.pos;
        let dist_sq = to_ship.length_squared();
        if dist_sq < 1e-6 {
            continue;
        }
        let to_ship_n = normalize(to_ship);
        let alignment = dot(to_ship_n, orb.dir);
        if alignment < MIN_ALIGNMENT {
            continue;
        }

        let score = alignment / dist_sq.sqrt();
        if best.is_some_and(|(s, _)| score <= s) {
            continue;
        }

        let left = Vec2::new(-orb.dir.y, orb.dir.x);
        let right = Vec2::new(orb.dir.y, -orb.dir.x);
        let (mut chosen, other) = if cross_z(orb.dir, to_ship_n) > 0.0 {
            (left, right)
        } else {
            (right, left)
        };
        if !probe_fits(ship, arena, chosen) {
            chosen = other;
        }

        best = Some((score, chosen));
    }

    best.map(|(_, dir)| dir)
}

/// Vertical step away from the first incoming bullet.
pub fn bullet_dodge(ship: &Ship, arena: &Arena, bullets: &ProjectileArena<Bullet>) -> Option<Vec2> {
    let center = ship.center();
    let half_h = ship.size().y * 0.5;

    bullets.iter().find(|b| is_incoming_threat(b, ship)).map(|b| {
        let mut dy = if center.y - b.center().y > 0.0 { 1.0 } else { -1.0 };
        let probe_y = center.y + dy * DODGE_PROBE;
        if probe_y < half_h {
            dy = 1.0;
        }
        if probe_y > arena.height - half_h {
            dy = -1.0;
        }
        Vec2::new(0.0, dy)
    })
}

/// Run the search for one threat kind against the enemy's arsenal.
pub fn search(
    kind: ThreatKind,
    ship: &Ship,
    arena: &Arena,
    enemy: &Arsenal,
    now: f32,
    dice: &mut dyn Dice,
) -> Option<Vec2> {
    match kind {
        ThreatKind::Energy => energy_dodge(ship, arena, &enemy.orbs, now, dice),
        ThreatKind::Bullet => bullet_dodge(ship, arena, &enemy.bullets),
    }
}

/// Coarse release check for an ongoing dodge.
pub fn is_threat_cleared(kind: ThreatKind, ship: &Ship, enemy: &Arsenal) -> bool {
    match kind {
        ThreatKind::Bullet => !any_lane_threat(&enemy.bullets, ship, ship.center().y),
        ThreatKind::Energy => !energy_threat_present(&enemy.orbs),
    }
}
