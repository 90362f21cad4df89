//! Geometric bullet and orb threat tests.
//!
//! Impact time is `(ship_cx - bullet_cx) / vx`: positive only while the
//! bullet is still flying toward the ship's centre line.

use crate::plugins::projectiles::arena::ProjectileArena;
use crate::plugins::projectiles::components::{Bullet, EnergyOrb};
use crate::plugins::ships::components::Ship;

/// Look-ahead for the lane test used by positioning and dodge release.
pub const LANE_WINDOW: f32 = 1.5;
pub const LANE_TOLERANCE: f32 = 0.5;

/// Look-ahead for the test that starts and steers bullet dodges.
pub const INCOMING_WINDOW: f32 = 2.0;
pub const INCOMING_TOLERANCE: f32 = 0.6;

/// Seconds until `bullet` reaches the ship's centre x, or `None` if it never will.
pub fn time_to_impact(bullet: &Bullet, ship: &Ship) -> Option<f32> {
    if bullet.vx == 0.0 {
        return None;
    }
    let t = (ship.center().x - bullet.center().x) / bullet.vx;
    (t > 0.0).then_some(t)
}

fn is_threat(bullet: &Bullet, ship: &Ship, y: f32, window: f32, tolerance: f32) -> bool {
    if !bullet.active {
        return false;
    }
    if (bullet.center().y - y).abs() > ship.size().y * tolerance {
        return false;
    }
    time_to_impact(bullet, ship).is_some_and(|t| t <= window)
}

/// Would `bullet` hit a ship whose centre sat at height `y`, soon?
pub fn is_lane_threat(bullet: &Bullet, ship: &Ship, y: f32) -> bool {
    is_threat(bullet, ship, y, LANE_WINDOW, LANE_TOLERANCE)
}

/// Wider test against the ship's current centre.
pub fn is_incoming_threat(bullet: &Bullet, ship: &Ship) -> bool {
    is_threat(bullet, ship, ship.center().y, INCOMING_WINDOW, INCOMING_TOLERANCE)
}

pub fn any_lane_threat(bullets: &ProjectileArena<Bullet>, ship: &Ship, y: f32) -> bool {
    bullets.iter().any(|b| is_lane_threat(b, ship, y))
}

/// Any live homing orb at all.
pub fn energy_threat_present(orbs: &ProjectileArena<EnergyOrb>) -> bool {
    orbs.iter().any(|o| o.active && o.homing)
}
