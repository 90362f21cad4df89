//! Command -> velocity -> position, with half-arena confinement.

use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::math::{approach, normalize};
use crate::plugins::control::ControlCommand;

use super::components::Ship;

/// Axis inputs below this magnitude count as released.
pub const AXIS_DEAD_ZONE: f32 = 0.01;

fn dead_zone(v: f32) -> f32 {
    if v.abs() < AXIS_DEAD_ZONE { 0.0 } else { v }
}

/// Velocity after one step toward what `cmd` asks for.
pub fn steer_velocity(ship: &Ship, cmd: &ControlCommand, dt: f32) -> Vec2 {
    let dir = normalize(Vec2::new(dead_zone(cmd.movement.x), dead_zone(cmd.movement.y)));
    let desired = dir * ship.speed;

    let step_axis = |current: f32, wanted: f32| {
        if wanted != 0.0 {
            approach(current, wanted, ship.accel * dt)
        } else {
            approach(current, 0.0, ship.decel * dt)
        }
    };

    Vec2::new(
        step_axis(ship.velocity.x, desired.x),
        step_axis(ship.velocity.y, desired.y),
    )
}

/// One movement step. x resolves before y; a blocked axis loses its velocity.
pub fn step_ship(ship: &mut Ship, cmd: &ControlCommand, arena: &Arena, dt: f32) {
    ship.velocity = steer_velocity(ship, cmd, dt);

    let dx = Vec2::new(ship.velocity.x * dt, 0.0);
    let moved_x = Rect::from_corners(ship.rect.min + dx, ship.rect.max + dx);
    if arena.fits(ship.side, moved_x) {
        ship.rect = moved_x;
    } else {
        ship.velocity.x = 0.0;
    }

    let dy = Vec2::new(0.0, ship.velocity.y * dt);
    let moved_y = Rect::from_corners(ship.rect.min + dy, ship.rect.max + dy);
    if arena.fits(ship.side, moved_y) {
        ship.rect = moved_y;
    } else {
        ship.velocity.y = 0.0;
    }
}
