//! Projectile gizmos (render-only).
//!
//! Projectiles are plain data inside each ship's `Arsenal`, not entities, so
//! they are drawn immediate-mode every frame.

use bevy::prelude::*;

use crate::common::arena::{Arena, Side};
use crate::plugins::projectiles::components::Arsenal;
use crate::plugins::ships::components::Ship;
use crate::plugins::ships::ship_color;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, draw_projectiles);
}

fn orb_color(side: Side) -> Color {
    match side {
        Side::Left => Color::srgb(0.3, 0.95, 0.4),
        Side::Right => Color::srgb(1.0, 0.35, 0.45),
    }
}

fn draw_projectiles(mut gizmos: Gizmos, arena: Res<Arena>, q: Query<(&Ship, &Arsenal)>) {
    for (ship, arsenal) in &q {
        let bullet_color = ship_color(ship.side);
        for bullet in arsenal.bullets.active() {
            gizmos.rect_2d(arena.to_world(bullet.center()), bullet.rect.size(), bullet_color);
        }

        let color = orb_color(ship.side);
        for orb in arsenal.orbs.active() {
            gizmos.circle_2d(arena.to_world(orb.pos), orb.radius, color);
        }
    }
}
