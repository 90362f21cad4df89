use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::clock::MatchClock;
use crate::plugins::ships::components::Ship;

use super::components::Arsenal;

/// Advance every live projectile by one fixed step.
pub fn fly_projectiles(
    time: Res<Time<Fixed>>,
    clock: Res<MatchClock>,
    arena: Res<Arena>,
    q_ships: Query<(Entity, &Ship)>,
    mut q_arsenals: Query<&mut Arsenal>,
) {
    let dt = time.delta_secs();
    let now = clock.now();

    // Orbs chase the target's current hull, so read positions up front.
    let centers: Vec<(Entity, Vec2)> = q_ships.iter().map(|(e, s)| (e, s.center())).collect();
    let center_of = |e: Entity| centers.iter().find(|(id, _)| *id == e).map(|(_, c)| *c);

    for mut arsenal in &mut q_arsenals {
        for bullet in arsenal.bullets.iter_mut() {
            bullet.advance(dt, arena.width);
        }
        for orb in arsenal.orbs.iter_mut() {
            let target = center_of(orb.target);
            orb.advance(target, now, dt, &arena);
        }
    }
}
