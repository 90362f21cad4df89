//! Fire consumer: push new projectiles into the shooter's arsenal.
//!
//! Caps are checked here and only here. A request over the cap is dropped
//! silently; that is a gameplay decision, not an error.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::clock::MatchClock;
use crate::common::math::normalize;
use crate::common::tunables::Tunables;
use crate::plugins::ships::components::{Opponent, Ship};

use super::components::{Arsenal, Bullet, EnergyOrb};
use super::messages::{FireRequest, WeaponKind};

pub fn allocate_shots(
    tunables: Res<Tunables>,
    clock: Res<MatchClock>,
    mut reader: MessageReader<FireRequest>,
    mut q_shooters: Query<(&Ship, &Opponent, &mut Arsenal)>,
    q_targets: Query<&Ship>,
) {
    for req in reader.read() {
        let Ok((ship, opponent, mut arsenal)) = q_shooters.get_mut(req.shooter) else {
            debug!("Fire request from {:?} without a ship", req.shooter);
            continue;
        };

        match req.weapon {
            WeaponKind::Bullet => {
                if !arsenal.can_fire_bullet() {
                    continue;
                }
                let size = Vec2::new(tunables.bullet_width, tunables.bullet_height);
                let vx = ship.side.toward_enemy() * tunables.bullet_speed;
                let damage = arsenal.bullet_damage;
                arsenal
                    .bullets
                    .push(Bullet::fired_from(ship.muzzle(), size, vx, damage));
            }
            WeaponKind::Energy => {
                if !arsenal.can_fire_energy() {
                    continue;
                }
                let Ok(target) = q_targets.get(opponent.0) else {
                    debug!("Energy shot from {:?} has no target", req.shooter);
                    continue;
                };

                let pos = ship.center();
                // Point-blank launches fall back to flying straight at the enemy half.
                let mut dir = normalize(target.center() - pos);
                if dir == Vec2::ZERO {
                    dir = Vec2::new(ship.side.toward_enemy(), 0.0);
                }

                let damage = arsenal.energy_damage;
                arsenal.orbs.push(EnergyOrb {
                    pos,
                    dir,
                    speed: tunables.energy_speed,
                    radius: tunables.energy_radius,
                    homing: true,
                    active: true,
                    emitted_at: clock.now(),
                    homing_secs: tunables.energy_homing_secs,
                    homing_strength: tunables.energy_homing_strength,
                    damage,
                    target: opponent.0,
                });
            }
        }
    }
}
