//! Hit resolution.
//!
//! Each ship checks the *opponent's* projectiles against its own hull:
//! bullets against the shrunken hitbox, orbs against the full rectangle.
//! Only the hit that takes health to zero or below scores a point.

use bevy::prelude::*;

use crate::plugins::ships::components::{Opponent, Ship};

use super::components::Arsenal;

/// Apply every overlapping enemy projectile to `victim`.
///
/// Returns `true` when this call killed the ship.
pub fn apply_hits(victim: &mut Ship, enemy_arsenal: &mut Arsenal) -> bool {
    let mut killed = false;
    let hitbox = victim.hitbox();

    for bullet in enemy_arsenal.bullets.iter_mut() {
        if !bullet.active || bullet.rect.intersect(hitbox).is_empty() {
            continue;
        }
        bullet.active = false;
        killed |= victim.take_damage(bullet.damage);
    }

    let hull = victim.rect;
    for orb in enemy_arsenal.orbs.iter_mut() {
        if !orb.active || !orb.overlaps(hull) {
            continue;
        }
        orb.active = false;
        killed |= victim.take_damage(orb.damage);
    }

    killed
}

pub fn resolve_hits(
    q_pairs: Query<(Entity, &Opponent)>,
    mut q_ships: Query<(&mut Ship, &mut Arsenal)>,
) {
    for (victim_e, opponent) in &q_pairs {
        let Ok([(mut victim, _), (mut shooter, mut shooter_arsenal)]) =
            q_ships.get_many_mut([victim_e, opponent.0])
        else {
            debug!("Ship {victim_e:?} has no valid opponent");
            continue;
        };

        if apply_hits(&mut victim, &mut shooter_arsenal) {
            shooter.score += 1;
            info!("{} ship destroyed", victim.side.label());
        }
    }
}
