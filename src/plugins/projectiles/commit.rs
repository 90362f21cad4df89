//! Sweep commit: compact every arsenal once hits are resolved.

use bevy::prelude::*;

use super::components::Arsenal;

pub fn sweep_spent(mut q: Query<&mut Arsenal>) {
    for mut arsenal in &mut q {
        // Skip the change-detection write when nothing went inactive.
        let spent = arsenal.bullets.iter().any(|b| !b.active) || arsenal.orbs.iter().any(|o| !o.active);
        if !spent {
            continue;
        }
        arsenal.bullets.sweep();
        arsenal.orbs.sweep();
    }
}
