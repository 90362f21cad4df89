use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::plugins::control::ControlCommand;

use super::messages::{FireRequest, WeaponKind};

/// Producer: one request per set fire flag.
///
/// Does not look at the arsenal; whether the shot actually leaves is the
/// allocator's decision.
pub fn request_fire(
    q_commands: Query<(Entity, &ControlCommand)>,
    mut writer: MessageWriter<FireRequest>,
) {
    for (shooter, cmd) in &q_commands {
        if cmd.fire_bullet {
            writer.write(FireRequest {
                shooter,
                weapon: WeaponKind::Bullet,
            });
        }
        if cmd.fire_energy {
            writer.write(FireRequest {
                shooter,
                weapon: WeaponKind::Energy,
            });
        }
    }
}
