//! Ships plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn both ships (first round) or reset them (restart)
//! - FixedUpdate / SimSet::Move: apply each ship's `ControlCommand`
//! - PostUpdate: mirror arena-space hulls into `Transform`s for rendering
//! - OnEnter(Menu): despawn ships; scores and pilots go with them
//!
//! Ships deliberately outlive `InGame`: the game-over screen still shows them,
//! and a restart keeps scores and pilots.

pub mod components;
pub mod movement;

use bevy::prelude::*;

use crate::common::arena::{Arena, Side};
use crate::common::schedule::SimSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::control::{ControlCommand, Pilot};
use crate::plugins::projectiles::components::Arsenal;
use crate::plugins::rules::MatchSetup;

use components::{Opponent, Ship};

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), start_round)
        .add_systems(OnEnter(GameState::Menu), despawn_ships)
        .add_systems(FixedUpdate, apply_movement.in_set(SimSet::Move))
        .add_systems(PostUpdate, sync_transforms.before(TransformSystems::Propagate));
}

pub fn ship_color(side: Side) -> Color {
    match side {
        Side::Left => Color::srgb(0.95, 0.85, 0.2),
        Side::Right => Color::srgb(0.9, 0.25, 0.2),
    }
}

fn spawn_ship(commands: &mut Commands, side: Side, tunables: &Tunables, setup: &MatchSetup) -> Entity {
    let ship = Ship::new(side, tunables);
    let pilot = Pilot::for_seat(side, setup.mode, tunables);
    info!("{} ship enters as {}", side.label(), pilot.label());

    commands
        .spawn((
            Name::new(format!("{}Ship", side.label())),
            Sprite {
                color: ship_color(side),
                custom_size: Some(ship.size()),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            ship,
            Arsenal::from_tunables(tunables),
            pilot,
            ControlCommand::default(),
        ))
        .id()
}

/// First entry spawns and pairs both ships; later entries reset them in place.
pub fn start_round(
    mut commands: Commands,
    tunables: Res<Tunables>,
    setup: Res<MatchSetup>,
    mut q_ships: Query<(&mut Ship, &mut Arsenal, &mut Pilot, &mut ControlCommand)>,
) {
    if !q_ships.is_empty() {
        for (mut ship, mut arsenal, mut pilot, mut cmd) in &mut q_ships {
            ship.reset(&tunables);
            arsenal.clear();
            pilot.reset_round();
            *cmd = ControlCommand::default();
        }
        info!("Round restarted ({:?})", setup.mode);
        return;
    }

    let left = spawn_ship(&mut commands, Side::Left, &tunables, &setup);
    let right = spawn_ship(&mut commands, Side::Right, &tunables, &setup);
    commands.entity(left).insert(Opponent(right));
    commands.entity(right).insert(Opponent(left));
    info!("Match started ({:?})", setup.mode);
}

pub fn despawn_ships(mut commands: Commands, q_ships: Query<Entity, With<Ship>>) {
    for e in &q_ships {
        commands.entity(e).despawn();
    }
}

pub fn apply_movement(
    time: Res<Time<Fixed>>,
    arena: Res<Arena>,
    mut q_ships: Query<(&mut Ship, &ControlCommand)>,
) {
    let dt = time.delta_secs();
    for (mut ship, cmd) in &mut q_ships {
        movement::step_ship(&mut ship, cmd, &arena, dt);
    }
}

fn sync_transforms(arena: Res<Arena>, mut q_ships: Query<(&Ship, &mut Transform), Changed<Ship>>) {
    for (ship, mut tf) in &mut q_ships {
        let p = arena.to_world(ship.center());
        tf.translation.x = p.x;
        tf.translation.y = p.y;
    }
}

#[cfg(test)]
mod tests;
