//! World plugin: arena backdrop and the midline that splits the two halves.

use bevy::prelude::*;

use crate::common::arena::Arena;

#[derive(Component)]
pub struct Backdrop;

#[derive(Component)]
pub struct Midline;

const MIDLINE_WIDTH: f32 = 4.0;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_arena);
}

fn spawn_arena(mut commands: Commands, arena: Res<Arena>) {
    let size = Vec2::new(arena.width, arena.height);

    commands.spawn((
        Name::new("Backdrop"),
        Backdrop,
        Sprite::from_color(Color::srgb(0.08, 0.08, 0.11), size),
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));

    // Arena centre is the world origin; see `Arena::to_world`.
    commands.spawn((
        Name::new("Midline"),
        Midline,
        Sprite::from_color(Color::srgb(0.25, 0.27, 0.33), Vec2::new(MIDLINE_WIDTH, arena.height)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

#[cfg(test)]
mod tests;
