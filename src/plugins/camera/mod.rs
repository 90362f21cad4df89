//! Camera plugin (render-only).
//!
//! The arena is fixed and the window is sized to it, so the camera sits at
//! the world origin for the whole session. It is spawned once at startup
//! because the menu and game-over screens need it as much as play does.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
