//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod control;
pub mod core;
pub mod projectiles;
pub mod rules;
pub mod ships;
pub mod world;

// Render-only
pub mod camera;
pub mod hud;
pub mod lighting;
pub mod render;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    world::plugin(app);
    rules::plugin(app);
    control::plugin(app);
    ships::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    render::plugin(app);
    hud::plugin(app);
}

