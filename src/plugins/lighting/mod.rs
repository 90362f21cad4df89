//! Lighting plugin (Firefly) (render-only).
//!
//! Every ship carries a point light in its own colour. The light is a child of
//! the ship, so it follows the synced transform and despawns with it.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::ships::components::Ship;
use crate::plugins::ships::ship_color;

#[derive(Component)]
pub struct ShipLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Update, attach_ship_lights);
}

fn attach_ship_lights(mut commands: Commands, q_new: Query<(Entity, &Ship), Added<Ship>>) {
    for (e, ship) in &q_new {
        commands.entity(e).with_child((
            Name::new("ShipLight"),
            ShipLight,
            PointLight2d {
                color: ship_color(ship.side),
                radius: 450.0,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
        ));
    }
}
