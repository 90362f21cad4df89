//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `space_duel::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed manual duration per `update()`, one fixed step
//!   each unless a test asks for more.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use space_duel::common::arena::Side;
use space_duel::common::state::GameState;
use space_duel::common::tunables::Tunables;
use space_duel::plugins::ships::components::Ship;

pub const STEP: f64 = 1.0 / 64.0;

pub fn app_headless() -> App {
    app_headless_with(Tunables {
        ai_seed: Some(0x5EED),
        ..default()
    })
}

pub fn app_headless_with(tunables: Tunables) -> App {
    app_headless_stepping(tunables, 1)
}

/// Headless app that runs `fixed_steps` fixed ticks per `update()`.
pub fn app_headless_stepping(tunables: Tunables, fixed_steps: u32) -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        STEP * f64::from(fixed_steps),
    )));
    app.insert_resource(tunables);

    space_duel::game::configure_headless(&mut app);
    app
}

pub fn enter(app: &mut App, state: GameState) {
    app.world_mut().resource_mut::<NextState<GameState>>().set(state);
    app.update();
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn step(app: &mut App, updates: usize) {
    for _ in 0..updates {
        app.update();
    }
}

pub fn ship(app: &mut App, side: Side) -> Option<Ship> {
    app.world_mut()
        .query::<&Ship>()
        .iter(app.world())
        .find(|s| s.side == side)
        .cloned()
}

pub fn ship_mut<R>(app: &mut App, side: Side, f: impl FnOnce(&mut Ship) -> R) -> Option<R> {
    let world = app.world_mut();
    let mut q = world.query::<&mut Ship>();
    q.iter_mut(world).find(|s| s.side == side).map(|mut s| f(&mut s))
}
