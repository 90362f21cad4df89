//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; we call `world.flush()`
//! after running so queued commands are applied before assertions.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::arena::Side;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::Arsenal;
use crate::plugins::ships::components::Ship;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A `Time<Fixed>` whose last step lasted `dt` seconds.
pub fn fixed_time_with_delta(dt: f32) -> Time<Fixed> {
    let mut t = Time::<Fixed>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

/// A default ship of `side` with its centre moved to `center`.
pub fn ship_at(side: Side, center: Vec2) -> Ship {
    let mut ship = Ship::new(side, &Tunables::default());
    ship.rect = Rect::from_center_size(center, ship.size());
    ship
}

/// An empty arsenal with default caps.
pub fn empty_arsenal() -> Arsenal {
    Arsenal::from_tunables(&Tunables::default())
}
