//! Core plugin: shared resources, global settings and the fixed-step set order.

use bevy::prelude::*;

use crate::common::schedule;
use crate::common::tunables::{Tunables, TUNABLES_PATH};

pub fn plugin(app: &mut App) {
    // Tests insert their own tunables before registering plugins.
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::load_or_default(TUNABLES_PATH));
    }
    let arena = app.world().resource::<Tunables>().arena();

    app.insert_resource(arena);
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    schedule::configure(app);
}

#[cfg(test)]
mod tests;
