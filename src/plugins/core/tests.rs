use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<Arena>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_preinserted_tunables_and_derives_arena_from_them() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        arena_width: 1000.0,
        arena_height: 600.0,
        ..default()
    });
    core::plugin(&mut app);

    assert_eq!(app.world().resource::<Tunables>().arena_width, 1000.0);
    assert_eq!(*app.world().resource::<Arena>(), Arena::new(1000.0, 600.0));
}
