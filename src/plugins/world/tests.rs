use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::test_utils::run_system_once;

#[test]
fn spawns_backdrop_and_midline_sized_to_the_arena() {
    let mut world = World::new();
    world.insert_resource(Arena::new(1000.0, 500.0));
    run_system_once(&mut world, super::spawn_arena);

    let backdrop = world
        .query_filtered::<&Sprite, With<super::Backdrop>>()
        .single(&world)
        .unwrap();
    assert_eq!(backdrop.custom_size, Some(Vec2::new(1000.0, 500.0)));

    let (midline, tf) = world
        .query_filtered::<(&Sprite, &Transform), With<super::Midline>>()
        .single(&world)
        .unwrap();
    assert_eq!(midline.custom_size.map(|s| s.y), Some(500.0));
    assert_eq!(tf.translation.x, 0.0);
}
