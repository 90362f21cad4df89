mod common;

use bevy::prelude::*;
use space_duel::common::arena::Side;
use space_duel::common::state::GameState;
use space_duel::plugins::control::{ControlCommand, Pilot};
use space_duel::plugins::projectiles::components::Arsenal;
use space_duel::plugins::ships::components::{Opponent, Ship};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();
    common::step(&mut app, 3);
    assert_eq!(common::state(&app), GameState::Menu);
}

#[test]
fn entering_a_match_spawns_a_full_duel() {
    let mut app = common::app_headless();
    common::enter(&mut app, GameState::InGame);

    let count = app
        .world_mut()
        .query::<(&Ship, &Arsenal, &Pilot, &ControlCommand, &Opponent)>()
        .iter(app.world())
        .count();
    assert_eq!(count, 2);

    let left = common::ship(&mut app, Side::Left).unwrap();
    assert_eq!(left.rect.min, Vec2::new(10.0, 10.0));
}
