use bevy::prelude::*;

use crate::common::arena::{Arena, Side};
use crate::common::test_utils::{fixed_time_with_delta, run_system_once, ship_at};
use crate::common::tunables::Tunables;
use crate::plugins::control::{ControlCommand, Pilot};
use crate::plugins::projectiles::components::{Arsenal, Bullet};
use crate::plugins::rules::{GameMode, MatchSetup};

use super::components::{Opponent, Ship};
use super::movement::{step_ship, steer_velocity};

fn moving(movement: Vec2) -> ControlCommand {
    ControlCommand {
        movement,
        ..default()
    }
}

#[test]
fn spawn_rects_sit_in_opposite_corners() {
    let t = Tunables::default();
    let left = Ship::spawn_rect(Side::Left, &t);
    let right = Ship::spawn_rect(Side::Right, &t);

    assert_eq!(left.min, Vec2::new(10.0, 10.0));
    assert_eq!(right.max, Vec2::new(1590.0, 890.0));
}

#[test]
fn hitbox_is_sixty_percent_around_the_centre() {
    let ship = ship_at(Side::Left, Vec2::new(100.0, 100.0));
    let hb = ship.hitbox();
    assert_eq!(hb.center(), Vec2::new(100.0, 100.0));
    assert!((hb.size() - Vec2::new(36.0, 24.0)).length() < 1e-4);
}

#[test]
fn muzzle_faces_the_enemy() {
    let left = ship_at(Side::Left, Vec2::new(100.0, 100.0));
    let right = ship_at(Side::Right, Vec2::new(1000.0, 100.0));
    assert_eq!(left.muzzle(), Vec2::new(130.0, 100.0));
    assert_eq!(right.muzzle(), Vec2::new(970.0, 100.0));
}

#[test]
fn reset_restores_spawn_but_keeps_score() {
    let t = Tunables::default();
    let mut ship = ship_at(Side::Right, Vec2::new(1000.0, 100.0));
    ship.health = -3.0;
    ship.score = 4;
    ship.velocity = Vec2::new(50.0, 0.0);

    ship.reset(&t);

    assert_eq!(ship.health, 10.0);
    assert_eq!(ship.score, 4);
    assert_eq!(ship.velocity, Vec2::ZERO);
    assert_eq!(ship.rect, Ship::spawn_rect(Side::Right, &t));
}

#[test]
fn velocity_ramps_up_at_accel_and_stops_at_decel() {
    let mut ship = ship_at(Side::Left, Vec2::new(400.0, 450.0));

    let v = steer_velocity(&ship, &moving(Vec2::X), 0.1);
    assert!((v.x - 60.0).abs() < 1e-3, "600/s^2 for 0.1s");

    ship.velocity = Vec2::new(500.0, 0.0);
    let v = steer_velocity(&ship, &moving(Vec2::ZERO), 0.01);
    assert!((v.x - 380.0).abs() < 1e-3, "12000/s^2 for 0.01s");

    let v = steer_velocity(&ship, &moving(Vec2::ZERO), 0.1);
    assert_eq!(v.x, 0.0, "decel never overshoots");
}

#[test]
fn tiny_axis_input_counts_as_released() {
    let mut ship = ship_at(Side::Left, Vec2::new(400.0, 450.0));
    ship.velocity = Vec2::new(0.0, 100.0);

    let v = steer_velocity(&ship, &moving(Vec2::new(0.005, 0.005)), 0.001);
    assert_eq!(v.x, 0.0);
    assert!(v.y < 100.0);
}

#[test]
fn movement_never_leaves_the_ships_half() {
    let arena = Arena::new(1600.0, 900.0);
    let mut ship = ship_at(Side::Left, Vec2::new(765.0, 450.0));
    ship.velocity = Vec2::new(500.0, 0.0);

    step_ship(&mut ship, &moving(Vec2::X), &arena, 0.1);

    assert_eq!(ship.center().x, 765.0, "x step rejected at the midline");
    assert_eq!(ship.velocity.x, 0.0);
    assert!(arena.fits(Side::Left, ship.rect));
}

#[test]
fn blocked_axis_does_not_stop_the_other() {
    let arena = Arena::new(1600.0, 900.0);
    let mut ship = ship_at(Side::Right, Vec2::new(1000.0, 21.0));
    ship.velocity = Vec2::new(-500.0, -500.0);

    step_ship(&mut ship, &moving(Vec2::new(-1.0, -1.0)), &arena, 0.01);

    assert_eq!(ship.velocity.y, 0.0);
    assert!(ship.center().x < 1000.0);
    assert_eq!(ship.center().y, 21.0);
}

#[test]
fn apply_movement_uses_the_fixed_step() {
    let mut world = World::new();
    world.insert_resource(Arena::new(1600.0, 900.0));
    world.insert_resource(fixed_time_with_delta(0.1));
    let mut ship = ship_at(Side::Left, Vec2::new(400.0, 450.0));
    ship.velocity = Vec2::new(0.0, 500.0);
    let e = world.spawn((ship, moving(Vec2::Y))).id();

    run_system_once(&mut world, super::apply_movement);

    let ship = world.get::<Ship>(e).unwrap();
    assert!((ship.center().y - 500.0).abs() < 1e-3);
}

fn round_world(mode: GameMode) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables {
        ai_seed: Some(1),
        ..default()
    });
    world.insert_resource(MatchSetup { mode });
    world
}

#[test]
fn first_round_spawns_a_paired_duel() {
    let mut world = round_world(GameMode::SinglePlayer);
    run_system_once(&mut world, super::start_round);

    let ships: Vec<(Entity, Side, Entity, bool)> = world
        .query::<(Entity, &Ship, &Opponent, &Pilot)>()
        .iter(&world)
        .map(|(e, s, o, p)| (e, s.side, o.0, matches!(p, Pilot::Human(_))))
        .collect();
    assert_eq!(ships.len(), 2);

    let left = ships.iter().find(|s| s.1 == Side::Left).unwrap();
    let right = ships.iter().find(|s| s.1 == Side::Right).unwrap();
    assert_eq!(left.2, right.0);
    assert_eq!(right.2, left.0);
    assert!(left.3, "single player seats the human on the left");
    assert!(!right.3);
}

#[test]
fn restart_resets_ships_in_place() {
    let mut world = round_world(GameMode::NoPlayer);
    run_system_once(&mut world, super::start_round);

    let e = world
        .query::<(Entity, &Ship)>()
        .iter(&world)
        .find(|(_, s)| s.side == Side::Left)
        .map(|(e, _)| e)
        .unwrap();
    {
        let mut ship = world.get_mut::<Ship>(e).unwrap();
        ship.health = 0.0;
        ship.score = 2;
    }
    world.get_mut::<Arsenal>(e).unwrap().bullets.push(Bullet::fired_from(
        Vec2::new(100.0, 100.0),
        Vec2::new(15.0, 5.0),
        530.0,
        1.0,
    ));

    run_system_once(&mut world, super::start_round);

    assert_eq!(world.query::<&Ship>().iter(&world).count(), 2);
    let ship = world.get::<Ship>(e).unwrap();
    assert_eq!(ship.health, 10.0);
    assert_eq!(ship.score, 2);
    assert!(world.get::<Arsenal>(e).unwrap().bullets.is_empty());
}

#[test]
fn despawn_ships_clears_the_field() {
    let mut world = round_world(GameMode::TwoPlayer);
    run_system_once(&mut world, super::start_round);
    run_system_once(&mut world, super::despawn_ships);
    assert_eq!(world.query::<&Ship>().iter(&world).count(), 0);
}
