//! Rules plugin: game modes, match end and the menu / game-over keys.
//!
//! ```text
//! Menu --1/2/3--> InGame --a ship at <= 0 hp--> GameOver --R--> InGame
//!                                                   |
//!                                                   +--Esc--> Menu
//! ```

use bevy::prelude::*;

use crate::common::arena::Side;
use crate::common::clock::{reset_match_clock, tick_match_clock, MatchClock};
use crate::common::schedule::SimSet;
use crate::common::state::{GameState, RoundOver};
use crate::plugins::ships::components::Ship;

/// Who sits in which seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// AI vs AI.
    #[default]
    NoPlayer,
    /// Human on the left, AI on the right.
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn is_human(self, side: Side) -> bool {
        match self {
            GameMode::NoPlayer => false,
            GameMode::SinglePlayer => side == Side::Left,
            GameMode::TwoPlayer => true,
        }
    }

    pub fn from_menu_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Digit1 => Some(GameMode::SinglePlayer),
            KeyCode::Digit2 => Some(GameMode::TwoPlayer),
            KeyCode::Digit3 => Some(GameMode::NoPlayer),
            _ => None,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSetup {
    pub mode: GameMode,
}

/// How the last round ended. `winner == None` is a draw.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchOutcome {
    pub winner: Option<Side>,
    /// Match clock when the round ended.
    pub duration: f32,
}

/// Winner of a round given each side's death flag, or `None` while both live.
pub fn decide_outcome(left_dead: bool, right_dead: bool) -> Option<Option<Side>> {
    match (left_dead, right_dead) {
        (false, false) => None,
        (true, true) => Some(None),
        (true, false) => Some(Some(Side::Right)),
        (false, true) => Some(Some(Side::Left)),
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<MatchSetup>()
        .init_resource::<MatchOutcome>()
        .init_resource::<MatchClock>()
        .init_resource::<RoundOver>()
        .add_systems(OnEnter(GameState::InGame), (reset_match_clock, reset_outcome))
        .add_systems(FixedUpdate, tick_match_clock.in_set(SimSet::Clock))
        .add_systems(FixedUpdate, detect_match_end.in_set(SimSet::Rules))
        .add_systems(Update, menu_input.run_if(in_state(GameState::Menu)))
        .add_systems(Update, game_over_input.run_if(in_state(GameState::GameOver)));
}

fn reset_outcome(mut outcome: ResMut<MatchOutcome>, mut round: ResMut<RoundOver>) {
    *outcome = MatchOutcome::default();
    round.0 = false;
}

pub fn detect_match_end(
    clock: Res<MatchClock>,
    q_ships: Query<&Ship>,
    mut outcome: ResMut<MatchOutcome>,
    mut round: ResMut<RoundOver>,
    mut next: ResMut<NextState<GameState>>,
) {
    if round.0 {
        return;
    }

    let mut left_dead = false;
    let mut right_dead = false;
    for ship in &q_ships {
        match ship.side {
            Side::Left => left_dead |= ship.is_dead(),
            Side::Right => right_dead |= ship.is_dead(),
        }
    }

    let Some(winner) = decide_outcome(left_dead, right_dead) else {
        return;
    };

    *outcome = MatchOutcome {
        winner,
        duration: clock.now(),
    };
    round.0 = true;
    match winner {
        Some(side) => info!("{} wins after {:.1}s", side.label(), clock.now()),
        None => info!("Draw after {:.1}s", clock.now()),
    }
    next.set(GameState::GameOver);
}

fn menu_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut setup: ResMut<MatchSetup>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    let Some(mode) = keys.get_just_pressed().find_map(|k| GameMode::from_menu_key(*k)) else {
        return;
    };

    setup.mode = mode;
    next.set(GameState::InGame);
}

fn game_over_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut next: ResMut<NextState<GameState>>) {
    let Some(keys) = keys else {
        return;
    };

    if keys.just_pressed(KeyCode::KeyR) {
        next.set(GameState::InGame);
    } else if keys.just_pressed(KeyCode::Escape) {
        next.set(GameState::Menu);
    }
}
