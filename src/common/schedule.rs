//! Fixed-step simulation ordering.
//!
//! ```text
//! FixedUpdate (InGame, round not yet decided), chained:
//!   Clock -> Decide -> Move -> Fire -> Fly -> Resolve -> Sweep -> Rules
//! ```
//!
//! Feature plugins put their systems into one of these sets instead of
//! naming each other's systems in `.after(...)`.

use bevy::prelude::*;

use crate::common::state::{round_live, GameState, RoundOver};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Clock,
    Decide,
    Move,
    Fire,
    Fly,
    Resolve,
    Sweep,
    Rules,
}

pub fn configure(app: &mut App) {
    app.init_resource::<RoundOver>();
    app.configure_sets(
        FixedUpdate,
        (
            SimSet::Clock,
            SimSet::Decide,
            SimSet::Move,
            SimSet::Fire,
            SimSet::Fly,
            SimSet::Resolve,
            SimSet::Sweep,
            SimSet::Rules,
        )
            .chain()
            .run_if(in_state(GameState::InGame).and(round_live)),
    );
}
