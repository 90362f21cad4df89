//! Global state machine.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Menu,
    InGame,
    GameOver,
}

/// Set once a round has a result, cleared on entering `InGame`.
///
/// The `GameOver` transition only applies on the next frame, so fixed steps
/// later in the same frame check this instead of the state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundOver(pub bool);

/// Run condition: the round is still being played.
pub fn round_live(round: Option<Res<RoundOver>>) -> bool {
    !round.is_some_and(|r| r.0)
}
