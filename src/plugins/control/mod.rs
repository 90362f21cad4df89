//! Control plugin: every ship's pilot turns a snapshot into a `ControlCommand`.
//!
//! Pipeline:
//! - PreUpdate: latch keyboard state into `ControlInput` (taps survive frames
//!   that run no fixed step)
//! - FixedUpdate / SimSet::Decide: each `Pilot` reads both hulls and writes the
//!   ship's `ControlCommand`; taps are consumed afterwards
//!
//! Pilots only ever see `&Ship` / `&Arsenal`. Applying a command is the ships
//! and projectiles plugins' job.

pub mod ai;
pub mod dice;
pub mod human;
pub mod input;

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::common::arena::{Arena, Side};
use crate::common::clock::MatchClock;
use crate::common::schedule::SimSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::Arsenal;
use crate::plugins::rules::GameMode;
use crate::plugins::ships::components::{Opponent, Ship};

use ai::AiController;
use dice::SeededDice;
use human::{HumanController, KeyBindings};
use input::ControlInput;

/// What a pilot wants its ship to do this tick.
///
/// `movement` axes are in `[-1, 1]`, arena space (`y = -1` is up).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlCommand {
    pub movement: Vec2,
    pub fire_bullet: bool,
    pub fire_energy: bool,
}

/// Read-only view of one ship.
#[derive(Debug, Clone, Copy)]
pub struct ShipView<'a> {
    pub ship: &'a Ship,
    pub arsenal: &'a Arsenal,
}

/// Everything a controller may look at for one decision.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub dt: f32,
    /// Match clock.
    pub now: f32,
    pub arena: Arena,
    pub input: &'a ControlInput,
    pub me: ShipView<'a>,
    pub enemy: ShipView<'a>,
}

pub trait Controller {
    fn command(&mut self, ctx: &TickContext<'_>) -> ControlCommand;
}

/// The controller seated in a ship.
#[derive(Component, Debug)]
pub enum Pilot {
    Human(HumanController),
    Ai(AiController),
}

impl Pilot {
    pub fn for_seat(side: Side, mode: GameMode, tunables: &Tunables) -> Self {
        if mode.is_human(side) {
            return Pilot::Human(HumanController::new(KeyBindings::for_side(side), tunables.human_ramp));
        }

        let dice = match tunables.ai_seed {
            // Distinct streams per side so a mirror match does not mirror moves.
            Some(seed) => SeededDice::new(seed.wrapping_add(side as u64)),
            None => SeededDice::from_entropy(),
        };
        Pilot::Ai(AiController::new(Box::new(dice)))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pilot::Human(_) => "human",
            Pilot::Ai(_) => "AI",
        }
    }

    /// Forget per-round state; seats and dice stay.
    pub fn reset_round(&mut self) {
        match self {
            Pilot::Human(h) => h.reset(),
            Pilot::Ai(a) => a.reset(),
        }
    }
}

impl Controller for Pilot {
    fn command(&mut self, ctx: &TickContext<'_>) -> ControlCommand {
        match self {
            Pilot::Human(h) => h.command(ctx),
            Pilot::Ai(a) => a.command(ctx),
        }
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<ControlInput>()
        .add_systems(PreUpdate, input::latch_input.after(InputSystems))
        .add_systems(OnEnter(GameState::InGame), input::clear_input)
        .add_systems(FixedUpdate, decide_commands.in_set(SimSet::Decide));
}

pub fn decide_commands(
    time: Res<Time<Fixed>>,
    clock: Res<MatchClock>,
    arena: Res<Arena>,
    mut input: ResMut<ControlInput>,
    q_hulls: Query<(&Ship, &Arsenal)>,
    mut q_pilots: Query<(Entity, &Opponent, &mut Pilot, &mut ControlCommand)>,
) {
    for (e, opponent, mut pilot, mut cmd) in &mut q_pilots {
        let Ok((ship, arsenal)) = q_hulls.get(e) else {
            continue;
        };
        let Ok((enemy_ship, enemy_arsenal)) = q_hulls.get(opponent.0) else {
            debug!("Pilot on {e:?} has no opponent hull");
            continue;
        };

        let ctx = TickContext {
            dt: time.delta_secs(),
            now: clock.now(),
            arena: *arena,
            input: &input,
            me: ShipView { ship, arsenal },
            enemy: ShipView {
                ship: enemy_ship,
                arsenal: enemy_arsenal,
            },
        };
        *cmd = pilot.command(&ctx);
    }

    input.consume_taps();
}
