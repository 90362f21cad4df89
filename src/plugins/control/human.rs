use bevy::prelude::*;

use crate::common::arena::Side;

use super::{ControlCommand, Controller, TickContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub bullet: KeyCode,
    pub energy: KeyCode,
}

impl KeyBindings {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                up: KeyCode::KeyW,
                down: KeyCode::KeyS,
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                bullet: KeyCode::KeyC,
                energy: KeyCode::KeyV,
            },
            Side::Right => Self {
                up: KeyCode::ArrowUp,
                down: KeyCode::ArrowDown,
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
                bullet: KeyCode::KeyM,
                energy: KeyCode::KeyK,
            },
        }
    }
}

/// Keyboard pilot.
///
/// Movement eases toward the held direction instead of snapping, so a tap
/// nudges and a hold reaches full deflection after a few frames. Fire is
/// edge-triggered: holding the key fires once.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanController {
    pub bindings: KeyBindings,
    /// Ease rate per second.
    pub ramp: f32,
    axis: Vec2,
}

impl HumanController {
    pub fn new(bindings: KeyBindings, ramp: f32) -> Self {
        Self {
            bindings,
            ramp,
            axis: Vec2::ZERO,
        }
    }

    pub fn reset(&mut self) {
        self.axis = Vec2::ZERO;
    }
}

impl Controller for HumanController {
    fn command(&mut self, ctx: &TickContext<'_>) -> ControlCommand {
        let input = ctx.input;
        let b = &self.bindings;

        let mut target = Vec2::ZERO;
        if input.is_held(b.up) {
            target.y -= 1.0;
        }
        if input.is_held(b.down) {
            target.y += 1.0;
        }
        if input.is_held(b.left) {
            target.x -= 1.0;
        }
        if input.is_held(b.right) {
            target.x += 1.0;
        }

        // Clamped so a long step lands on the target instead of overshooting.
        let t = (self.ramp * ctx.dt).min(1.0);
        self.axis += (target - self.axis) * t;

        ControlCommand {
            movement: self.axis,
            fire_bullet: input.was_tapped(b.bullet),
            fire_energy: input.was_tapped(b.energy),
        }
    }
}
