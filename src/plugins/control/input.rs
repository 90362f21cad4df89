//! Keyboard latch between the variable-rate frame and the fixed step.
//!
//! `ButtonInput::just_pressed` only holds for one frame, and a frame may run
//! zero fixed steps. Taps are therefore accumulated here and cleared by the
//! first fixed step that consumes them. Held keys are a fresh copy of the
//! keyboard every frame.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone)]
pub struct ControlInput {
    held: HashSet<KeyCode>,
    tapped: HashSet<KeyCode>,
}

impl ControlInput {
    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    #[inline]
    pub fn was_tapped(&self, key: KeyCode) -> bool {
        self.tapped.contains(&key)
    }

    /// Key went down this frame.
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
        self.tapped.insert(key);
    }

    /// Replace the held set with what the keyboard reports now.
    pub fn set_held(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.held.clear();
        self.held.extend(keys);
    }

    pub fn consume_taps(&mut self) {
        self.tapped.clear();
    }
}

pub fn latch_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<ControlInput>) {
    let Some(keys) = keys else {
        return;
    };

    input.set_held(keys.get_pressed().copied());
    for key in keys.get_just_pressed() {
        input.press(*key);
    }
}

/// Drop taps left over from the menu. Held keys carry into the round.
pub fn clear_input(mut input: ResMut<ControlInput>) {
    input.consume_taps();
}
