//! Match clock.
//!
//! Seconds of simulated play since the round started. Energy orbs stamp their
//! launch time with it and the AI ages them against it, so it only advances in
//! the fixed step and is zeroed on every round start.

use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MatchClock(pub f32);

impl MatchClock {
    #[inline]
    pub fn now(&self) -> f32 {
        self.0
    }
}

pub fn tick_match_clock(time: Res<Time<Fixed>>, mut clock: ResMut<MatchClock>) {
    clock.0 += time.delta_secs();
}

pub fn reset_match_clock(mut clock: ResMut<MatchClock>) {
    *clock = MatchClock::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::{fixed_time_with_delta, run_system_once};

    #[test]
    fn clock_accumulates_fixed_steps_and_resets() {
        let mut world = World::new();
        world.insert_resource(MatchClock::default());
        world.insert_resource(fixed_time_with_delta(0.25));

        run_system_once(&mut world, tick_match_clock);
        run_system_once(&mut world, tick_match_clock);
        assert!((world.resource::<MatchClock>().now() - 0.5).abs() < 1e-6);

        run_system_once(&mut world, reset_match_clock);
        assert_eq!(world.resource::<MatchClock>().now(), 0.0);
    }
}
