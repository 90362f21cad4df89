//! Common, shared types.

pub mod arena;
pub mod clock;
pub mod math;
pub mod schedule;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
