//! Buffered fire requests.
//!
//! Pilots never touch an [`Arsenal`](super::components::Arsenal) directly.
//! [`request`](super::request) turns the tick's commands into intent, and the
//! [`allocator`](super::allocator) is the single writer that applies the caps
//! and pushes projectiles.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    Bullet,
    Energy,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireRequest {
    pub shooter: Entity,
    pub weapon: WeaponKind,
}
