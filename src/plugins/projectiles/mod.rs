//! Projectiles plugin: message-based fire pipeline over per-ship arenas.
//!
//! # Data flow
//! ```text
//! FixedUpdate (InGame only)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  SimSet::Fire                                                              │
//!│  (A) Producer: request_fire                                                │
//!│      - reads: ControlCommand per ship                                      │
//!│      - writes: FireRequest message                                         │
//!│  (B) Consumer: allocate_shots                                              │
//!│      - reads: FireRequest messages, Ship, Opponent, MatchClock             │
//!│      - mutates: Arsenal.{bullets,orbs} (caps checked here only)            │
//!│                                                                            │
//!│  SimSet::Fly                                                               │
//!│  (C) fly_projectiles: bullets move, orbs steer/move, expiry flips active   │
//!│                                                                            │
//!│  SimSet::Resolve                                                           │
//!│  (D) resolve_hits: enemy projectiles vs own hull, damage, kill score       │
//!│                                                                            │
//!│  SimSet::Sweep                                                             │
//!│  (E) sweep_spent: swap-remove every inactive projectile                    │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is ever removed from an arsenal before (E), so systems in between
//! can rely on indices and lengths being stable within a tick.

pub mod arena;
pub mod components;
pub mod collision;

pub mod messages;
pub mod request;
pub mod allocator;
pub mod flight;
pub mod commit;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::schedule::SimSet;

pub struct ProjectilesPlugin;

/// Messages are double-buffered; `update()` advances buffers.
fn update_fire_messages(mut msgs: ResMut<Messages<messages::FireRequest>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Messages<messages::FireRequest>>();
        app.add_systems(PostUpdate, update_fire_messages);

        app.add_systems(
            FixedUpdate,
            (request::request_fire, allocator::allocate_shots)
                .chain()
                .in_set(SimSet::Fire),
        )
        .add_systems(FixedUpdate, flight::fly_projectiles.in_set(SimSet::Fly))
        .add_systems(FixedUpdate, collision::resolve_hits.in_set(SimSet::Resolve))
        .add_systems(FixedUpdate, commit::sweep_spent.in_set(SimSet::Sweep));
    }
}
