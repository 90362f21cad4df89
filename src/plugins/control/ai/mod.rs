//! AI pilot.
//!
//! # Per-tick decision
//! ```text
//!   select mode from (own health, enemy health)
//!   tick cooldowns (no floor)
//!   separation <- mode profile
//!   shooting policy          -> fire flags
//!   positioning              -> baseline vector
//!   Dodging: refresh dir, blend with baseline, maybe release
//!   Idle:    try energy dodge, then bullet dodge, else baseline
//! ```
//!
//! The controller never mutates a ship. Everything it knows about the world
//! comes through `TickContext`, and every random choice goes through the
//! injected `Dice`, so identical snapshots and identical rolls give identical
//! commands.

pub mod dodge;
pub mod mode;
pub mod threat;

use std::fmt;

use bevy::prelude::*;

use crate::common::math::normalize;

use super::dice::Dice;
use super::{ControlCommand, Controller, TickContext};

use dodge::{DodgeState, ThreatKind};
use mode::AiMode;

/// Half-height of the band in which vertical alignment counts as done.
pub const VERTICAL_DEAD_ZONE: f32 = 20.0;
/// Range of the per-tick random slack around the desired separation.
pub const SEPARATION_BUFFER: (i32, i32) = (50, 90);

/// Seconds until each action is allowed again. Negative means overdue.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldowns {
    pub shoot: f32,
    pub energy: f32,
    pub dodge: f32,
}

impl Cooldowns {
    pub fn tick(&mut self, dt: f32) {
        self.shoot -= dt;
        self.energy -= dt;
        self.dodge -= dt;
    }
}

pub struct AiController {
    mode: AiMode,
    separation: f32,
    cooldowns: Cooldowns,
    dodge: DodgeState,
    dice: Box<dyn Dice>,
}

impl fmt::Debug for AiController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiController")
            .field("mode", &self.mode)
            .field("separation", &self.separation)
            .field("cooldowns", &self.cooldowns)
            .field("dodge", &self.dodge)
            .finish_non_exhaustive()
    }
}

impl AiController {
    pub fn new(dice: Box<dyn Dice>) -> Self {
        Self {
            mode: AiMode::Neutral,
            separation: AiMode::Neutral.profile().separation,
            cooldowns: Cooldowns::default(),
            dodge: DodgeState::Idle,
            dice,
        }
    }

    #[inline]
    pub fn mode(&self) -> AiMode {
        self.mode
    }

    #[inline]
    pub fn separation(&self) -> f32 {
        self.separation
    }

    #[inline]
    pub fn cooldowns(&self) -> Cooldowns {
        self.cooldowns
    }

    #[inline]
    pub fn dodge(&self) -> DodgeState {
        self.dodge
    }

    /// Back to the freshly-seated state. The dice stream carries on.
    pub fn reset(&mut self) {
        self.mode = AiMode::Neutral;
        self.separation = AiMode::Neutral.profile().separation;
        self.cooldowns = Cooldowns::default();
        self.dodge = DodgeState::Idle;
    }

    fn update_mode(&mut self, ctx: &TickContext<'_>) {
        let mode = AiMode::select(ctx.me.ship.health, ctx.enemy.ship.health);
        if mode != self.mode {
            trace!("{} AI: {:?} -> {:?}", ctx.me.ship.side.label(), self.mode, mode);
        }
        self.mode = mode;
        self.separation = mode.profile().separation;
    }

    fn shoot(&mut self, ctx: &TickContext<'_>, cmd: &mut ControlCommand) {
        let profile = self.mode.profile();

        if self.mode.ready(self.cooldowns.shoot) {
            cmd.fire_bullet = true;
            self.cooldowns.shoot = profile.bullet_cooldown;
        }
        if self.mode.ready(self.cooldowns.energy) && ctx.me.arsenal.can_fire_energy() {
            cmd.fire_energy = true;
            self.cooldowns.energy = profile.energy_cooldown;
        }
    }

    /// Track the enemy's height unless that walks into a bullet lane.
    fn vertical(&self, ctx: &TickContext<'_>) -> f32 {
        if self.dodge.is_dodging() {
            return 0.0;
        }

        let me = ctx.me.ship;
        let y_diff = ctx.enemy.ship.center().y - me.center().y;
        let toward = if y_diff > 0.0 { 1.0 } else { -1.0 };

        let projected_y = me.center().y + toward * me.speed * ctx.dt;
        if threat::any_lane_threat(&ctx.enemy.arsenal.bullets, me, projected_y) {
            return 0.0;
        }

        if y_diff.abs() > VERTICAL_DEAD_ZONE { toward } else { 0.0 }
    }

    /// Hold the separation band, re-rolling its slack every tick.
    fn horizontal(&mut self, ctx: &TickContext<'_>) -> f32 {
        let (lo, hi) = SEPARATION_BUFFER;
        let buffer = self.dice.roll(lo, hi) as f32;

        let me = ctx.me.ship;
        let distance = (ctx.enemy.ship.center().x - me.center().x).abs();
        let toward = me.side.toward_enemy();

        if distance < self.separation - buffer {
            -toward
        } else if distance > self.separation + buffer {
            toward
        } else {
            0.0
        }
    }

    fn baseline(&mut self, ctx: &TickContext<'_>) -> Vec2 {
        if self.mode.profile().vertical_first {
            let y = self.vertical(ctx);
            let x = self.horizontal(ctx);
            Vec2::new(x, y)
        } else {
            let x = self.horizontal(ctx);
            let y = self.vertical(ctx);
            Vec2::new(x, y)
        }
    }

    fn jitter(&mut self) -> f32 {
        self.dice.roll(-dodge::DODGE_JITTER, dodge::DODGE_JITTER) as f32 / 100.0
    }

    /// Idle -> Dodging. Energy threats win over bullets.
    fn try_start_dodge(&mut self, ctx: &TickContext<'_>) -> Option<Vec2> {
        if self.cooldowns.dodge > 0.0 {
            return None;
        }

        let me = ctx.me.ship;
        let enemy = ctx.enemy.arsenal;
        let candidates = [
            (ThreatKind::Energy, dodge::ENERGY_DODGE_COOLDOWN),
            (ThreatKind::Bullet, dodge::BULLET_DODGE_COOLDOWN),
        ];

        for (threat, cooldown) in candidates {
            let Some(raw) = dodge::search(threat, me, &ctx.arena, enemy, ctx.now, self.dice.as_mut()) else {
                continue;
            };
            let dir = normalize(raw);
            self.dodge = DodgeState::Dodging { threat, dir };
            self.cooldowns.dodge = cooldown + self.jitter();
            debug!("{} AI dodging {:?}", me.side.label(), threat);
            return Some(dir);
        }
        None
    }
}

impl Controller for AiController {
    fn command(&mut self, ctx: &TickContext<'_>) -> ControlCommand {
        self.update_mode(ctx);
        self.cooldowns.tick(ctx.dt);

        let mut cmd = ControlCommand::default();
        self.shoot(ctx, &mut cmd);
        let baseline = self.baseline(ctx);

        cmd.movement = match self.dodge {
            DodgeState::Dodging { threat, dir } => {
                let me = ctx.me.ship;
                // No fresh candidate: keep coasting on the last direction.
                let dir = dodge::search(threat, me, &ctx.arena, ctx.enemy.arsenal, ctx.now, self.dice.as_mut())
                    .map(normalize)
                    .unwrap_or(dir);

                let w = self.mode.profile().dodge_weight;
                let blended = normalize(baseline * (1.0 - w) + dir * w);

                self.dodge = if dodge::is_threat_cleared(threat, me, ctx.enemy.arsenal) {
                    debug!("{} AI clear of {:?}", me.side.label(), threat);
                    DodgeState::Idle
                } else {
                    DodgeState::Dodging { threat, dir }
                };
                blended
            }
            DodgeState::Idle => match self.try_start_dodge(ctx) {
                Some(dir) => dir,
                None => normalize(baseline),
            },
        };

        cmd
    }
}
