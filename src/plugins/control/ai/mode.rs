//! Behavioural modes and their tuning.

/// Picked fresh every tick from the two health values. No hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiMode {
    Offensive,
    Defensive,
    Neutral,
}

/// Below this fraction of the enemy's health the AI turns defensive.
pub const DEFENSIVE_RATIO: f32 = 0.8;

/// Per-mode constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    /// Horizontal distance to hold from the enemy.
    pub separation: f32,
    pub bullet_cooldown: f32,
    pub energy_cooldown: f32,
    /// Share of the dodge vector in the blended movement.
    pub dodge_weight: f32,
    /// Fire when a cooldown is exactly zero, not only below it.
    pub fires_at_zero: bool,
    /// Resolve the vertical axis before the horizontal one.
    pub vertical_first: bool,
}

const OFFENSIVE: ModeProfile = ModeProfile {
    separation: 600.0,
    bullet_cooldown: 0.2,
    energy_cooldown: 2.5,
    dodge_weight: 0.5,
    fires_at_zero: true,
    vertical_first: true,
};

const DEFENSIVE: ModeProfile = ModeProfile {
    separation: 800.0,
    bullet_cooldown: 0.5,
    energy_cooldown: 6.0,
    dodge_weight: 1.0,
    fires_at_zero: true,
    vertical_first: true,
};

const NEUTRAL: ModeProfile = ModeProfile {
    separation: 400.0,
    bullet_cooldown: 0.4,
    energy_cooldown: 4.0,
    dodge_weight: 0.75,
    fires_at_zero: false,
    vertical_first: false,
};

impl AiMode {
    pub fn select(own_health: f32, enemy_health: f32) -> Self {
        if own_health < enemy_health * DEFENSIVE_RATIO {
            AiMode::Defensive
        } else if own_health > enemy_health {
            AiMode::Offensive
        } else {
            AiMode::Neutral
        }
    }

    pub fn profile(self) -> &'static ModeProfile {
        match self {
            AiMode::Offensive => &OFFENSIVE,
            AiMode::Defensive => &DEFENSIVE,
            AiMode::Neutral => &NEUTRAL,
        }
    }

    /// Cooldown gate for this mode.
    #[inline]
    pub fn ready(self, cooldown: f32) -> bool {
        if self.profile().fires_at_zero {
            cooldown <= 0.0
        } else {
            cooldown < 0.0
        }
    }
}
