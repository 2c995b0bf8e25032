//! Session configuration
//!
//! Read once at session construction. Nothing here changes while a session runs.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "normal" | "med" | "medium" => Some(DifficultyPreset::Normal),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Integer difficulty level fed into [`GameConfig::difficulty`]
    pub fn level(&self) -> u32 {
        match self {
            DifficultyPreset::Easy => 1,
            DifficultyPreset::Normal => 2,
            DifficultyPreset::Hard => 3,
        }
    }
}

/// Options consumed when a session is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target ticks per second. Pacing hint for the platform; the core ignores it.
    pub tick_rate: u32,
    /// Scales monster and robot base speeds
    pub speed_multiplier: u32,
    /// Scales monster, robot and coin speeds
    pub difficulty: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            speed_multiplier: 1,
            difficulty: 1,
        }
    }
}

impl GameConfig {
    /// Config for a named preset, other options at their defaults
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        Self {
            difficulty: preset.level(),
            ..Self::default()
        }
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Copy with every option brought into its valid range
    ///
    /// A zero difficulty or multiplier would leave the monster without velocity.
    /// Both are capped so derived speeds stay well inside `i32`.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        if config.tick_rate == 0 {
            log::warn!("tick_rate 0 is invalid, using {}", DEFAULT_TICK_RATE);
            config.tick_rate = DEFAULT_TICK_RATE;
        }
        if config.speed_multiplier == 0 {
            log::warn!("speed_multiplier 0 is invalid, using 1");
            config.speed_multiplier = 1;
        } else if config.speed_multiplier > MAX_SPEED_MULTIPLIER {
            log::warn!(
                "speed_multiplier {} is too large, using {}",
                config.speed_multiplier,
                MAX_SPEED_MULTIPLIER
            );
            config.speed_multiplier = MAX_SPEED_MULTIPLIER;
        }
        if config.difficulty == 0 {
            log::warn!("difficulty 0 is invalid, using 1");
            config.difficulty = 1;
        } else if config.difficulty > MAX_DIFFICULTY {
            log::warn!(
                "difficulty {} is too large, using {}",
                config.difficulty,
                MAX_DIFFICULTY
            );
            config.difficulty = MAX_DIFFICULTY;
        }
        config
    }

    #[inline]
    fn difficulty_level(&self) -> i32 {
        self.difficulty.clamp(1, MAX_DIFFICULTY) as i32
    }

    fn speed_scale(&self) -> i32 {
        self.difficulty_level() * self.speed_multiplier.clamp(1, MAX_SPEED_MULTIPLIER) as i32
    }

    /// Monster speed magnitude on each axis
    pub fn adversary_speed(&self) -> i32 {
        ADVERSARY_BASE_SPEED * self.speed_scale()
    }

    /// Robot horizontal speed
    pub fn player_speed(&self) -> i32 {
        PLAYER_EASY * self.speed_scale()
    }

    /// Coin fall speed
    pub fn reward_fall_speed(&self) -> i32 {
        REWARD_BASE_FALL * self.difficulty_level()
    }
}

/// Sprite sizes per entity kind, known once the platform has loaded its assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprints {
    pub player: IVec2,
    pub adversary: IVec2,
    pub reward: IVec2,
    pub marker: IVec2,
}

impl Default for Footprints {
    fn default() -> Self {
        Self {
            player: IVec2::new(50, 86),
            adversary: IVec2::new(50, 70),
            reward: IVec2::new(40, 40),
            marker: IVec2::new(50, 66),
        }
    }
}
