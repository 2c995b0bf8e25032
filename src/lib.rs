//! Robot Odyssey - a single-screen coin-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, respawn cycling)
//! - `config`: Session configuration and difficulty presets
//!
//! Windowing, input translation, asset loading and text rendering belong to the
//! platform layer, which calls [`sim::tick`] once per frame.

pub mod config;
pub mod sim;

pub use config::{DifficultyPreset, Footprints, GameConfig};
pub use sim::{GameSession, Snapshot, TickInput, VisualState, tick};

/// Game configuration constants
pub mod consts {
    /// Playable region dimensions (pixels)
    pub const REGION_WIDTH: i32 = 640;
    pub const REGION_HEIGHT: i32 = 480;

    /// Number of coins alive per respawn cycle
    pub const REWARD_COUNT: usize = 10;
    /// Coins spawn up to this many coin-heights above the region
    pub const REWARD_GAP: i32 = 20;

    /// Marker contacts needed before the monster speeds up
    pub const ADVERSARY_AGE_LIMIT: u32 = 20;
    /// Monster speed per axis at difficulty 1
    pub const ADVERSARY_BASE_SPEED: i32 = 1;
    /// Robot horizontal speed at difficulty 1
    pub const PLAYER_EASY: i32 = 5;
    /// Coin fall speed at difficulty 1
    pub const REWARD_BASE_FALL: i32 = 1;

    /// Default tick pacing hint (ticks per second)
    pub const DEFAULT_TICK_RATE: u32 = 60;

    /// Upper bounds for the speed-scaling config options
    pub const MAX_DIFFICULTY: u32 = 10;
    pub const MAX_SPEED_MULTIPLIER: u32 = 10;
}
