//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to [`tick`] per simulated frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (coins in collection order)
//! - No rendering or platform dependencies

pub mod adversary;
pub mod autopilot;
pub mod entity;
pub mod marker;
pub mod player;
pub mod region;
pub mod reward;
pub mod state;
pub mod tick;

pub use adversary::{Adversary, Contact};
pub use entity::{Body, EntityKind};
pub use marker::{Marker, Side};
pub use player::Player;
pub use region::{Aabb, Region};
pub use reward::{Reward, RewardSet};
pub use state::{EntitySnapshot, GameEvent, GameSession, Snapshot, VisualState};
pub use tick::{TickInput, tick, touching_marker};
