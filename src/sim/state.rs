//! Game session state and the render snapshot handed to the platform

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::adversary::Adversary;
use super::entity::EntityKind;
use super::marker::{Marker, Side};
use super::player::Player;
use super::region::{Aabb, Region};
use super::reward::RewardSet;
use crate::config::{Footprints, GameConfig};
use crate::consts::*;

/// Background mode, flipped every time the monster touches a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualState {
    #[default]
    Normal,
    Alert,
}

impl VisualState {
    pub fn toggled(self) -> Self {
        match self {
            VisualState::Normal => VisualState::Alert,
            VisualState::Alert => VisualState::Normal,
        }
    }
}

/// Things that happened during a tick, for audio and HUD feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RewardCollected,
    PlayerHit,
    MarkerTouched(Side),
    AdversaryEscalated,
    RewardsRespawned,
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub kind: EntityKind,
    pub bounds: Aabb,
}

/// Read-only view of a session after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: i64,
    pub visual_state: VisualState,
    /// Doors, monster, robot, then coins in collection order
    pub entities: Vec<EntitySnapshot>,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    /// Dashboard line drawn across the top of the screen
    pub fn dashboard_text(&self) -> String {
        format!(
            "{:<30}{:<40}Points: {:02}",
            "F2 = new game", "Esc = exit game", self.score
        )
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}

/// Complete state of one game
///
/// Rebuilt wholesale on reset; mutated only by [`super::tick`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    pub(crate) footprints: Footprints,
    pub(crate) region: Region,
    pub(crate) rng: Pcg32,
    pub(crate) score: i64,
    pub(crate) visual_state: VisualState,
    pub(crate) time_ticks: u64,
    pub(crate) adversary: Adversary,
    pub(crate) player: Player,
    pub(crate) rewards: RewardSet,
    pub(crate) left_marker: Marker,
    pub(crate) right_marker: Marker,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// New session with the stock sprite sizes
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::with_footprints(config, Footprints::default(), seed)
    }

    pub fn with_footprints(config: &GameConfig, footprints: Footprints, seed: u64) -> Self {
        let config = config.sanitized();
        let region = Region::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let (adversary, player, rewards, left_marker, right_marker) =
            Self::build_entities(&config, &footprints, &region, &mut rng);

        log::info!(
            "New session: seed={} difficulty={} speed_multiplier={}",
            seed,
            config.difficulty,
            config.speed_multiplier
        );

        Self {
            config,
            footprints,
            region,
            rng,
            score: 0,
            visual_state: VisualState::Normal,
            time_ticks: 0,
            adversary,
            player,
            rewards,
            left_marker,
            right_marker,
            events: Vec::new(),
        }
    }

    fn build_entities(
        config: &GameConfig,
        footprints: &Footprints,
        region: &Region,
        rng: &mut Pcg32,
    ) -> (Adversary, Player, RewardSet, Marker, Marker) {
        let left_marker = Marker::new(region, footprints.marker, Side::Left);
        let right_marker = Marker::new(region, footprints.marker, Side::Right);
        let adversary = Adversary::spawn(
            region,
            footprints.adversary,
            config.adversary_speed(),
            ADVERSARY_AGE_LIMIT,
            rng,
        );
        let player = Player::spawn(region, footprints.player, config.player_speed());
        let rewards = RewardSet::new(
            region,
            REWARD_COUNT,
            footprints.reward,
            config.reward_fall_speed(),
            REWARD_GAP,
            rng,
        );
        (adversary, player, rewards, left_marker, right_marker)
    }

    /// Start over: score 0, normal visuals, every entity back at its spawn point.
    ///
    /// The RNG keeps running, so coin placements differ from the previous game.
    pub fn reset(&mut self) {
        let (adversary, player, rewards, left_marker, right_marker) =
            Self::build_entities(&self.config, &self.footprints, &self.region, &mut self.rng);
        self.adversary = adversary;
        self.player = player;
        self.rewards = rewards;
        self.left_marker = left_marker;
        self.right_marker = right_marker;
        self.score = 0;
        self.visual_state = VisualState::Normal;
        self.time_ticks = 0;
        self.events.clear();
        log::info!("Session reset");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn adversary(&self) -> &Adversary {
        &self.adversary
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn rewards(&self) -> &RewardSet {
        &self.rewards
    }

    pub fn markers(&self) -> [&Marker; 2] {
        [&self.left_marker, &self.right_marker]
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Every entity's kind and bounding box, in draw order
    pub fn entities(&self) -> Vec<EntitySnapshot> {
        let mut entities = Vec::with_capacity(4 + self.rewards.len());
        for marker in self.markers() {
            entities.push(EntitySnapshot {
                kind: EntityKind::Marker,
                bounds: marker.aabb(),
            });
        }
        entities.push(EntitySnapshot {
            kind: EntityKind::Adversary,
            bounds: self.adversary.aabb(),
        });
        entities.push(EntitySnapshot {
            kind: EntityKind::Player,
            bounds: self.player.aabb(),
        });
        entities.extend(self.rewards.iter().map(|r| EntitySnapshot {
            kind: EntityKind::Reward,
            bounds: r.aabb(),
        }));
        entities
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            score: self.score,
            visual_state: self.visual_state,
            entities: self.entities(),
            events: self.events.clone(),
        }
    }
}
