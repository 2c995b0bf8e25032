//! Falling coins and the fixed-size set that recycles them

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::region::{Aabb, Region};

/// A single falling coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub body: Body,
    fall_speed: i32,
}

impl Reward {
    /// Create a coin and immediately place it above the region
    pub fn spawn(
        region: &Region,
        size: IVec2,
        fall_speed: i32,
        gap: i32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut reward = Self::at(IVec2::ZERO, size, fall_speed);
        reward.respawn(region, gap, rng);
        reward
    }

    pub fn at(pos: IVec2, size: IVec2, fall_speed: i32) -> Self {
        debug_assert!(fall_speed > 0, "coins must fall");
        Self {
            body: Body::new(pos, size),
            fall_speed,
        }
    }

    /// Pick a new start point: fully inside horizontally, between one and
    /// `gap` coin-heights above the top edge.
    pub fn respawn(&mut self, region: &Region, gap: i32, rng: &mut impl Rng) {
        let size = self.body.size;
        debug_assert!(size.x <= region.max_x(size), "coin too wide for region");
        self.body.pos.x = rng.random_range(size.x..=region.max_x(size));
        self.body.pos.y = -rng.random_range(size.y..=gap * size.y);
    }

    #[inline]
    pub fn advance(&mut self) {
        self.body.pos.y += self.fall_speed;
    }

    /// True once the coin's top edge is below the region
    #[inline]
    pub fn has_exited(&self, region: &Region) -> bool {
        self.body.pos.y > region.height
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

/// Fixed-cardinality collection of coins
///
/// Either every coin is in play, or (for the instant of a respawn) none are.
/// Coins are never recycled one at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardSet {
    rewards: Vec<Reward>,
    capacity: usize,
    size: IVec2,
    fall_speed: i32,
    gap: i32,
}

impl RewardSet {
    pub fn new(
        region: &Region,
        capacity: usize,
        size: IVec2,
        fall_speed: i32,
        gap: i32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut set = Self {
            rewards: Vec::with_capacity(capacity),
            capacity,
            size,
            fall_speed,
            gap,
        };
        set.refill(region, rng);
        set
    }

    /// Coins currently in play, in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.iter()
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn advance_all(&mut self) {
        for reward in &mut self.rewards {
            reward.advance();
        }
    }

    /// Whether every coin is gone, either collected or fallen out
    pub fn is_exhausted(&self, region: &Region) -> bool {
        self.rewards.iter().all(|r| r.has_exited(region))
    }

    /// Replace the whole set with fresh coins once it is exhausted.
    /// Returns whether a respawn happened.
    pub fn cycle_if_exhausted(&mut self, region: &Region, rng: &mut impl Rng) -> bool {
        if !self.is_exhausted(region) {
            return false;
        }
        self.rewards.clear();
        self.refill(region, rng);
        log::debug!("Respawned {} coins", self.rewards.len());
        true
    }

    /// Remove the first coin (in collection order) overlapping `player`.
    pub fn collect(&mut self, player: &Aabb) -> bool {
        match self.rewards.iter().position(|r| r.aabb().intersects(player)) {
            Some(index) => {
                self.rewards.remove(index);
                true
            }
            None => false,
        }
    }

    fn refill(&mut self, region: &Region, rng: &mut impl Rng) {
        debug_assert!(self.rewards.is_empty());
        for _ in 0..self.capacity {
            self.rewards
                .push(Reward::spawn(region, self.size, self.fall_speed, self.gap, rng));
        }
    }

    /// Set holding `rewards` as they are; refills restore `capacity` coins
    #[cfg(test)]
    pub(crate) fn from_rewards(
        rewards: Vec<Reward>,
        capacity: usize,
        size: IVec2,
        fall_speed: i32,
    ) -> Self {
        debug_assert!(rewards.len() <= capacity);
        Self {
            capacity,
            rewards,
            size,
            fall_speed,
            gap: crate::consts::REWARD_GAP,
        }
    }
}
