//! The robot: slides along the bottom edge and picks up coins

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::region::{Aabb, Region};
use super::reward::RewardSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    speed: i32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Player {
    /// Spawn centered horizontally, resting on the bottom edge
    pub fn spawn(region: &Region, size: IVec2, speed: i32) -> Self {
        let pos = IVec2::new(region.max_x(size) / 2, region.max_y(size));
        Self::at(pos, size, speed)
    }

    pub fn at(pos: IVec2, size: IVec2, speed: i32) -> Self {
        debug_assert!(speed > 0, "robot speed must be positive");
        Self {
            body: Body::new(pos, size),
            speed,
            moving_left: false,
            moving_right: false,
        }
    }

    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }

    /// Apply the intent flags: left first, then right, each step clamped to the region
    pub fn advance_horizontal(&mut self, region: &Region) {
        let max_x = region.max_x(self.body.size);
        let x = &mut self.body.pos.x;

        if self.moving_left && *x > 0 {
            *x = (*x - self.speed).max(0);
        }
        if self.moving_right && *x < max_x {
            *x = (*x + self.speed).min(max_x);
        }

        debug_assert!((0..=max_x).contains(&self.body.pos.x));
    }

    /// Take at most one overlapping coin out of `rewards`
    pub fn try_collect(&self, rewards: &mut RewardSet) -> bool {
        rewards.collect(&self.aabb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::reward::Reward;

    const ROBOT: IVec2 = IVec2::new(50, 86);

    #[test]
    fn test_spawn_bottom_center() {
        let player = Player::spawn(&Region::new(640, 480), ROBOT, 5);
        assert_eq!(player.body.pos, IVec2::new(295, 394));
    }

    #[test]
    fn test_idle_does_not_move() {
        let region = Region::new(640, 480);
        let mut player = Player::spawn(&region, ROBOT, 5);
        player.advance_horizontal(&region);
        assert_eq!(player.body.pos.x, 295);
    }

    #[test]
    fn test_left_clamps_at_zero() {
        let region = Region::new(640, 480);
        let mut player = Player::at(IVec2::new(3, 394), ROBOT, 5);
        player.moving_left = true;
        player.advance_horizontal(&region);
        assert_eq!(player.body.pos.x, 0);
        player.advance_horizontal(&region);
        assert_eq!(player.body.pos.x, 0);
    }

    #[test]
    fn test_right_clamps_at_far_edge() {
        let region = Region::new(640, 480);
        let mut player = Player::at(IVec2::new(588, 394), ROBOT, 5);
        player.moving_right = true;
        player.advance_horizontal(&region);
        assert_eq!(player.body.pos.x, 590);
        player.advance_horizontal(&region);
        assert_eq!(player.body.pos.x, 590);
    }

    #[test]
    fn test_both_flags_cancel_in_the_open() {
        let region = Region::new(640, 480);
        let mut player = Player::at(IVec2::new(100, 394), ROBOT, 5);
        player.moving_left = true;
        player.moving_right = true;
        player.advance_horizontal(&region);
        assert_eq!(player.body.pos.x, 100);
    }

    #[test]
    fn test_both_flags_at_left_wall() {
        let region = Region::new(640, 480);
        let mut player = Player::at(IVec2::new(2, 394), ROBOT, 5);
        player.moving_left = true;
        player.moving_right = true;
        player.advance_horizontal(&region);
        // Left clamps to 0, then right applies in full
        assert_eq!(player.body.pos.x, 5);
    }

    #[test]
    fn test_try_collect() {
        let coin = IVec2::new(20, 20);
        let mut rewards = RewardSet::from_rewards(
            vec![
                Reward::at(IVec2::new(300, 380), coin, 1),
                Reward::at(IVec2::new(10, 10), coin, 1),
            ],
            2,
            coin,
            1,
        );
        let player = Player::spawn(&Region::new(640, 480), ROBOT, 5);
        assert!(player.try_collect(&mut rewards));
        assert_eq!(rewards.len(), 1);
        assert!(!player.try_collect(&mut rewards));
    }
}
