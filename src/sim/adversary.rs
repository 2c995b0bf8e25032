//! The monster: bounces around the region and speeds up after enough door contacts

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::region::{Aabb, Region};

/// How the monster reacts to something it overlaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// Bounce vertically off the robot
    Player,
    /// Age by one tick of contact; escalate when age runs out
    Booster,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    pub body: Body,
    vel: IVec2,
    age: u32,
    age_limit: u32,
    /// Number of times the age counter has run out
    escalations: u32,
}

impl Adversary {
    /// Spawn centered horizontally, one sprite-height below the top edge,
    /// moving diagonally with a random sign on each axis.
    pub fn spawn(
        region: &Region,
        size: IVec2,
        speed: i32,
        age_limit: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let pos = IVec2::new(region.max_x(size) / 2, size.y);
        let mut random_sign = || if rng.random_bool(0.5) { speed } else { -speed };
        let vel = IVec2::new(random_sign(), random_sign());
        Self::with_velocity(Body::new(pos, size), vel, age_limit)
    }

    pub fn with_velocity(body: Body, vel: IVec2, age_limit: u32) -> Self {
        debug_assert!(vel.x != 0 && vel.y != 0, "monster velocity must be nonzero");
        debug_assert!(age_limit > 0, "age limit must be positive");
        Self {
            body,
            vel,
            age: age_limit,
            age_limit,
            escalations: 0,
        }
    }

    #[inline]
    pub fn velocity(&self) -> IVec2 {
        self.vel
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn age_limit(&self) -> u32 {
        self.age_limit
    }

    #[inline]
    pub fn escalations(&self) -> u32 {
        self.escalations
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }

    /// Move one tick, then reflect off any edge reached.
    ///
    /// Edges are checked in the order right, bottom, left, top. Each check only
    /// looks at its own axis. A reflected axis is also clamped back onto the
    /// edge so the box never leaves the region.
    pub fn advance(&mut self, region: &Region) {
        self.body.pos += self.vel;

        let max_x = region.max_x(self.body.size);
        let max_y = region.max_y(self.body.size);
        let pos = &mut self.body.pos;

        if self.vel.x > 0 && pos.x >= max_x {
            self.vel.x = -self.vel.x;
            pos.x = max_x;
        }
        if self.vel.y > 0 && pos.y >= max_y {
            self.vel.y = -self.vel.y;
            pos.y = max_y;
        }
        if self.vel.x < 0 && pos.x <= 0 {
            self.vel.x = -self.vel.x;
            pos.x = 0;
        }
        if self.vel.y < 0 && pos.y <= 0 {
            self.vel.y = -self.vel.y;
            pos.y = 0;
        }
    }

    /// Test overlap with `other` and apply the reaction for `contact`.
    ///
    /// Returns whether the boxes overlap, whatever the contact kind.
    pub fn collide(&mut self, other: &Aabb, contact: Contact) -> bool {
        let hit = self.aabb().intersects(other);
        if !hit {
            return false;
        }

        match contact {
            Contact::Player => {
                self.vel.y = -self.vel.y;
            }
            Contact::Booster => {
                self.age -= 1;
                if self.age == 0 {
                    self.escalate();
                }
            }
        }

        debug_assert!((1..=self.age_limit).contains(&self.age));
        hit
    }

    /// Reset age, grow both speeds by one and turn around vertically
    fn escalate(&mut self) {
        self.age = self.age_limit;
        self.vel.x += self.vel.x.signum();
        self.vel.y += self.vel.y.signum();
        self.vel.y = -self.vel.y;
        self.escalations += 1;
        log::debug!(
            "Monster escalated (#{}), velocity now {:?}",
            self.escalations,
            self.vel
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn monster_at(x: i32, y: i32, vel: IVec2) -> Adversary {
        Adversary::with_velocity(
            Body::new(IVec2::new(x, y), IVec2::new(50, 70)),
            vel,
            20,
        )
    }

    #[test]
    fn test_spawn_placement() {
        let region = Region::new(640, 480);
        let mut rng = Pcg32::seed_from_u64(7);
        let monster = Adversary::spawn(&region, IVec2::new(50, 70), 3, 20, &mut rng);
        assert_eq!(monster.body.pos, IVec2::new(295, 70));
        assert_eq!(monster.velocity().abs(), IVec2::new(3, 3));
        assert_eq!(monster.age(), 20);
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let region = Region::new(640, 480);
        let mut monster = monster_at(100, 100, IVec2::new(2, -3));
        monster.advance(&region);
        assert_eq!(monster.body.pos, IVec2::new(102, 97));
        assert_eq!(monster.velocity(), IVec2::new(2, -3));
    }

    #[test]
    fn test_bounce_right_edge() {
        let region = Region::new(640, 480);
        let mut monster = monster_at(588, 100, IVec2::new(4, 1));
        monster.advance(&region);
        assert_eq!(monster.velocity(), IVec2::new(-4, 1));
        assert_eq!(monster.body.pos.x, 590);
    }

    #[test]
    fn test_bounce_left_edge_overshoot_clamps() {
        let region = Region::new(640, 480);
        let mut monster = monster_at(1, 200, IVec2::new(-3, 1));
        monster.advance(&region);
        assert_eq!(monster.body.pos, IVec2::new(0, 201));
        assert_eq!(monster.velocity(), IVec2::new(3, 1));
    }

    #[test]
    fn test_bounce_top_left_corner() {
        let region = Region::new(640, 480);
        let mut monster = monster_at(1, 2, IVec2::new(-3, -3));
        monster.advance(&region);
        assert_eq!(monster.velocity(), IVec2::new(3, 3));
        assert_eq!(monster.body.pos, IVec2::ZERO);
    }

    #[test]
    fn test_bounce_bottom_reaching_exactly() {
        let region = Region::new(640, 480);
        let mut monster = monster_at(100, 408, IVec2::new(1, 2));
        monster.advance(&region);
        // Leading edge reaches 480 exactly: still a bounce
        assert_eq!(monster.body.pos.y, 410);
        assert_eq!(monster.velocity().y, -2);
    }

    #[test]
    fn test_player_contact_flips_vertical_only() {
        let mut monster = monster_at(100, 100, IVec2::new(2, 3));
        let robot = Aabb::new(120, 150, 50, 86);
        assert!(monster.collide(&robot, Contact::Player));
        assert_eq!(monster.velocity(), IVec2::new(2, -3));
        assert!(monster.collide(&robot, Contact::Player));
        assert_eq!(monster.velocity(), IVec2::new(2, 3));
        assert_eq!(monster.age(), 20);
    }

    #[test]
    fn test_miss_has_no_effect() {
        let mut monster = monster_at(100, 100, IVec2::new(2, 3));
        let far = Aabb::new(400, 400, 10, 10);
        assert!(!monster.collide(&far, Contact::Player));
        assert!(!monster.collide(&far, Contact::Booster));
        assert_eq!(monster.velocity(), IVec2::new(2, 3));
        assert_eq!(monster.age(), 20);
    }

    #[test]
    fn test_booster_contact_ages() {
        let mut monster = monster_at(0, 0, IVec2::new(-2, 3));
        let door = Aabb::new(0, 0, 50, 66);
        assert!(monster.collide(&door, Contact::Booster));
        assert_eq!(monster.age(), 19);
        assert_eq!(monster.velocity(), IVec2::new(-2, 3));
    }

    #[test]
    fn test_escalation_after_age_limit_contacts() {
        let mut monster = monster_at(0, 0, IVec2::new(-2, 3));
        let door = Aabb::new(0, 0, 50, 66);
        for _ in 0..19 {
            assert!(monster.collide(&door, Contact::Booster));
        }
        assert_eq!(monster.age(), 1);
        let before = monster.velocity();

        assert!(monster.collide(&door, Contact::Booster));
        assert_eq!(monster.age(), 20);
        assert_eq!(monster.velocity().x.abs(), before.x.abs() + 1);
        assert_eq!(monster.velocity().y.abs(), before.y.abs() + 1);
        assert_eq!(monster.velocity().x.signum(), before.x.signum());
        assert_eq!(monster.velocity().y.signum(), -before.y.signum());
        assert_eq!(monster.velocity(), IVec2::new(-3, -4));
        assert_eq!(monster.escalations(), 1);
    }

    #[test]
    fn test_escalation_with_negative_vertical_velocity() {
        let mut monster = Adversary::with_velocity(
            Body::new(IVec2::ZERO, IVec2::new(10, 10)),
            IVec2::new(1, -1),
            1,
        );
        assert!(monster.collide(&Aabb::new(0, 0, 10, 10), Contact::Booster));
        assert_eq!(monster.velocity(), IVec2::new(2, 2));
        assert_eq!(monster.age(), 1);
    }
}
