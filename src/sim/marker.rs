//! Doors in the top corners. Static targets that age the monster.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::region::{Aabb, Region};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub body: Body,
    pub side: Side,
}

impl Marker {
    pub fn new(region: &Region, size: IVec2, side: Side) -> Self {
        let x = match side {
            Side::Left => 0,
            Side::Right => region.max_x(size),
        };
        Self {
            body: Body::new(IVec2::new(x, 0), size),
            side,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_placement() {
        let region = Region::new(640, 480);
        let door = IVec2::new(50, 66);
        assert_eq!(Marker::new(&region, door, Side::Left).aabb(), Aabb::new(0, 0, 50, 66));
        assert_eq!(Marker::new(&region, door, Side::Right).aabb(), Aabb::new(590, 0, 50, 66));
    }
}
