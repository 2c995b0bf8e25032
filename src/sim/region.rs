//! Playfield rectangle and axis-aligned bounding boxes
//!
//! Screen coordinates: origin at the top-left corner, y grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{REGION_HEIGHT, REGION_WIDTH};

/// The fixed rectangular playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub width: i32,
    pub height: i32,
}

impl Default for Region {
    fn default() -> Self {
        Self::new(REGION_WIDTH, REGION_HEIGHT)
    }
}

impl Region {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "region must have positive size");
        Self { width, height }
    }

    /// Largest x at which a box of `size` still fits horizontally
    #[inline]
    pub fn max_x(&self, size: IVec2) -> i32 {
        self.width - size.x
    }

    /// Largest y at which a box of `size` still fits vertically
    #[inline]
    pub fn max_y(&self, size: IVec2) -> i32 {
        self.height - size.y
    }

    /// Whether `aabb` lies entirely inside the region
    pub fn contains(&self, aabb: &Aabb) -> bool {
        aabb.min.x >= 0
            && aabb.min.y >= 0
            && aabb.right() <= self.width
            && aabb.bottom() <= self.height
    }
}

/// Axis-aligned bounding box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: IVec2,
    pub size: IVec2,
}

impl Aabb {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.right()
            && other.min.x < self.right()
            && self.min.y < other.bottom()
            && other.min.y < self.bottom()
    }
}
