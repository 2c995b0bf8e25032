//! Positioned, fixed-size body shared by every entity kind

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::region::Aabb;

/// Which kind of entity a body belongs to (for renderers and collision dispatch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The robot
    Player,
    /// The monster
    Adversary,
    /// A falling coin
    Reward,
    /// A door in a top corner
    Marker,
}

/// Position of the top-left corner plus the sprite footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Body {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        debug_assert!(size.x > 0 && size.y > 0, "entity footprint must be positive");
        Self { pos, size }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: self.size,
        }
    }
}
