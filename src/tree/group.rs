use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::GroupId;

/// A layout anchor: orbits are centered on the group's coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub x: f32,
    pub y: f32,
}

impl Group {
    pub fn new(id: GroupId, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
