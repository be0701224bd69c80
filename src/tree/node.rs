use serde::{Deserialize, Serialize};

use crate::core::types::{GroupId, NodeId};

/// A single node of the passive tree
///
/// Topology and layout encoding only; skill metadata lives in a separate
/// [`Enrichment`](crate::tree::enrich::Enrichment) table so traversal and
/// layout never depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassiveNode {
    pub id: NodeId,
    /// Group this node's orbit is centered on (source key `parent`)
    pub parent_group: GroupId,
    /// Ring index into the orbit table (source key `radius`)
    pub orbit: u32,
    /// Slot index within the orbit's slot count (source key `position`)
    pub slot: u32,
    /// Reference into the skill catalog; absent for decorative/link nodes
    pub skill_id: Option<String>,
    /// Declared neighbors, normalized to plain ids, source order preserved
    pub connections: Vec<NodeId>,
}

impl PassiveNode {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            parent_group: 0,
            orbit: 0,
            slot: 0,
            skill_id: None,
            connections: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: GroupId) -> Self {
        self.parent_group = group;
        self
    }

    pub fn with_orbit(mut self, orbit: u32, slot: u32) -> Self {
        self.orbit = orbit;
        self.slot = slot;
        self
    }

    pub fn with_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }
}
