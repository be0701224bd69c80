//! Skill metadata enrichment
//!
//! Enrichment is a pure function of (tree, catalog) producing a separate
//! annotation table, so layout and traversal are independent of whether or
//! when it ran. Nodes without a catalog hit simply have no entry; the "???"
//! placeholder convention belongs to renderers.

use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::NodeId;
use crate::tree::graph::PassiveTree;
use crate::tree::skill::{SkillCatalog, StatValue};

/// Enrichment payload attached to a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillData {
    pub name: String,
    pub icon: Option<String>,
    pub stats: HashMap<String, StatValue>,
    /// Rendering concern only
    pub is_notable: bool,
}

/// Annotation table from node id to skill payload
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    entries: AHashMap<NodeId, SkillData>,
}

impl Enrichment {
    pub fn get(&self, id: &str) -> Option<&SkillData> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &SkillData)> {
        self.entries.iter()
    }
}

/// Annotate every node whose `skill_id` resolves in the catalog
///
/// Idempotent: the result depends only on the current tree and catalog.
pub fn enrich(tree: &PassiveTree, catalog: &SkillCatalog) -> Enrichment {
    let mut entries = AHashMap::new();
    for (id, node) in &tree.nodes {
        let Some(skill_id) = node.skill_id.as_deref() else {
            continue;
        };
        if skill_id.is_empty() {
            continue;
        }
        let Some(skill) = catalog.get(skill_id) else {
            continue;
        };
        entries.insert(
            id.clone(),
            SkillData {
                name: skill.name.clone(),
                icon: skill.icon.clone(),
                stats: skill.stats.clone(),
                is_notable: skill.is_notable,
            },
        );
    }
    Enrichment { entries }
}
