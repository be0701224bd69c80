//! Query facade
//!
//! A [`Session`] owns the loaded graph and its skill catalog for the
//! lifetime of one query/visualization session and wires loader, enricher,
//! layout, and traversal together for external renderers. Traversal and
//! layout never read enrichment; only [`Session::skill_data`] and
//! [`Session::search`] do.

use std::path::Path;

use ahash::{AHashMap, AHashSet};
use glam::Vec2;

use crate::core::error::Result;
use crate::core::types::NodeId;
use crate::layout;
use crate::traversal;
use crate::tree::enrich::{self, Enrichment, SkillData};
use crate::tree::graph::{Edge, PassiveTree};
use crate::tree::loader::{self, TreeBundle};
use crate::tree::skill::SkillCatalog;

/// One query session over a loaded passive tree
#[derive(Debug, Clone, Default)]
pub struct Session {
    tree: PassiveTree,
    skills: SkillCatalog,
    enrichment: Option<Enrichment>,
}

impl Session {
    /// Load a session from a JSON document string
    pub fn load(json: &str) -> Result<Self> {
        Ok(Self::from_bundle(loader::load_str(json)?))
    }

    /// Load a session from a JSON document on disk
    pub fn load_file(path: &Path) -> Result<Self> {
        Ok(Self::from_bundle(loader::load_file(path)?))
    }

    pub fn from_bundle(bundle: TreeBundle) -> Self {
        Self {
            tree: bundle.tree,
            skills: bundle.skills,
            enrichment: None,
        }
    }

    pub fn tree(&self) -> &PassiveTree {
        &self.tree
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.skills
    }

    /// Run the enricher over the bundled catalog
    ///
    /// Pure and idempotent; calling it again just rebuilds the same table.
    pub fn enrich(&mut self) {
        self.enrichment = Some(enrich::enrich(&self.tree, &self.skills));
    }

    pub fn is_enriched(&self) -> bool {
        self.enrichment.is_some()
    }

    /// Skill payload for a node, None before enrichment or without a
    /// catalog hit
    pub fn skill_data(&self, id: &str) -> Option<&SkillData> {
        self.enrichment.as_ref().and_then(|e| e.get(id))
    }

    /// Position of every node against the canonical orbit table
    pub fn layout(&self) -> AHashMap<NodeId, Vec2> {
        layout::layout(&self.tree)
    }

    /// All simple paths of at most `max_steps` nodes between two ids
    pub fn all_paths(&self, start: &str, end: &str, max_steps: usize) -> Vec<Vec<NodeId>> {
        traversal::all_paths(&self.tree, start, end, max_steps)
    }

    /// One minimum-edge-count path between two ids
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<Vec<NodeId>> {
        traversal::shortest_path(&self.tree, start, end)
    }

    /// Node ids within `max_steps` edges of `start`
    pub fn reachable(&self, start: &str, max_steps: usize) -> AHashSet<NodeId> {
        traversal::reachable(&self.tree, start, max_steps)
    }

    /// Nodes whose enriched skill name contains `keyword`, case-insensitive
    ///
    /// Empty before [`Session::enrich`] has run. Results are sorted by id
    /// for reproducibility.
    pub fn search(&self, keyword: &str) -> Vec<NodeId> {
        let Some(enrichment) = self.enrichment.as_ref() else {
            return Vec::new();
        };
        let keyword = keyword.to_lowercase();
        let mut matches: Vec<NodeId> = enrichment
            .iter()
            .filter(|(_, data)| data.name.to_lowercase().contains(&keyword))
            .map(|(id, _)| id.clone())
            .collect();
        matches.sort_unstable();
        matches
    }

    /// Deduplicated undirected edge list for renderers
    pub fn edges(&self) -> Vec<Edge> {
        self.tree.edges()
    }
}
