//! Load a passive tree from its JSON interchange format
//!
//! The document shape is `passive_tree.nodes` (id -> raw node),
//! `passive_tree.groups` (id -> anchor) and a sibling `passive_skills`
//! catalog. This shape is the de facto interchange format for the
//! subsystem and is preserved exactly.
//!
//! Only a top-level shape violation (no `passive_tree.nodes`) is an error;
//! per-node problems degrade to defaults so one malformed node never
//! poisons the rest of the dataset.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::types::{GroupId, NodeId};
use crate::tree::graph::PassiveTree;
use crate::tree::group::Group;
use crate::tree::node::PassiveNode;
use crate::tree::skill::SkillCatalog;

/// Errors that can occur when loading a tree document
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document lacks the required `passive_tree.nodes` structure
    #[error("dataset is missing the `passive_tree.nodes` structure")]
    MalformedDataset,
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a query session needs: the graph and its skill catalog
#[derive(Debug, Clone, Default)]
pub struct TreeBundle {
    pub tree: PassiveTree,
    pub skills: SkillCatalog,
}

/// Load a bundle from a JSON string
pub fn load_str(json: &str) -> Result<TreeBundle, LoadError> {
    let raw: RawDocument = serde_json::from_str(json)?;
    build_bundle(raw)
}

/// Load a bundle from a JSON file on disk
pub fn load_file(path: &Path) -> Result<TreeBundle, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_str(&content)
}

/// Load a bundle from an already-parsed JSON value
pub fn load_value(value: serde_json::Value) -> Result<TreeBundle, LoadError> {
    let raw: RawDocument = serde_json::from_value(value)?;
    build_bundle(raw)
}

// Raw document mirrors the interchange format. BTreeMap keeps node order
// deterministic, which fixes adjacency order and traversal tie-breaks.

#[derive(Debug, Deserialize)]
struct RawDocument {
    passive_tree: Option<RawTree>,
    passive_skills: Option<SkillCatalog>,
}

#[derive(Debug, Deserialize)]
struct RawTree {
    nodes: Option<BTreeMap<String, RawNode>>,
    #[serde(default)]
    groups: BTreeMap<String, RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    parent: GroupId,
    #[serde(default)]
    radius: u32,
    #[serde(default)]
    position: u32,
    #[serde(default)]
    skill_id: Option<String>,
    #[serde(default)]
    connections: Vec<RawConnection>,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

/// A neighbor reference is either a bare id or an object carrying an `id`
/// field (its other fields are presentational and ignored)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawConnection {
    Bare(RawId),
    Object { id: RawId },
}

impl RawConnection {
    fn into_node_id(self) -> NodeId {
        match self {
            Self::Bare(id) | Self::Object { id } => id.into_node_id(),
        }
    }
}

/// Ids appear as strings or numbers depending on the exporter
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_node_id(self) -> NodeId {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

fn build_bundle(raw: RawDocument) -> Result<TreeBundle, LoadError> {
    let tree = raw.passive_tree.ok_or(LoadError::MalformedDataset)?;
    let raw_nodes = tree.nodes.ok_or(LoadError::MalformedDataset)?;

    let groups: Vec<Group> = tree
        .groups
        .into_iter()
        .filter_map(|(key, g)| match key.parse::<GroupId>() {
            Ok(id) => Some(Group::new(id, g.x, g.y)),
            Err(_) => {
                tracing::debug!(key = %key, "skipping group with non-numeric key");
                None
            }
        })
        .collect();

    let nodes: Vec<PassiveNode> = raw_nodes
        .into_iter()
        .map(|(id, n)| PassiveNode {
            id,
            parent_group: n.parent,
            orbit: n.radius,
            slot: n.position,
            skill_id: n.skill_id,
            connections: n
                .connections
                .into_iter()
                .map(RawConnection::into_node_id)
                .collect(),
        })
        .collect();

    let skills = raw.passive_skills.unwrap_or_default();
    tracing::debug!(
        nodes = nodes.len(),
        groups = groups.len(),
        skills = skills.len(),
        "loaded tree document"
    );

    Ok(TreeBundle {
        tree: PassiveTree::from_parts(nodes, groups),
        skills,
    })
}
