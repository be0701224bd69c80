//! The tree aggregate: flat node/group maps plus derived adjacency
//!
//! The source data lists connections directionally for presentation, but the
//! graph is undirected: the adjacency table carries the reverse of every
//! declared edge. It is built once from the source node order, so neighbor
//! iteration is deterministic across runs.

use ahash::{AHashMap, AHashSet};

use crate::core::types::{GroupId, NodeId};
use crate::tree::group::Group;
use crate::tree::node::PassiveNode;

/// An undirected edge, endpoints in lexicographic order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Normalize endpoint order so each undirected edge has one identity
    pub fn between(x: &str, y: &str) -> Self {
        if x <= y {
            Self {
                a: x.to_string(),
                b: y.to_string(),
            }
        } else {
            Self {
                a: y.to_string(),
                b: x.to_string(),
            }
        }
    }
}

/// The passive tree graph
///
/// Immutable after construction. Neighbors are resolved by id lookup; ids
/// that resolve to nothing are treated as non-existent by every consumer.
#[derive(Debug, Clone, Default)]
pub struct PassiveTree {
    pub nodes: AHashMap<NodeId, PassiveNode>,
    pub groups: AHashMap<GroupId, Group>,
    adjacency: AHashMap<NodeId, Vec<NodeId>>,
}

impl PassiveTree {
    /// Build the graph from ordered parts
    ///
    /// `nodes` must be in source order: adjacency lists a node's declared
    /// connections first, then reverse edges in the order their owners
    /// appear, deduplicated. That ordering is what makes traversal
    /// tie-breaks reproducible.
    pub fn from_parts(nodes: Vec<PassiveNode>, groups: Vec<Group>) -> Self {
        let ids: AHashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
        let mut adjacency: AHashMap<NodeId, Vec<NodeId>> = AHashMap::new();

        for node in &nodes {
            let list = adjacency.entry(node.id.clone()).or_default();
            for conn in &node.connections {
                if conn != &node.id && !list.contains(conn) {
                    list.push(conn.clone());
                }
            }
        }
        // Reverse edges; a dangling target gets no entry of its own
        for node in &nodes {
            for conn in &node.connections {
                if conn == &node.id || !ids.contains(conn) {
                    continue;
                }
                let back = adjacency.entry(conn.clone()).or_default();
                if !back.contains(&node.id) {
                    back.push(node.id.clone());
                }
            }
        }

        let nodes: AHashMap<NodeId, PassiveNode> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        let groups: AHashMap<GroupId, Group> =
            groups.into_iter().map(|g| (g.id, g)).collect();

        Self {
            nodes,
            groups,
            adjacency,
        }
    }

    pub fn node(&self, id: &str) -> Option<&PassiveNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Undirected neighbors of a node, deterministic order
    ///
    /// May include dangling ids; traversal skips those via lookup miss.
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deduplicated undirected edge list between existing nodes, sorted
    ///
    /// Each edge appears once whether the source declared one or both
    /// directions. Edges to dangling ids are omitted: there is nothing on
    /// the other end to draw or traverse.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen: AHashSet<Edge> = AHashSet::new();
        for (id, node) in &self.nodes {
            for conn in &node.connections {
                if conn != id && self.nodes.contains_key(conn) {
                    seen.insert(Edge::between(id, conn));
                }
            }
        }
        let mut edges: Vec<Edge> = seen.into_iter().collect();
        edges.sort();
        edges
    }
}
