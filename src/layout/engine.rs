use ahash::AHashMap;
use glam::Vec2;

use crate::core::types::NodeId;
use crate::layout::orbits::OrbitTable;
use crate::tree::graph::PassiveTree;

/// Compute a position for every node against the canonical orbit table
pub fn layout(tree: &PassiveTree) -> AHashMap<NodeId, Vec2> {
    layout_with(tree, &OrbitTable::CANONICAL)
}

/// Compute a position for every node against an explicit orbit table
///
/// Fallbacks, never errors: an unresolved group anchors at the origin, and
/// an orbit outside the table leaves the node on its group anchor. Both are
/// reported through tracing only.
pub fn layout_with(tree: &PassiveTree, orbits: &OrbitTable) -> AHashMap<NodeId, Vec2> {
    let mut positions = AHashMap::with_capacity(tree.nodes.len());

    for (id, node) in &tree.nodes {
        let anchor = match tree.groups.get(&node.parent_group) {
            Some(group) => group.anchor(),
            None => {
                tracing::debug!(
                    node = %id,
                    group = node.parent_group,
                    "unresolved parent group, anchoring at origin"
                );
                Vec2::ZERO
            }
        };

        let position = match orbits.get(node.orbit) {
            Some((radius, slots)) if slots > 0 => {
                let step = std::f32::consts::TAU / slots as f32;
                let angle = node.slot as f32 * step;
                anchor + Vec2::from_angle(angle) * radius
            }
            _ => {
                tracing::debug!(
                    node = %id,
                    orbit = node.orbit,
                    "orbit outside table, falling back to group anchor"
                );
                anchor
            }
        };

        positions.insert(id.clone(), position);
    }

    positions
}
