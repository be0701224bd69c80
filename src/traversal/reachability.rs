//! Bounded-radius reachability

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::core::types::NodeId;
use crate::tree::graph::PassiveTree;

/// Node ids within `max_steps` edges of `start`, inclusive
///
/// `start` itself is reachable at distance 0. An absent start id yields an
/// empty set so stale ids from external callers stay harmless.
pub fn reachable(tree: &PassiveTree, start: &str, max_steps: usize) -> AHashSet<NodeId> {
    let mut result = AHashSet::new();
    if !tree.contains(start) {
        return result;
    }

    let mut visited: AHashSet<NodeId> = AHashSet::new();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back((start.to_string(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        result.insert(current.clone());
        if depth >= max_steps {
            continue;
        }
        for neighbor in tree.neighbors(&current) {
            if visited.contains(neighbor) || !tree.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            queue.push_back((neighbor.clone(), depth + 1));
        }
    }

    result
}
