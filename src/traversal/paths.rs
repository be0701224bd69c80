//! Path enumeration and shortest-path search
//!
//! The all-paths search is deliberately exhaustive within its depth cap;
//! there is no polynomial bound, so callers on dense graphs keep
//! `max_steps` small. The shortest-path search is a plain BFS with parent
//! reconstruction and deterministic tie-breaks from adjacency order.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::core::types::NodeId;
use crate::tree::graph::PassiveTree;

/// Default inclusive bound on path length in node count (7 edges)
pub const DEFAULT_MAX_STEPS: usize = 8;

/// All simple paths from `start` to `end` of at most `max_steps` nodes
///
/// `start == end` yields the single trivial path. Absent endpoints yield an
/// empty result, never an error.
pub fn all_paths(
    tree: &PassiveTree,
    start: &str,
    end: &str,
    max_steps: usize,
) -> Vec<Vec<NodeId>> {
    if !tree.contains(start) || !tree.contains(end) {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut path = vec![start.to_string()];
    let mut visited = AHashSet::new();
    visited.insert(start.to_string());
    extend(tree, start, end, max_steps, &mut path, &mut visited, &mut results);
    results
}

fn extend(
    tree: &PassiveTree,
    current: &str,
    end: &str,
    max_steps: usize,
    path: &mut Vec<NodeId>,
    visited: &mut AHashSet<NodeId>,
    results: &mut Vec<Vec<NodeId>>,
) {
    if current == end {
        results.push(path.clone());
        return;
    }
    if path.len() >= max_steps {
        return;
    }
    for neighbor in tree.neighbors(current) {
        if visited.contains(neighbor) || !tree.contains(neighbor) {
            continue;
        }
        visited.insert(neighbor.clone());
        path.push(neighbor.clone());
        extend(tree, neighbor, end, max_steps, path, visited, results);
        path.pop();
        visited.remove(neighbor);
    }
}

/// One minimum-edge-count path from `start` to `end`
///
/// None when the graph does not connect them or either id is absent. Among
/// equal-length paths the first discovered under adjacency order wins,
/// which makes results reproducible across runs.
pub fn shortest_path(tree: &PassiveTree, start: &str, end: &str) -> Option<Vec<NodeId>> {
    if !tree.contains(start) || !tree.contains(end) {
        return None;
    }
    if start == end {
        return Some(vec![start.to_string()]);
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut came_from: AHashMap<NodeId, NodeId> = AHashMap::new();
    let mut visited: AHashSet<NodeId> = AHashSet::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        for neighbor in tree.neighbors(&current) {
            if visited.contains(neighbor) || !tree.contains(neighbor) {
                continue;
            }
            came_from.insert(neighbor.clone(), current.clone());
            if neighbor == end {
                // BFS discovers nodes in non-decreasing distance order, so
                // the first parent chain to reach `end` is minimal
                return Some(reconstruct(&came_from, end));
            }
            visited.insert(neighbor.clone());
            queue.push_back(neighbor.clone());
        }
    }

    None
}

fn reconstruct(came_from: &AHashMap<NodeId, NodeId>, end: &str) -> Vec<NodeId> {
    let mut path = vec![end.to_string()];
    let mut current = end.to_string();
    while let Some(prev) = came_from.get(&current) {
        path.push(prev.clone());
        current = prev.clone();
    }
    path.reverse();
    path
}

/// Whether any path connects the two nodes
pub fn are_connected(tree: &PassiveTree, a: &str, b: &str) -> bool {
    shortest_path(tree, a, b).is_some()
}

/// Whether `target` lies within `max_steps` edges of `start`
pub fn is_within_distance(
    tree: &PassiveTree,
    start: &str,
    target: &str,
    max_steps: usize,
) -> bool {
    shortest_path(tree, start, target)
        .map_or(false, |path| path.len() <= max_steps + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::PassiveNode;

    /// a - b - c plus a detour a - d - c
    fn diamond() -> PassiveTree {
        PassiveTree::from_parts(
            vec![
                PassiveNode::new("a").with_connections(["b", "d"]),
                PassiveNode::new("b").with_connections(["c"]),
                PassiveNode::new("c"),
                PassiveNode::new("d").with_connections(["c"]),
            ],
            Vec::new(),
        )
    }

    fn chain() -> PassiveTree {
        PassiveTree::from_parts(
            vec![
                PassiveNode::new("a").with_connections(["b"]),
                PassiveNode::new("b").with_connections(["c"]),
                PassiveNode::new("c"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_all_paths_chain() {
        let tree = chain();
        assert_eq!(
            all_paths(&tree, "a", "c", 3),
            vec![vec!["a", "b", "c"]]
        );
    }

    #[test]
    fn test_all_paths_finds_both_branches() {
        let tree = diamond();
        let paths = all_paths(&tree, "a", "c", 3);
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec!["a".to_string(), "b".to_string(), "c".to_string()]));
        assert!(paths.contains(&vec!["a".to_string(), "d".to_string(), "c".to_string()]));
    }

    #[test]
    fn test_all_paths_respects_bound() {
        let tree = diamond();
        // Two nodes allow only direct paths, of which there are none
        assert!(all_paths(&tree, "a", "c", 2).is_empty());
        for path in all_paths(&tree, "a", "c", 4) {
            assert!(path.len() <= 4);
        }
    }

    #[test]
    fn test_all_paths_are_simple() {
        let tree = diamond();
        for path in all_paths(&tree, "a", "c", DEFAULT_MAX_STEPS) {
            let unique: AHashSet<&NodeId> = path.iter().collect();
            assert_eq!(unique.len(), path.len(), "repeated node in {path:?}");
        }
    }

    #[test]
    fn test_all_paths_trivial_when_start_is_end() {
        let tree = chain();
        assert_eq!(all_paths(&tree, "b", "b", 8), vec![vec!["b"]]);
    }

    #[test]
    fn test_all_paths_absent_endpoint_is_empty() {
        let tree = chain();
        assert!(all_paths(&tree, "a", "ghost", 8).is_empty());
        assert!(all_paths(&tree, "ghost", "c", 8).is_empty());
    }

    #[test]
    fn test_shortest_path_chain() {
        let tree = chain();
        assert_eq!(
            shortest_path(&tree, "a", "c"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_shortest_path_prefers_fewest_edges() {
        // a - b - c - z and a shortcut a - z
        let tree = PassiveTree::from_parts(
            vec![
                PassiveNode::new("a").with_connections(["b", "z"]),
                PassiveNode::new("b").with_connections(["c"]),
                PassiveNode::new("c").with_connections(["z"]),
                PassiveNode::new("z"),
            ],
            Vec::new(),
        );
        assert_eq!(
            shortest_path(&tree, "a", "z"),
            Some(vec!["a".to_string(), "z".to_string()])
        );
    }

    #[test]
    fn test_shortest_path_tie_break_is_deterministic() {
        let tree = diamond();
        // Both a-b-c and a-d-c are length 2; adjacency lists b first
        assert_eq!(
            shortest_path(&tree, "a", "c"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_shortest_path_same_node() {
        let tree = chain();
        assert_eq!(shortest_path(&tree, "b", "b"), Some(vec!["b".to_string()]));
    }

    #[test]
    fn test_shortest_path_disconnected() {
        let tree = PassiveTree::from_parts(
            vec![
                PassiveNode::new("a").with_connections(["b"]),
                PassiveNode::new("b"),
                PassiveNode::new("island"),
            ],
            Vec::new(),
        );
        assert_eq!(shortest_path(&tree, "a", "island"), None);
    }

    #[test]
    fn test_shortest_path_absent_endpoint() {
        let tree = chain();
        assert_eq!(shortest_path(&tree, "a", "ghost"), None);
        assert_eq!(shortest_path(&tree, "ghost", "a"), None);
    }

    #[test]
    fn test_dangling_connection_never_appears() {
        let tree = PassiveTree::from_parts(
            vec![
                PassiveNode::new("a").with_connections(["ghost", "b"]),
                PassiveNode::new("b").with_connections(["ghost"]),
            ],
            Vec::new(),
        );
        let path = shortest_path(&tree, "a", "b").unwrap();
        assert_eq!(path, vec!["a".to_string(), "b".to_string()]);
        for path in all_paths(&tree, "a", "b", 8) {
            assert!(!path.iter().any(|id| id == "ghost"));
        }
    }

    #[test]
    fn test_shortest_agrees_with_all_paths_minimum() {
        let tree = diamond();
        let shortest = shortest_path(&tree, "a", "c").unwrap();
        let minimum = all_paths(&tree, "a", "c", 8)
            .into_iter()
            .map(|p| p.len())
            .min()
            .unwrap();
        assert_eq!(shortest.len(), minimum);
    }

    #[test]
    fn test_are_connected() {
        let tree = PassiveTree::from_parts(
            vec![
                PassiveNode::new("a").with_connections(["b"]),
                PassiveNode::new("b"),
                PassiveNode::new("island"),
            ],
            Vec::new(),
        );
        assert!(are_connected(&tree, "a", "b"));
        assert!(are_connected(&tree, "b", "a"));
        assert!(!are_connected(&tree, "a", "island"));
    }

    #[test]
    fn test_is_within_distance() {
        let tree = chain();
        assert!(is_within_distance(&tree, "a", "c", 2));
        assert!(!is_within_distance(&tree, "a", "c", 1));
        assert!(is_within_distance(&tree, "a", "a", 0));
        assert!(!is_within_distance(&tree, "a", "ghost", 5));
    }
}
