//! Graph traversals over node-id adjacency
//!
//! All operations treat an id that is absent from the node map as
//! non-existent: dangling references from connection lists are skipped,
//! absent endpoints yield empty results, and nothing here ever errors.

pub mod paths;
pub mod reachability;

pub use paths::{all_paths, are_connected, is_within_distance, shortest_path, DEFAULT_MAX_STEPS};
pub use reachability::reachable;
