//! Passive tree data model and loading
//!
//! The tree is stored as flat id-keyed maps with a derived adjacency table,
//! so neighbor resolution is an id lookup and a dangling reference is just
//! a lookup miss.

pub mod enrich;
pub mod graph;
pub mod group;
pub mod loader;
pub mod node;
pub mod skill;

pub use enrich::{enrich, Enrichment, SkillData};
pub use graph::{Edge, PassiveTree};
pub use group::Group;
pub use loader::{LoadError, TreeBundle};
pub use node::PassiveNode;
pub use skill::{PassiveSkill, SkillCatalog, StatValue};
