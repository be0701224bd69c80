use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Stat magnitude as it appears in the catalog
///
/// The source mixes numeric and string magnitudes in the same mapping, so
/// both are representable; numeric aggregation belongs to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// Skill catalog entry keyed by skill id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassiveSkill {
    #[serde(default)]
    pub name: String,
    /// Opaque reference for renderers; unused by the core
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub stats: HashMap<String, StatValue>,
    #[serde(default)]
    pub is_notable: bool,
}

/// Mapping from skill id to catalog entry
pub type SkillCatalog = AHashMap<String, PassiveSkill>;
