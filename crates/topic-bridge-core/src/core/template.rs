// crates/topic-bridge-core/src/core/template.rs
// ============================================================================
// Module: Topic Bridge Template Graph
// Description: Shared resource graph with deep-merge declaration semantics.
// Purpose: Accumulate synthesized declarations keyed by logical identifier.
// Dependencies: crate::core::identifiers, serde, serde_json
// ============================================================================

//! ## Overview
//! The [`Template`] holds the `Resources` mapping the host later serializes
//! into the deployment template. Declarations merge deeply: nested objects
//! merge recursively, scalar and array leaves are overwritten by the incoming
//! value, and previously merged sibling keys are preserved untouched. The
//! mapping iterates in a deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::identifiers::LogicalId;

// ============================================================================
// SECTION: Template
// ============================================================================

/// Shared output resource graph keyed by logical identifier.
///
/// # Invariants
/// - Re-declaring an identifier deep-merges rather than duplicating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Resource declarations keyed by logical identifier.
    #[serde(rename = "Resources", default)]
    resources: Map<String, Value>,
}

impl Template {
    /// Creates an empty template graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-merges `declaration` into the entry keyed by `id`.
    ///
    /// Creates the entry when absent. On key collision, nested objects merge
    /// recursively and scalar or array leaves are overwritten by the incoming
    /// value; sibling keys already present are preserved.
    pub fn merge(&mut self, id: &LogicalId, declaration: Value) {
        match self.resources.get_mut(id.as_str()) {
            Some(existing) => deep_merge(existing, declaration),
            None => {
                self.resources.insert(id.as_str().to_owned(), declaration);
            }
        }
    }

    /// Returns the declaration keyed by `id`, if present.
    #[must_use]
    pub fn get(&self, id: &LogicalId) -> Option<&Value> {
        self.resources.get(id.as_str())
    }

    /// Returns the full resource mapping.
    #[must_use]
    pub const fn resources(&self) -> &Map<String, Value> {
        &self.resources
    }

    /// Returns the number of declarations in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true when the graph holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

// ============================================================================
// SECTION: Deep Merge
// ============================================================================

/// Deep-merges `incoming` into `target`.
///
/// Objects merge key-by-key recursively; any other pairing replaces the
/// target slot with the incoming value.
fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target_map), Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                match target_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
