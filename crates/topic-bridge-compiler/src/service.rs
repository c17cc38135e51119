// crates/topic-bridge-compiler/src/service.rs
// ============================================================================
// Module: Service Model
// Description: Mutable view of the host's function registry and template.
// Purpose: Give the compiler one document to read bindings from and write
// declarations and triggers into.
// Dependencies: topic-bridge-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The [`ServiceModel`] is the host collaborator surface: a function registry
//! keyed by function name (deterministically ordered) and the shared
//! [`Template`] the compiled declarations merge into. Each
//! [`FunctionDefinition`] exposes its mutable event list; entries are raw
//! JSON values because the host owns event kinds beyond this crate's binding.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use topic_bridge_core::Template;

// ============================================================================
// SECTION: Function Definition
// ============================================================================

/// One compute function's definition within the service document.
///
/// Fields owned by the host (handler, runtime, memory) are not modeled here;
/// deserialization ignores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Declared event entries, including binding entries and host-owned kinds.
    #[serde(default)]
    pub events: Vec<Value>,
}

impl FunctionDefinition {
    /// Creates a definition with the provided event entries.
    #[must_use]
    pub const fn new(events: Vec<Value>) -> Self {
        Self { events }
    }
}

// ============================================================================
// SECTION: Service Model
// ============================================================================

/// Mutable service document the compiler reads from and writes into.
///
/// # Invariants
/// - `functions` iterates in name order, keeping compilation deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceModel {
    /// Function registry keyed by function name.
    pub functions: BTreeMap<String, FunctionDefinition>,
    /// Shared output template the declarations merge into.
    pub template: Template,
}

impl ServiceModel {
    /// Creates an empty service model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service model from a function registry and an empty template.
    #[must_use]
    pub fn from_functions(functions: BTreeMap<String, FunctionDefinition>) -> Self {
        Self { functions, template: Template::new() }
    }
}
