// crates/topic-bridge-core/src/core/identifiers.rs
// ============================================================================
// Module: Topic Bridge Identifiers
// Description: Deterministic logical identifiers for synthesized resources.
// Purpose: Provide a strongly typed identifier with stable derivation rules.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the [`LogicalId`] used to key every synthesized
//! resource in the template graph. Identifiers are either supplied verbatim
//! by the binding author (an override) or derived from a human-readable name
//! plus a role suffix. Derivation is deterministic: the same name and suffix
//! always produce the same identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Separator Tokens
// ============================================================================

/// Word token substituted for each dash in a derived name.
const DASH_TOKEN: &str = "Dash";

/// Word token substituted for each underscore in a derived name.
const UNDERSCORE_TOKEN: &str = "Underscore";

// ============================================================================
// SECTION: Logical Identifier
// ============================================================================

/// Logical identifier keying a resource declaration in the template graph.
///
/// # Invariants
/// - Opaque UTF-8 string; overrides are carried verbatim.
/// - Derived values contain no `-` or `_` separator characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogicalId(String);

impl LogicalId {
    /// Creates a logical identifier from an explicit override value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives a logical identifier from a human-readable name and a role
    /// suffix.
    ///
    /// Each dash becomes `Dash` and each underscore becomes `Underscore`, the
    /// first letter of the normalized name and of the suffix is upper-cased,
    /// and the two are concatenated. Distinct names normalizing to the same
    /// identifier collide silently; collisions are an accepted limitation.
    #[must_use]
    pub fn derive(name: &str, suffix: &str) -> Self {
        let normalized = name.replace('-', DASH_TOKEN).replace('_', UNDERSCORE_TOKEN);
        Self(format!("{}{}", upper_first(&normalized), upper_first(suffix)))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LogicalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LogicalId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Upper-cases the first character of `value`, leaving the rest untouched.
fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
