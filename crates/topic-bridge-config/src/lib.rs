// crates/topic-bridge-config/src/lib.rs
// ============================================================================
// Module: Topic Bridge Config Library
// Description: Validation and normalization of raw binding configurations.
// Purpose: Reject invalid bindings with field-level errors before synthesis.
// Dependencies: topic-bridge-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Topic Bridge Config checks a raw `snsToSqs` event value against the
//! accepted binding shapes and normalizes it into a typed
//! [`topic_bridge_core::BindingConfig`]. The accepted shape is also published
//! as a JSON Schema document via [`binding_schema`].
//! Invariants:
//! - The first violated constraint is reported with its field path.
//! - Validation is idempotent over its own normalized output.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod schema;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use schema::binding_schema;
pub use validate::ARN_PREFIX;
pub use validate::BATCH_SIZE_MAX;
pub use validate::BATCH_SIZE_MIN;
pub use validate::DELAY_SECONDS_MAX;
pub use validate::MAXIMUM_MESSAGE_SIZE_MAX;
pub use validate::MAXIMUM_MESSAGE_SIZE_MIN;
pub use validate::MESSAGE_RETENTION_PERIOD_MAX;
pub use validate::MESSAGE_RETENTION_PERIOD_MIN;
pub use validate::VISIBILITY_TIMEOUT_MAX;
pub use validate::ValidationError;
pub use validate::validate_binding;
