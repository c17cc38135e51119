// crates/topic-bridge-core/src/core/mod.rs
// ============================================================================
// Module: Topic Bridge Core Model
// Description: Handles, identifiers, binding configuration, and declarations.
// Purpose: Define the data model shared by synthesis and the host compiler.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The core model is split into small leaf modules: [`handle`] for the
//! reference-polymorphic resource handle, [`identifiers`] for deterministic
//! logical-id derivation, [`binding`] for the validated binding configuration,
//! [`resources`] for the typed declarations, and [`template`] for the shared
//! resource graph.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod binding;
pub mod handle;
pub mod identifiers;
pub mod resources;
pub mod template;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use binding::BindingConfig;
pub use handle::DerivationError;
pub use handle::ResourceHandle;
pub use identifiers::LogicalId;
pub use resources::ResourceDeclaration;
pub use template::Template;
