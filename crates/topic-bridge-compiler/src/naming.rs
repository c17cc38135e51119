// crates/topic-bridge-compiler/src/naming.rs
// ============================================================================
// Module: Function Naming
// Description: Host-owned naming convention for compute functions.
// Purpose: Consume the host's function identifier derivation opaquely.
// Dependencies: topic-bridge-core
// ============================================================================

//! ## Overview
//! The host platform owns how a compute function's logical identifier is
//! derived from its name; the compiler consumes that convention through
//! [`FunctionNaming`]. [`LambdaNaming`] is the stock convention so the
//! compiler is usable standalone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use topic_bridge_core::LogicalId;

// ============================================================================
// SECTION: Naming Trait
// ============================================================================

/// Derives a compute function's stable logical identifier from its name.
pub trait FunctionNaming {
    /// Returns the function's logical identifier under the host convention.
    fn function_logical_id(&self, function_name: &str) -> LogicalId;
}

// ============================================================================
// SECTION: Stock Convention
// ============================================================================

/// Stock naming convention: normalized function name plus a fixed role suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LambdaNaming;

impl FunctionNaming for LambdaNaming {
    fn function_logical_id(&self, function_name: &str) -> LogicalId {
        LogicalId::derive(function_name, "LambdaFunction")
    }
}
