// crates/topic-bridge-compiler/src/lib.rs
// ============================================================================
// Module: Topic Bridge Compiler Library
// Description: Host-facing orchestration of binding compilation.
// Purpose: Walk the service model and compile every declared binding.
// Dependencies: topic-bridge-core, topic-bridge-config, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The compiler iterates every compute function in a [`ServiceModel`],
//! validates and synthesizes each `snsToSqs` event, merges the resulting
//! declarations into the shared template, and appends the generated queue
//! triggers to the owning function's event list. The first validation or
//! derivation error aborts the whole compile.
//! Invariants:
//! - Functions and events are processed in a deterministic order.
//! - Generated trigger entries are appended only after a function's events
//!   have been fully scanned, so they are never re-scanned as bindings.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod compiler;
pub mod log;
pub mod naming;
pub mod service;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use compiler::BINDING_EVENT_KEY;
pub use compiler::BindingCompiler;
pub use compiler::CompileError;
pub use compiler::CompilerOptions;
pub use log::CompileLog;
pub use log::NullLog;
pub use naming::FunctionNaming;
pub use naming::LambdaNaming;
pub use service::FunctionDefinition;
pub use service::ServiceModel;
