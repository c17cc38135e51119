// crates/topic-bridge-compiler/src/log.rs
// ============================================================================
// Module: Compile Log
// Description: Observability hook for compile progress messages.
// Purpose: Report per-resource progress without a hard logging dependency.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This module exposes a thin sink for the compiler's progress messages. It
//! is intentionally dependency-light so downstream hosts can plug their own
//! CLI or structured logging without redesign. Messages are emitted only when
//! the compiler's verbose option is set; [`NullLog`] drops everything.

// ============================================================================
// SECTION: Log Trait
// ============================================================================

/// Receives compile progress messages.
pub trait CompileLog {
    /// Consumes one progress message.
    fn message(&self, message: &str);
}

impl<L: CompileLog + ?Sized> CompileLog for &L {
    fn message(&self, message: &str) {
        (**self).message(message);
    }
}

// ============================================================================
// SECTION: Null Sink
// ============================================================================

/// Sink that drops every message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLog;

impl CompileLog for NullLog {
    fn message(&self, _message: &str) {}
}
