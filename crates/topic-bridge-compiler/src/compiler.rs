// crates/topic-bridge-compiler/src/compiler.rs
// ============================================================================
// Module: Binding Compiler
// Description: Orchestration of validate, synthesize, and merge per binding.
// Purpose: Compile every declared binding into the shared template, failing
// the whole build on the first error.
// Dependencies: topic-bridge-core, topic-bridge-config, serde_json, thiserror
// ============================================================================

//! ## Overview
//! For each compute function with events, every event carrying the
//! [`BINDING_EVENT_KEY`] is validated, synthesized, and merged into the
//! shared template in declaration order. The queue triggers produced for a
//! function are appended to its event list only after all of its events have
//! been scanned. Errors are returned to the host, which treats them as fatal
//! to the build; prior merges are not rolled back since the build is aborted
//! anyway.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use topic_bridge_config::ValidationError;
use topic_bridge_config::validate_binding;
use topic_bridge_core::DerivationError;
use topic_bridge_core::synthesize;

use crate::log::CompileLog;
use crate::naming::FunctionNaming;
use crate::service::ServiceModel;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Event key marking a topic-to-queue binding entry.
pub const BINDING_EVENT_KEY: &str = "snsToSqs";

// ============================================================================
// SECTION: Compile Errors
// ============================================================================

/// Errors that abort the whole compile.
///
/// # Invariants
/// - Variants carry the owning function so the host can surface the failing
///   binding to the end user.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The raw binding value failed validation.
    #[error("snsToSqs event on function `{function}`: {source}")]
    Validation {
        /// Name of the function declaring the binding.
        function: String,
        /// First violated constraint.
        source: ValidationError,
    },
    /// A resolved handle shape could not support a derivation step.
    #[error("snsToSqs event on function `{function}`: {source}")]
    Derivation {
        /// Name of the function declaring the binding.
        function: String,
        /// Failing derivation step.
        source: DerivationError,
    },
    /// A synthesized declaration failed to serialize into the template.
    #[error("internal serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// SECTION: Compiler Options
// ============================================================================

/// Options threaded into the compiler at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Whether per-resource progress messages are emitted to the log sink.
    pub verbose: bool,
}

// ============================================================================
// SECTION: Binding Compiler
// ============================================================================

/// Compiles declared bindings into the shared template.
#[derive(Debug)]
pub struct BindingCompiler<N, L> {
    /// Host-owned function naming convention.
    naming: N,
    /// Sink for progress messages.
    log: L,
    /// Compile options.
    options: CompilerOptions,
}

impl<N: FunctionNaming, L: CompileLog> BindingCompiler<N, L> {
    /// Creates a compiler with the provided naming convention, log sink, and
    /// options.
    #[must_use]
    pub const fn new(naming: N, log: L, options: CompilerOptions) -> Self {
        Self { naming, log, options }
    }

    /// Compiles every binding declared in `service`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] on the first validation or derivation
    /// failure; the template may already hold declarations from earlier
    /// bindings, which the host discards by aborting the build.
    pub fn compile(&self, service: &mut ServiceModel) -> Result<(), CompileError> {
        for (function_name, function) in &mut service.functions {
            let mut generated = Vec::new();
            for event in &function.events {
                let Some(raw) = event.get(BINDING_EVENT_KEY) else {
                    continue;
                };
                let binding = validate_binding(raw).map_err(|source| {
                    CompileError::Validation { function: function_name.clone(), source }
                })?;
                let function_id = self.naming.function_logical_id(function_name);
                let output = synthesize(&function_id, &binding).map_err(|source| {
                    CompileError::Derivation { function: function_name.clone(), source }
                })?;

                for (logical_id, declaration) in &output.resources {
                    let value = serde_json::to_value(declaration)?;
                    service.template.merge(logical_id, value);
                    self.verbose(&format!(
                        "added {} [{logical_id}] for function [{function_name}]",
                        declaration.kind()
                    ));
                }
                generated.push(serde_json::to_value(&output.event)?);
            }

            if !generated.is_empty() {
                self.verbose(&format!(
                    "appending {} sqs trigger(s) to function [{function_name}]",
                    generated.len()
                ));
                function.events.extend(generated);
            }
        }
        Ok(())
    }

    /// Emits a progress message when the verbose option is set.
    fn verbose(&self, message: &str) {
        if self.options.verbose {
            self.log.message(message);
        }
    }
}
