// crates/topic-bridge-core/src/lib.rs
// ============================================================================
// Module: Topic Bridge Core Library
// Description: Data model and synthesis engine for topic-to-queue bindings.
// Purpose: Turn validated binding configurations into template resource declarations.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Topic Bridge Core holds the reference-polymorphic [`ResourceHandle`] model,
//! deterministic [`LogicalId`] derivation, the typed CloudFormation resource
//! declarations, the [`Template`] resource graph with deep-merge semantics,
//! and the per-binding [`runtime::synthesize`] engine.
//! Invariants:
//! - Synthesis is a pure, deterministic function of its inputs; no I/O.
//! - Declarations are emitted in merge order: dead-letter queue, queue,
//!   topic, subscription, queue policy.
//! - Unsupported handle shapes surface as [`DerivationError`] values, never
//!   as silently malformed output.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::binding::BindingConfig;
pub use crate::core::binding::DeadLetterSpec;
pub use crate::core::binding::QueueEndpoint;
pub use crate::core::binding::QueueSpec;
pub use crate::core::binding::TopicEndpoint;
pub use crate::core::binding::TopicSpec;
pub use crate::core::handle::DerivationError;
pub use crate::core::handle::QueueAddress;
pub use crate::core::handle::ResourceHandle;
pub use crate::core::handle::is_reference;
pub use crate::core::identifiers::LogicalId;
pub use crate::core::resources::PolicyCondition;
pub use crate::core::resources::PolicyDocument;
pub use crate::core::resources::PolicyStatement;
pub use crate::core::resources::QueuePolicyProperties;
pub use crate::core::resources::QueueProperties;
pub use crate::core::resources::RedrivePolicy;
pub use crate::core::resources::ResourceDeclaration;
pub use crate::core::resources::SourceArnEquality;
pub use crate::core::resources::SqsEventEntry;
pub use crate::core::resources::SqsTrigger;
pub use crate::core::resources::SubscriptionProperties;
pub use crate::core::resources::TopicProperties;
pub use crate::core::template::Template;
pub use crate::runtime::synthesizer::BindingOutput;
pub use crate::runtime::synthesizer::synthesize;
