// crates/topic-bridge-core/src/core/binding.rs
// ============================================================================
// Module: Topic Bridge Binding Configuration
// Description: Validated configuration for one topic-to-queue binding.
// Purpose: Model endpoint specs and delivery options in their wire shape.
// Dependencies: crate::core::{handle, identifiers}, serde, serde_json
// ============================================================================

//! ## Overview
//! A [`BindingConfig`] is the normalized form of one `snsToSqs` event entry.
//! Each endpoint is either an existing [`ResourceHandle`] or an inline spec
//! requesting synthesis of a new resource; the two shapes are mutually
//! exclusive by construction. Serialization skips unset options so a
//! normalized binding round-trips unchanged through validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::handle::ResourceHandle;
use crate::core::identifiers::LogicalId;

// ============================================================================
// SECTION: Endpoint Specs
// ============================================================================

/// Notification-topic side of a binding: an existing handle or an inline spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicEndpoint {
    /// Pre-existing topic referenced by handle; no declaration is emitted.
    Existing(ResourceHandle),
    /// Inline spec requesting synthesis of a new topic declaration.
    Inline(TopicSpec),
}

/// Queue side of a binding: an existing handle or an inline spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueueEndpoint {
    /// Pre-existing queue referenced by handle; no declaration is emitted.
    Existing(ResourceHandle),
    /// Inline spec requesting synthesis of a new queue declaration.
    Inline(QueueSpec),
}

/// Inline spec for a topic to be synthesized.
///
/// # Invariants
/// - `display_name` doubles as the derivation name when no override is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSpec {
    /// Human-readable display name; also the id-derivation name.
    pub display_name: String,
    /// Topic name carried onto the declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
    /// Explicit logical-id override, used verbatim when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<LogicalId>,
}

/// Inline spec for a queue to be synthesized.
///
/// # Invariants
/// - Numeric tuning values are range-checked before this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSpec {
    /// Queue name carried onto the declaration; also the id-derivation name.
    pub queue_name: String,
    /// Explicit logical-id override, used verbatim when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<LogicalId>,
    /// Delivery delay in seconds (0–900).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<u32>,
    /// Visibility timeout in seconds (0–43200).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<u32>,
    /// Maximum message size in bytes (1024–262144).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_message_size: Option<u32>,
    /// Message retention period in seconds (60–1209600).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<u32>,
    /// Optional inline dead-letter queue spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dlq: Option<Box<DeadLetterSpec>>,
}

/// Inline dead-letter queue spec with its redrive threshold.
///
/// The queue shape recurses, but synthesis materializes one level only: a
/// dead-letter spec nested inside another dead-letter spec is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetterSpec {
    /// Queue attributes of the dead-letter queue.
    #[serde(flatten)]
    pub queue: QueueSpec,
    /// Delivery attempts before a message is routed to this queue (>= 1).
    pub max_receive_count: u32,
}

// ============================================================================
// SECTION: Binding Configuration
// ============================================================================

/// Validated top-level configuration for one binding.
///
/// # Invariants
/// - `batch_size`, when present, is within 1–10.
/// - `filter_policy` is carried verbatim; its contents are host-interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingConfig {
    /// Notification-topic endpoint.
    pub sns: TopicEndpoint,
    /// Queue endpoint.
    pub sqs: QueueEndpoint,
    /// Whether messages are delivered without the notification envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_message_delivery: Option<bool>,
    /// Structured filter predicate forwarded to the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<Value>,
    /// Batch size for the generated function trigger (1–10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}
