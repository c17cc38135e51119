// crates/topic-bridge-core/src/runtime/synthesizer.rs
// ============================================================================
// Module: Topic Bridge Synthesizer
// Description: Per-binding synthesis of queue, topic, subscription, and policy.
// Purpose: Resolve endpoints, derive identifiers, and wire cross-references.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Synthesis is executed once per binding. Each endpoint is either reused
//! as-is (already a reference handle) or materialized as a new declaration
//! under a derived or overridden logical id. Declarations are emitted in
//! merge order: dead-letter queue, queue, topic, subscription, queue policy,
//! so later declarations only reference identifiers already present.
//! Invariants:
//! - Pure and deterministic; no feedback from a live deployment target.
//! - Dead-letter nesting is materialized one level deep; deeper specs are
//!   ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::binding::BindingConfig;
use crate::core::binding::DeadLetterSpec;
use crate::core::binding::QueueEndpoint;
use crate::core::binding::QueueSpec;
use crate::core::binding::TopicEndpoint;
use crate::core::handle::ARN_ATTRIBUTE;
use crate::core::handle::DerivationError;
use crate::core::handle::ResourceHandle;
use crate::core::identifiers::LogicalId;
use crate::core::resources::QueuePolicyProperties;
use crate::core::resources::QueueProperties;
use crate::core::resources::RedrivePolicy;
use crate::core::resources::ResourceDeclaration;
use crate::core::resources::SqsEventEntry;
use crate::core::resources::SqsTrigger;
use crate::core::resources::SubscriptionProperties;
use crate::core::resources::TopicProperties;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Role suffix for derived queue identifiers.
const QUEUE_ROLE: &str = "Queue";

/// Role suffix for derived topic identifiers.
const TOPIC_ROLE: &str = "Topic";

// ============================================================================
// SECTION: Binding Output
// ============================================================================

/// Result of synthesizing one binding.
///
/// # Invariants
/// - `resources` is in merge order: dead-letter queue, queue, topic,
///   subscription, queue policy (absent entries skipped).
#[derive(Debug, Clone, PartialEq)]
pub struct BindingOutput {
    /// Declarations to merge into the template graph, in order.
    pub resources: Vec<(LogicalId, ResourceDeclaration)>,
    /// Trigger entry to append to the owning function's event list.
    pub event: SqsEventEntry,
}

// ============================================================================
// SECTION: Synthesis
// ============================================================================

/// Synthesizes the declarations and trigger entry for one binding.
///
/// `function_logical_id` is the owning function's identifier under the host's
/// naming convention; it prefixes the subscription and policy identifiers.
///
/// # Errors
///
/// Returns [`DerivationError`] when a resolved handle shape cannot be
/// converted to a queue URL or to a logical id.
pub fn synthesize(
    function_logical_id: &LogicalId,
    binding: &BindingConfig,
) -> Result<BindingOutput, DerivationError> {
    let mut resources = Vec::new();

    let queue_arn = resolve_queue(&binding.sqs, &mut resources);
    let topic_arn = resolve_topic(&binding.sns, &mut resources);

    let queue_address = queue_arn.queue_address()?;
    let queue_id = queue_arn.queue_logical_id()?;
    let topic_id = topic_arn.topic_logical_id()?;

    let subscription = SubscriptionProperties::queue_transport(
        queue_arn.clone(),
        topic_arn.clone(),
        binding.raw_message_delivery,
        binding.filter_policy.clone(),
    );
    let subscription_id =
        LogicalId::new(format!("{function_logical_id}{topic_id}To{queue_id}Subscription"));
    resources.push((subscription_id, ResourceDeclaration::Subscription(subscription)));

    let policy =
        QueuePolicyProperties::send_message(queue_arn.clone(), topic_arn, queue_address);
    let policy_id =
        LogicalId::new(format!("{function_logical_id}{topic_id}To{queue_id}QueuePolicy"));
    resources.push((policy_id, ResourceDeclaration::QueuePolicy(policy)));

    let event = SqsEventEntry {
        sqs: SqsTrigger { arn: queue_arn, batch_size: binding.batch_size },
    };

    Ok(BindingOutput { resources, event })
}

// ============================================================================
// SECTION: Endpoint Resolution
// ============================================================================

/// Resolves the queue endpoint, emitting declarations for inline specs.
///
/// An existing handle is reused as-is with no dead-letter processing. An
/// inline spec emits its dead-letter queue first (when present), then the
/// queue itself; the resolved handle is an attribute reference onto the new
/// declaration's ARN.
fn resolve_queue(
    endpoint: &QueueEndpoint,
    resources: &mut Vec<(LogicalId, ResourceDeclaration)>,
) -> ResourceHandle {
    match endpoint {
        QueueEndpoint::Existing(handle) => handle.clone(),
        QueueEndpoint::Inline(spec) => {
            let redrive_policy =
                spec.dlq.as_ref().map(|dlq| synthesize_dead_letter(dlq, resources));
            let queue_id = queue_spec_id(spec);
            let handle = ResourceHandle::attribute_ref(&queue_id, ARN_ATTRIBUTE);
            resources.push((queue_id, queue_declaration(spec, redrive_policy)));
            handle
        }
    }
}

/// Emits the dead-letter queue declaration and builds its redrive rule.
///
/// Only one nesting level is materialized: a dead-letter spec carried by
/// `dlq.queue` itself is not synthesized.
fn synthesize_dead_letter(
    dlq: &DeadLetterSpec,
    resources: &mut Vec<(LogicalId, ResourceDeclaration)>,
) -> RedrivePolicy {
    let dlq_id = queue_spec_id(&dlq.queue);
    let target = ResourceHandle::attribute_ref(&dlq_id, ARN_ATTRIBUTE);
    resources.push((dlq_id, queue_declaration(&dlq.queue, None)));
    RedrivePolicy {
        max_receive_count: dlq.max_receive_count,
        dead_letter_target_arn: target,
    }
}

/// Resolves the topic endpoint, emitting a declaration for inline specs.
///
/// The resolved handle for a new topic is a logical reference onto its
/// declaration.
fn resolve_topic(
    endpoint: &TopicEndpoint,
    resources: &mut Vec<(LogicalId, ResourceDeclaration)>,
) -> ResourceHandle {
    match endpoint {
        TopicEndpoint::Existing(handle) => handle.clone(),
        TopicEndpoint::Inline(spec) => {
            let topic_id = spec
                .logical_id
                .clone()
                .unwrap_or_else(|| LogicalId::derive(&spec.display_name, TOPIC_ROLE));
            let handle = ResourceHandle::logical_ref(&topic_id);
            let declaration = ResourceDeclaration::Topic(TopicProperties {
                display_name: spec.display_name.clone(),
                topic_name: spec.topic_name.clone(),
            });
            resources.push((topic_id, declaration));
            handle
        }
    }
}

// ============================================================================
// SECTION: Declaration Helpers
// ============================================================================

/// Returns the spec's override identifier, or derives one from its name.
fn queue_spec_id(spec: &QueueSpec) -> LogicalId {
    spec.logical_id
        .clone()
        .unwrap_or_else(|| LogicalId::derive(&spec.queue_name, QUEUE_ROLE))
}

/// Builds a queue declaration from an inline spec and an optional redrive rule.
fn queue_declaration(spec: &QueueSpec, redrive_policy: Option<RedrivePolicy>) -> ResourceDeclaration {
    ResourceDeclaration::Queue(QueueProperties {
        queue_name: spec.queue_name.clone(),
        delay_seconds: spec.delay_seconds,
        maximum_message_size: spec.maximum_message_size,
        message_retention_period: spec.message_retention_period,
        visibility_timeout: spec.visibility_timeout,
        redrive_policy,
    })
}
