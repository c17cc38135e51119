// crates/topic-bridge-core/src/core/resources.rs
// ============================================================================
// Module: Topic Bridge Resource Declarations
// Description: Typed declarations emitted into the template resource graph.
// Purpose: Serialize queue, topic, subscription, and policy resources exactly.
// Dependencies: crate::core::handle, serde, serde_json
// ============================================================================

//! ## Overview
//! Each synthesized resource is a [`ResourceDeclaration`] that serializes to
//! the exact `{Type, Properties}` wire shape the deployment template expects.
//! Optional properties are skipped when unset, so merged declarations never
//! carry null leaves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::handle::QueueAddress;
use crate::core::handle::ResourceHandle;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Subscription delivery protocol for queue endpoints.
pub const QUEUE_PROTOCOL: &str = "sqs";

/// Access-policy document version understood by the deployment target.
const POLICY_VERSION: &str = "2012-10-17";

/// Policy effect granting the statement.
const POLICY_EFFECT_ALLOW: &str = "Allow";

/// Policy principal matching any caller; the condition narrows the grant.
const POLICY_ANY_PRINCIPAL: &str = "*";

/// Action allowing message delivery into a queue.
const POLICY_SEND_ACTION: &str = "SQS:SendMessage";

// ============================================================================
// SECTION: Resource Declaration
// ============================================================================

/// One resource declaration destined for the template graph.
///
/// Serializes to `{"Type": <kind>, "Properties": <properties>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type", content = "Properties")]
pub enum ResourceDeclaration {
    /// Message queue.
    #[serde(rename = "AWS::SQS::Queue")]
    Queue(QueueProperties),
    /// Notification topic.
    #[serde(rename = "AWS::SNS::Topic")]
    Topic(TopicProperties),
    /// Subscription binding a topic to a queue.
    #[serde(rename = "AWS::SNS::Subscription")]
    Subscription(SubscriptionProperties),
    /// Access policy allowing the topic to send into the queue.
    #[serde(rename = "AWS::SQS::QueuePolicy")]
    QueuePolicy(QueuePolicyProperties),
}

impl ResourceDeclaration {
    /// Returns the declaration's resource type string.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Queue(_) => "AWS::SQS::Queue",
            Self::Topic(_) => "AWS::SNS::Topic",
            Self::Subscription(_) => "AWS::SNS::Subscription",
            Self::QueuePolicy(_) => "AWS::SQS::QueuePolicy",
        }
    }
}

// ============================================================================
// SECTION: Queue Properties
// ============================================================================

/// Properties of a synthesized queue declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueProperties {
    /// Queue name.
    pub queue_name: String,
    /// Delivery delay in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<u32>,
    /// Maximum message size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_message_size: Option<u32>,
    /// Message retention period in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<u32>,
    /// Visibility timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<u32>,
    /// Redrive rule routing unprocessable messages to a dead-letter queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<RedrivePolicy>,
}

/// Redrive rule carried on a queue declaration.
///
/// # Invariants
/// - `dead_letter_target_arn` is an attribute handle onto the dead-letter
///   queue's declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedrivePolicy {
    /// Delivery attempts before a message is routed to the dead-letter queue.
    pub max_receive_count: u32,
    /// Handle of the dead-letter queue's ARN.
    pub dead_letter_target_arn: ResourceHandle,
}

// ============================================================================
// SECTION: Topic Properties
// ============================================================================

/// Properties of a synthesized topic declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicProperties {
    /// Human-readable display name.
    pub display_name: String,
    /// Topic name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
}

// ============================================================================
// SECTION: Subscription Properties
// ============================================================================

/// Properties of the subscription binding topic to queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionProperties {
    /// Delivery protocol; always the queue transport.
    pub protocol: String,
    /// Resolved queue handle receiving deliveries.
    pub endpoint: ResourceHandle,
    /// Whether messages skip the notification envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_message_delivery: Option<bool>,
    /// Structured filter predicate, carried verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_policy: Option<Value>,
    /// Resolved topic handle messages originate from.
    pub topic_arn: ResourceHandle,
}

impl SubscriptionProperties {
    /// Creates a queue-transport subscription between the resolved handles.
    #[must_use]
    pub fn queue_transport(
        queue_arn: ResourceHandle,
        topic_arn: ResourceHandle,
        raw_message_delivery: Option<bool>,
        filter_policy: Option<Value>,
    ) -> Self {
        Self {
            protocol: QUEUE_PROTOCOL.to_owned(),
            endpoint: queue_arn,
            raw_message_delivery,
            filter_policy,
            topic_arn,
        }
    }
}

// ============================================================================
// SECTION: Queue Policy Properties
// ============================================================================

/// Properties of the access policy allowing the topic to send into the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueuePolicyProperties {
    /// Addresses of the queues the policy attaches to.
    pub queues: Vec<QueueAddress>,
    /// Policy document with the single allow statement.
    pub policy_document: PolicyDocument,
}

impl QueuePolicyProperties {
    /// Creates the single-statement policy granting send permission on
    /// `queue_arn` to requests originating from `topic_arn`.
    #[must_use]
    pub fn send_message(
        queue_arn: ResourceHandle,
        topic_arn: ResourceHandle,
        queue_address: QueueAddress,
    ) -> Self {
        Self {
            queues: vec![queue_address],
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_owned(),
                statement: PolicyStatement {
                    effect: POLICY_EFFECT_ALLOW.to_owned(),
                    principal: POLICY_ANY_PRINCIPAL.to_owned(),
                    action: POLICY_SEND_ACTION.to_owned(),
                    resource: queue_arn,
                    condition: PolicyCondition {
                        arn_equals: SourceArnEquality { source_arn: topic_arn },
                    },
                },
            },
        }
    }
}

/// Access-policy document carried on a queue policy declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Document version string.
    pub version: String,
    /// Single allow statement.
    pub statement: PolicyStatement,
}

/// Single allow statement of the queue policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    /// Statement effect.
    pub effect: String,
    /// Statement principal.
    pub principal: String,
    /// Granted action.
    pub action: String,
    /// Queue handle the grant applies to.
    pub resource: ResourceHandle,
    /// Condition scoping the grant to the topic.
    pub condition: PolicyCondition,
}

/// Condition scoping a statement to a single source identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCondition {
    /// Equality condition on the request's source identity.
    #[serde(rename = "ArnEquals")]
    pub arn_equals: SourceArnEquality,
}

/// Equality condition comparing the request source against the topic handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceArnEquality {
    /// Topic handle the request source must equal.
    #[serde(rename = "aws:SourceArn")]
    pub source_arn: ResourceHandle,
}

// ============================================================================
// SECTION: Function Event Entry
// ============================================================================

/// Trigger entry appended to the owning function's event list.
///
/// Serializes to `{"sqs": {"arn": <handle>, "batchSize": n}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqsEventEntry {
    /// Queue trigger payload.
    pub sqs: SqsTrigger,
}

/// Queue trigger payload referencing the resolved queue handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqsTrigger {
    /// Resolved queue handle the function is triggered by.
    pub arn: ResourceHandle,
    /// Batch size for trigger deliveries (1–10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}
