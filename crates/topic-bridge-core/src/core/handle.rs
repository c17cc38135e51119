// crates/topic-bridge-core/src/core/handle.rs
// ============================================================================
// Module: Topic Bridge Resource Handles
// Description: Reference-polymorphic handle for pre-existing or synthesized resources.
// Purpose: Classify, address, and identify resources regardless of reference form.
// Dependencies: crate::core::identifiers, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`ResourceHandle`] is either a literal ARN string or one of the four
//! template intrinsic reference forms (`Ref`, `Fn::GetAtt`, `Fn::ImportValue`,
//! `Fn::Sub`). The handle is a closed sum type: address derivation and
//! logical-id extraction are exhaustive matches, so a handle shape a step
//! cannot support is a typed [`DerivationError`], not a runtime fallback.
//! Invariants:
//! - Classification is side-effect-free and total over any JSON value.
//! - Handles are never introspected beyond their shape; whether the referenced
//!   resource exists is a deployment-time concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::identifiers::LogicalId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Intrinsic object keys that mark a value as a reference handle.
const REFERENCE_KEYS: &[&str] = &["Ref", "Fn::GetAtt", "Fn::ImportValue", "Fn::Sub"];

/// Attribute name exposing a queue's ARN on a synthesized declaration.
pub const ARN_ATTRIBUTE: &str = "Arn";

/// Number of colon-delimited segments in a fully-qualified queue ARN.
const ARN_SEGMENTS: usize = 6;

// ============================================================================
// SECTION: Derivation Errors
// ============================================================================

/// Errors raised when a handle shape cannot support a derivation step.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DerivationError {
    /// Queue handle cannot be converted to a queue URL.
    #[error("cannot convert queue handle `{0}` to a queue URL")]
    QueueAddress(String),
    /// Queue handle cannot be converted to a logical id.
    #[error("cannot convert queue handle `{0}` to a logical id")]
    QueueLogicalId(String),
    /// Topic handle cannot be converted to a logical id.
    #[error("cannot convert topic handle `{0}` to a logical id")]
    TopicLogicalId(String),
}

// ============================================================================
// SECTION: Resource Handle
// ============================================================================

/// Reference to a cloud resource, literal or indirect.
///
/// Serializes untagged so the wire form is exactly the template shorthand:
/// a bare string, `{"Ref": name}`, `{"Fn::GetAtt": [id, attr]}`,
/// `{"Fn::ImportValue": key}`, or `{"Fn::Sub": template}`.
///
/// # Invariants
/// - Exactly one variant applies to any accepted wire value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceHandle {
    /// Literal fully-qualified ARN string.
    Arn(String),
    /// Logical reference to a resource declared in the same template.
    LogicalRef {
        /// Logical id of the referenced resource.
        #[serde(rename = "Ref")]
        name: String,
    },
    /// Attribute reference to a resource declared in the same template.
    AttributeRef {
        /// Logical id followed by the attribute name.
        #[serde(rename = "Fn::GetAtt")]
        parts: Vec<String>,
    },
    /// Import of a value exported by another stack.
    ImportRef {
        /// Export key, either a plain string or a nested intrinsic.
        #[serde(rename = "Fn::ImportValue")]
        import: Value,
    },
    /// Substitution template resolved at deployment time.
    SubstitutionRef {
        /// Template string, or template plus substitution map.
        #[serde(rename = "Fn::Sub")]
        template: Value,
    },
}

impl ResourceHandle {
    /// Creates a literal ARN handle.
    #[must_use]
    pub fn arn(arn: impl Into<String>) -> Self {
        Self::Arn(arn.into())
    }

    /// Creates a logical reference to a declared resource.
    #[must_use]
    pub fn logical_ref(id: &LogicalId) -> Self {
        Self::LogicalRef { name: id.as_str().to_owned() }
    }

    /// Creates an attribute reference to a declared resource.
    #[must_use]
    pub fn attribute_ref(id: &LogicalId, attribute: &str) -> Self {
        Self::AttributeRef { parts: vec![id.as_str().to_owned(), attribute.to_owned()] }
    }

    /// Derives the queue address used by queue policies and event wiring.
    ///
    /// A literal ARN decomposes into its region, account, and queue name
    /// segments and becomes an endpoint URL; an attribute reference becomes a
    /// logical reference to the same declaration, resolved by the host at
    /// deployment time.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::QueueAddress`] for any other handle shape,
    /// or when a literal ARN does not split into exactly six segments.
    pub fn queue_address(&self) -> Result<QueueAddress, DerivationError> {
        match self {
            Self::Arn(arn) => {
                let segments: Vec<&str> = arn.split(':').collect();
                if segments.len() != ARN_SEGMENTS {
                    return Err(DerivationError::QueueAddress(self.describe()));
                }
                let (region, account, name) = (segments[3], segments[4], segments[5]);
                Ok(QueueAddress::Url(format!(
                    "https://sqs.{region}.amazonaws.com/{account}/{name}"
                )))
            }
            Self::AttributeRef { parts } => parts.first().map_or_else(
                || Err(DerivationError::QueueAddress(self.describe())),
                |id| Ok(QueueAddress::Logical { name: id.clone() }),
            ),
            Self::LogicalRef { .. } | Self::ImportRef { .. } | Self::SubstitutionRef { .. } => {
                Err(DerivationError::QueueAddress(self.describe()))
            }
        }
    }

    /// Extracts the logical id of the queue this handle resolves to.
    ///
    /// A literal ARN re-derives the id from its trailing name segment with the
    /// `Queue` role suffix; an attribute reference carries the id directly.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::QueueLogicalId`] for any other handle shape.
    pub fn queue_logical_id(&self) -> Result<LogicalId, DerivationError> {
        match self {
            Self::Arn(arn) => Ok(LogicalId::derive(last_segment(arn), "Queue")),
            Self::AttributeRef { parts } => parts.first().map_or_else(
                || Err(DerivationError::QueueLogicalId(self.describe())),
                |id| Ok(LogicalId::new(id.clone())),
            ),
            Self::LogicalRef { .. } | Self::ImportRef { .. } | Self::SubstitutionRef { .. } => {
                Err(DerivationError::QueueLogicalId(self.describe()))
            }
        }
    }

    /// Extracts the logical id of the topic this handle resolves to.
    ///
    /// A literal ARN re-derives the id from its trailing name segment with the
    /// `Topic` role suffix; a logical reference carries the id directly.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::TopicLogicalId`] for any other handle shape.
    pub fn topic_logical_id(&self) -> Result<LogicalId, DerivationError> {
        match self {
            Self::Arn(arn) => Ok(LogicalId::derive(last_segment(arn), "Topic")),
            Self::LogicalRef { name } => Ok(LogicalId::new(name.clone())),
            Self::AttributeRef { .. } | Self::ImportRef { .. } | Self::SubstitutionRef { .. } => {
                Err(DerivationError::TopicLogicalId(self.describe()))
            }
        }
    }

    /// Renders a short description of the handle for error messages.
    fn describe(&self) -> String {
        match self {
            Self::Arn(arn) => arn.clone(),
            Self::LogicalRef { name } => format!("Ref {name}"),
            Self::AttributeRef { parts } => format!("Fn::GetAtt {}", parts.join(".")),
            Self::ImportRef { .. } => "Fn::ImportValue".to_owned(),
            Self::SubstitutionRef { .. } => "Fn::Sub".to_owned(),
        }
    }
}

// ============================================================================
// SECTION: Queue Address
// ============================================================================

/// Address form of a resolved queue handle.
///
/// # Invariants
/// - `Url` values are fully-formed endpoint addresses; `Logical` values defer
///   resolution to the host at deployment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueueAddress {
    /// Fully-formed queue endpoint URL.
    Url(String),
    /// Logical reference resolved by the host.
    Logical {
        /// Logical id of the queue declaration.
        #[serde(rename = "Ref")]
        name: String,
    },
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Returns true iff `value` is a reference handle rather than an inline spec.
///
/// A string or an object exposing one of the four intrinsic reference keys
/// classifies as a reference; anything else (including an object carrying
/// inline attributes such as a name) does not. Total over any JSON value.
#[must_use]
pub fn is_reference(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Object(map) => REFERENCE_KEYS.iter().any(|key| map.contains_key(*key)),
        _ => false,
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the trailing colon-delimited segment of an ARN.
fn last_segment(arn: &str) -> &str {
    arn.rsplit(':').next().unwrap_or(arn)
}
