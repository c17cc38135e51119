// crates/topic-bridge-config/src/validate.rs
// ============================================================================
// Module: Binding Validation
// Description: Structural and range validation of raw binding values.
// Purpose: Normalize raw event configuration into a typed binding, or fail
// with the first violated constraint.
// Dependencies: topic-bridge-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Validation walks the raw JSON value shape-first: each endpoint must match
//! either the reference-handle shape or the inline-spec shape (mutual
//! exclusivity is enforced by shape, not by flag), numeric tuning parameters
//! are range-checked, and unknown fields are rejected. Only after the walk
//! succeeds is the value deserialized into the typed model. A validation
//! failure is escalated to the caller and fails the whole build.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;
use topic_bridge_core::BindingConfig;
use topic_bridge_core::is_reference;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Prefix required of literal ARN handles.
pub const ARN_PREFIX: &str = "arn:aws";

/// Upper bound for `delaySeconds` (lower bound is zero).
pub const DELAY_SECONDS_MAX: u32 = 900;

/// Upper bound for `visibilityTimeout` (lower bound is zero).
pub const VISIBILITY_TIMEOUT_MAX: u32 = 43_200;

/// Lower bound for `maximumMessageSize` in bytes.
pub const MAXIMUM_MESSAGE_SIZE_MIN: u32 = 1_024;

/// Upper bound for `maximumMessageSize` in bytes.
pub const MAXIMUM_MESSAGE_SIZE_MAX: u32 = 262_144;

/// Lower bound for `messageRetentionPeriod` in seconds.
pub const MESSAGE_RETENTION_PERIOD_MIN: u32 = 60;

/// Upper bound for `messageRetentionPeriod` in seconds.
pub const MESSAGE_RETENTION_PERIOD_MAX: u32 = 1_209_600;

/// Lower bound for `batchSize`.
pub const BATCH_SIZE_MIN: u32 = 1;

/// Upper bound for `batchSize`.
pub const BATCH_SIZE_MAX: u32 = 10;

// ============================================================================
// SECTION: Accepted Fields
// ============================================================================

/// Fields accepted on the top-level binding object.
const BINDING_FIELDS: &[&str] = &["sns", "sqs", "rawMessageDelivery", "filterPolicy", "batchSize"];

/// Fields accepted on an inline topic spec.
const TOPIC_FIELDS: &[&str] = &["displayName", "topicName", "logicalId"];

/// Fields accepted on an inline queue spec.
const QUEUE_FIELDS: &[&str] = &[
    "queueName",
    "logicalId",
    "delaySeconds",
    "visibilityTimeout",
    "maximumMessageSize",
    "messageRetentionPeriod",
    "dlq",
];

/// Redrive threshold field required on dead-letter specs.
const MAX_RECEIVE_COUNT_FIELD: &str = "maxReceiveCount";

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Errors describing the first violated binding constraint.
///
/// # Invariants
/// - `field` values are dotted paths rooted at the binding object.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("`{field}` is required")]
    MissingField {
        /// Path of the absent field.
        field: String,
    },
    /// A field does not match its accepted shape.
    #[error("`{field}` must be {expected}")]
    InvalidShape {
        /// Path of the offending field.
        field: String,
        /// Description of the accepted shape.
        expected: &'static str,
    },
    /// A numeric field is outside its accepted range.
    #[error("`{field}` must be between {min} and {max}, got {actual}")]
    OutOfRange {
        /// Path of the offending field.
        field: String,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
        /// Value supplied by the configuration.
        actual: i64,
    },
    /// A threshold field is zero, negative, or not an integer.
    #[error("`{field}` must be a positive integer")]
    NotPositive {
        /// Path of the offending field.
        field: String,
    },
    /// A field outside the accepted schema is present.
    #[error("`{field}` is not an accepted field")]
    UnknownField {
        /// Path of the unexpected field.
        field: String,
    },
    /// The value passed structural checks but failed normalization.
    #[error("binding does not match the accepted shape: {0}")]
    Shape(String),
}

// ============================================================================
// SECTION: Binding Validation
// ============================================================================

/// Validates and normalizes a raw binding value.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first violated constraint; the
/// caller treats any error as fatal to the whole build.
pub fn validate_binding(raw: &Value) -> Result<BindingConfig, ValidationError> {
    let Some(binding) = raw.as_object() else {
        return Err(ValidationError::InvalidShape {
            field: "snsToSqs".to_owned(),
            expected: "an object",
        });
    };
    reject_unknown_fields(binding, BINDING_FIELDS, "")?;

    let sns = require_field(binding, "sns")?;
    validate_topic_endpoint(sns)?;
    let sqs = require_field(binding, "sqs")?;
    validate_queue_endpoint(sqs)?;

    if let Some(flag) = binding.get("rawMessageDelivery")
        && !flag.is_boolean()
    {
        return Err(ValidationError::InvalidShape {
            field: "rawMessageDelivery".to_owned(),
            expected: "a boolean",
        });
    }
    if let Some(filter) = binding.get("filterPolicy")
        && !filter.is_object()
    {
        return Err(ValidationError::InvalidShape {
            field: "filterPolicy".to_owned(),
            expected: "an object",
        });
    }
    check_integer_range(binding, "batchSize", "", BATCH_SIZE_MIN, BATCH_SIZE_MAX)?;

    serde_json::from_value(raw.clone()).map_err(|err| ValidationError::Shape(err.to_string()))
}

// ============================================================================
// SECTION: Endpoint Validation
// ============================================================================

/// Validates the topic endpoint as a handle or an inline topic spec.
fn validate_topic_endpoint(value: &Value) -> Result<(), ValidationError> {
    if is_reference(value) {
        return validate_handle(value, "sns");
    }
    let Some(spec) = value.as_object() else {
        return Err(ValidationError::InvalidShape {
            field: "sns".to_owned(),
            expected: "a resource reference or an inline topic spec",
        });
    };
    reject_unknown_fields(spec, TOPIC_FIELDS, "sns")?;
    require_string(spec, "displayName", "sns.displayName")?;
    optional_string(spec, "topicName", "sns.topicName")?;
    optional_string(spec, "logicalId", "sns.logicalId")?;
    Ok(())
}

/// Validates the queue endpoint as a handle or an inline queue spec.
fn validate_queue_endpoint(value: &Value) -> Result<(), ValidationError> {
    if is_reference(value) {
        return validate_handle(value, "sqs");
    }
    validate_queue_spec(value, "sqs", false)
}

/// Validates an inline queue spec, recursing into dead-letter specs.
///
/// Dead-letter specs share the queue shape and additionally require a
/// positive `maxReceiveCount`. The shape recurses without depth limit;
/// synthesis decides how many levels are materialized.
fn validate_queue_spec(value: &Value, path: &str, dead_letter: bool) -> Result<(), ValidationError> {
    let Some(spec) = value.as_object() else {
        return Err(ValidationError::InvalidShape {
            field: path.to_owned(),
            expected: "a resource reference or an inline queue spec",
        });
    };
    for key in spec.keys() {
        let accepted = QUEUE_FIELDS.contains(&key.as_str())
            || (dead_letter && key == MAX_RECEIVE_COUNT_FIELD);
        if !accepted {
            return Err(ValidationError::UnknownField { field: format!("{path}.{key}") });
        }
    }
    require_string(spec, "queueName", &format!("{path}.queueName"))?;
    optional_string(spec, "logicalId", &format!("{path}.logicalId"))?;
    check_integer_range(spec, "delaySeconds", path, 0, DELAY_SECONDS_MAX)?;
    check_integer_range(spec, "visibilityTimeout", path, 0, VISIBILITY_TIMEOUT_MAX)?;
    check_integer_range(
        spec,
        "maximumMessageSize",
        path,
        MAXIMUM_MESSAGE_SIZE_MIN,
        MAXIMUM_MESSAGE_SIZE_MAX,
    )?;
    check_integer_range(
        spec,
        "messageRetentionPeriod",
        path,
        MESSAGE_RETENTION_PERIOD_MIN,
        MESSAGE_RETENTION_PERIOD_MAX,
    )?;

    if dead_letter {
        let field = format!("{path}.{MAX_RECEIVE_COUNT_FIELD}");
        let Some(count) = spec.get(MAX_RECEIVE_COUNT_FIELD) else {
            return Err(ValidationError::MissingField { field });
        };
        if count.as_u64().is_none_or(|threshold| threshold == 0) {
            return Err(ValidationError::NotPositive { field });
        }
    }

    if let Some(dlq) = spec.get("dlq") {
        validate_queue_spec(dlq, &format!("{path}.dlq"), true)?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Handle Validation
// ============================================================================

/// Validates the payload shape of a classified reference handle.
fn validate_handle(value: &Value, field: &str) -> Result<(), ValidationError> {
    match value {
        Value::String(arn) => {
            if arn.starts_with(ARN_PREFIX) {
                Ok(())
            } else {
                Err(ValidationError::InvalidShape {
                    field: field.to_owned(),
                    expected: "a fully-qualified ARN string",
                })
            }
        }
        Value::Object(map) => validate_reference_object(map, field),
        _ => Err(ValidationError::InvalidShape {
            field: field.to_owned(),
            expected: "a resource reference",
        }),
    }
}

/// Validates the per-kind payload of an intrinsic reference object.
fn validate_reference_object(map: &Map<String, Value>, field: &str) -> Result<(), ValidationError> {
    if let Some(name) = map.get("Ref") {
        return if name.is_string() {
            Ok(())
        } else {
            Err(ValidationError::InvalidShape {
                field: format!("{field}.Ref"),
                expected: "a string",
            })
        };
    }
    if let Some(parts) = map.get("Fn::GetAtt") {
        let accepted = parts
            .as_array()
            .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_string));
        return if accepted {
            Ok(())
        } else {
            Err(ValidationError::InvalidShape {
                field: format!("{field}.Fn::GetAtt"),
                expected: "a non-empty array of strings",
            })
        };
    }
    if let Some(import) = map.get("Fn::ImportValue") {
        return if import.is_string() || import.is_object() {
            Ok(())
        } else {
            Err(ValidationError::InvalidShape {
                field: format!("{field}.Fn::ImportValue"),
                expected: "a string or an object",
            })
        };
    }
    if let Some(template) = map.get("Fn::Sub") {
        return if template.is_string() || template.is_array() {
            Ok(())
        } else {
            Err(ValidationError::InvalidShape {
                field: format!("{field}.Fn::Sub"),
                expected: "a string or an array",
            })
        };
    }
    Err(ValidationError::InvalidShape {
        field: field.to_owned(),
        expected: "a resource reference",
    })
}

// ============================================================================
// SECTION: Field Helpers
// ============================================================================

/// Rejects any key of `map` not listed in `accepted`.
fn reject_unknown_fields(
    map: &Map<String, Value>,
    accepted: &[&str],
    path: &str,
) -> Result<(), ValidationError> {
    for key in map.keys() {
        if !accepted.contains(&key.as_str()) {
            return Err(ValidationError::UnknownField { field: join_path(path, key) });
        }
    }
    Ok(())
}

/// Returns the field keyed by `key`, or a missing-field error.
fn require_field<'a>(
    map: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    map.get(key).ok_or_else(|| ValidationError::MissingField { field: key.to_owned() })
}

/// Requires `key` to be present and a string.
fn require_string(
    map: &Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<(), ValidationError> {
    match map.get(key) {
        None => Err(ValidationError::MissingField { field: field.to_owned() }),
        Some(value) if value.is_string() => Ok(()),
        Some(_) => {
            Err(ValidationError::InvalidShape { field: field.to_owned(), expected: "a string" })
        }
    }
}

/// Requires `key`, when present, to be a string.
fn optional_string(
    map: &Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<(), ValidationError> {
    match map.get(key) {
        None => Ok(()),
        Some(value) if value.is_string() => Ok(()),
        Some(_) => {
            Err(ValidationError::InvalidShape { field: field.to_owned(), expected: "a string" })
        }
    }
}

/// Requires `key`, when present, to be an integer within `min..=max`.
fn check_integer_range(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    let Some(value) = map.get(key) else {
        return Ok(());
    };
    let field = join_path(path, key);
    let Some(actual) = value.as_i64() else {
        return Err(ValidationError::InvalidShape { field, expected: "an integer" });
    };
    if actual < i64::from(min) || actual > i64::from(max) {
        return Err(ValidationError::OutOfRange { field, min, max, actual });
    }
    Ok(())
}

/// Joins a parent path and a key into a dotted field path.
fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_owned() } else { format!("{path}.{key}") }
}
