// crates/topic-bridge-config/src/schema.rs
// ============================================================================
// Module: Binding Schema
// Description: JSON Schema document for the accepted binding shape.
// Purpose: Publish the validation contract for host tooling and docs.
// Dependencies: crate::validate, serde_json
// ============================================================================

//! ## Overview
//! The accepted `snsToSqs` binding shape, published as a JSON Schema
//! (Draft 2020-12) document. The schema mirrors [`crate::validate`] — the
//! same endpoint alternatives, numeric ranges, and closed field sets — and
//! the agreement between the two is covered by tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::validate::ARN_PREFIX;
use crate::validate::BATCH_SIZE_MAX;
use crate::validate::BATCH_SIZE_MIN;
use crate::validate::DELAY_SECONDS_MAX;
use crate::validate::MAXIMUM_MESSAGE_SIZE_MAX;
use crate::validate::MAXIMUM_MESSAGE_SIZE_MIN;
use crate::validate::MESSAGE_RETENTION_PERIOD_MAX;
use crate::validate::MESSAGE_RETENTION_PERIOD_MIN;
use crate::validate::VISIBILITY_TIMEOUT_MAX;

// ============================================================================
// SECTION: Schema Document
// ============================================================================

/// Returns the accepted binding shape as a JSON Schema document.
#[must_use]
pub fn binding_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "snsToSqs binding",
        "type": "object",
        "properties": {
            "sns": {
                "anyOf": [
                    { "$ref": "#/$defs/resourceHandle" },
                    { "$ref": "#/$defs/topicSpec" }
                ]
            },
            "sqs": {
                "anyOf": [
                    { "$ref": "#/$defs/resourceHandle" },
                    { "$ref": "#/$defs/queueSpec" }
                ]
            },
            "rawMessageDelivery": { "type": "boolean" },
            "filterPolicy": { "type": "object" },
            "batchSize": {
                "type": "integer",
                "minimum": BATCH_SIZE_MIN,
                "maximum": BATCH_SIZE_MAX
            }
        },
        "required": ["sns", "sqs"],
        "additionalProperties": false,
        "$defs": {
            "resourceHandle": {
                "anyOf": [
                    { "type": "string", "pattern": format!("^{ARN_PREFIX}") },
                    {
                        "type": "object",
                        "properties": { "Ref": { "type": "string" } },
                        "required": ["Ref"],
                        "additionalProperties": false
                    },
                    {
                        "type": "object",
                        "properties": {
                            "Fn::GetAtt": {
                                "type": "array",
                                "items": { "type": "string" },
                                "minItems": 1
                            }
                        },
                        "required": ["Fn::GetAtt"],
                        "additionalProperties": false
                    },
                    {
                        "type": "object",
                        "properties": {
                            "Fn::ImportValue": {
                                "anyOf": [{ "type": "string" }, { "type": "object" }]
                            }
                        },
                        "required": ["Fn::ImportValue"],
                        "additionalProperties": false
                    },
                    {
                        "type": "object",
                        "properties": {
                            "Fn::Sub": {
                                "anyOf": [{ "type": "string" }, { "type": "array" }]
                            }
                        },
                        "required": ["Fn::Sub"],
                        "additionalProperties": false
                    }
                ]
            },
            "topicSpec": {
                "type": "object",
                "properties": {
                    "displayName": { "type": "string" },
                    "topicName": { "type": "string" },
                    "logicalId": { "type": "string" }
                },
                "required": ["displayName"],
                "additionalProperties": false
            },
            "delaySeconds": {
                "type": "integer",
                "minimum": 0,
                "maximum": DELAY_SECONDS_MAX
            },
            "visibilityTimeout": {
                "type": "integer",
                "minimum": 0,
                "maximum": VISIBILITY_TIMEOUT_MAX
            },
            "maximumMessageSize": {
                "type": "integer",
                "minimum": MAXIMUM_MESSAGE_SIZE_MIN,
                "maximum": MAXIMUM_MESSAGE_SIZE_MAX
            },
            "messageRetentionPeriod": {
                "type": "integer",
                "minimum": MESSAGE_RETENTION_PERIOD_MIN,
                "maximum": MESSAGE_RETENTION_PERIOD_MAX
            },
            "queueSpec": {
                "type": "object",
                "properties": {
                    "queueName": { "type": "string" },
                    "logicalId": { "type": "string" },
                    "delaySeconds": { "$ref": "#/$defs/delaySeconds" },
                    "visibilityTimeout": { "$ref": "#/$defs/visibilityTimeout" },
                    "maximumMessageSize": { "$ref": "#/$defs/maximumMessageSize" },
                    "messageRetentionPeriod": { "$ref": "#/$defs/messageRetentionPeriod" },
                    "dlq": { "$ref": "#/$defs/deadLetterSpec" }
                },
                "required": ["queueName"],
                "additionalProperties": false
            },
            "deadLetterSpec": {
                "type": "object",
                "properties": {
                    "queueName": { "type": "string" },
                    "logicalId": { "type": "string" },
                    "delaySeconds": { "$ref": "#/$defs/delaySeconds" },
                    "visibilityTimeout": { "$ref": "#/$defs/visibilityTimeout" },
                    "maximumMessageSize": { "$ref": "#/$defs/maximumMessageSize" },
                    "messageRetentionPeriod": { "$ref": "#/$defs/messageRetentionPeriod" },
                    "dlq": { "$ref": "#/$defs/deadLetterSpec" },
                    "maxReceiveCount": { "type": "integer", "minimum": 1 }
                },
                "required": ["queueName", "maxReceiveCount"],
                "additionalProperties": false
            }
        }
    })
}
