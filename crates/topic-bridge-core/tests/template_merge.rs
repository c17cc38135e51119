// crates/topic-bridge-core/tests/template_merge.rs
// ============================================================================
// Module: Template Merge Tests
// Description: Tests for deep-merge semantics of the resource graph.
// ============================================================================
//! ## Overview
//! Validates that merged declarations preserve sibling keys, that scalar and
//! array leaves are overwritten, and that entries are created when absent.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use serde_json::json;
use topic_bridge_core::LogicalId;
use topic_bridge_core::Template;

#[test]
fn merging_creates_absent_entries() {
    let mut template = Template::new();
    let id = LogicalId::new("MyQueue");
    template.merge(&id, json!({"Type": "AWS::SQS::Queue"}));
    assert_eq!(template.len(), 1);
    assert_eq!(template.get(&id), Some(&json!({"Type": "AWS::SQS::Queue"})));
}

#[test]
fn re_declaring_an_identifier_preserves_sibling_properties() {
    let mut template = Template::new();
    let id = LogicalId::new("MyQueue");
    template.merge(
        &id,
        json!({
            "Type": "AWS::SQS::Queue",
            "Properties": {"QueueName": "my-queue", "DelaySeconds": 30}
        }),
    );
    template.merge(
        &id,
        json!({
            "Properties": {
                "RedrivePolicy": {
                    "maxReceiveCount": 3,
                    "deadLetterTargetArn": {"Fn::GetAtt": ["MyDLQ", "Arn"]}
                }
            }
        }),
    );

    assert_eq!(
        template.get(&id),
        Some(&json!({
            "Type": "AWS::SQS::Queue",
            "Properties": {
                "QueueName": "my-queue",
                "DelaySeconds": 30,
                "RedrivePolicy": {
                    "maxReceiveCount": 3,
                    "deadLetterTargetArn": {"Fn::GetAtt": ["MyDLQ", "Arn"]}
                }
            }
        }))
    );
}

#[test]
fn scalar_leaves_are_overwritten_by_the_last_writer() {
    let mut template = Template::new();
    let id = LogicalId::new("MyQueue");
    template.merge(&id, json!({"Properties": {"DelaySeconds": 30}}));
    template.merge(&id, json!({"Properties": {"DelaySeconds": 60}}));
    assert_eq!(template.get(&id), Some(&json!({"Properties": {"DelaySeconds": 60}})));
}

#[test]
fn array_leaves_are_replaced_rather_than_concatenated() {
    let mut template = Template::new();
    let id = LogicalId::new("MyPolicy");
    template.merge(&id, json!({"Properties": {"Queues": [{"Ref": "A"}]}}));
    template.merge(&id, json!({"Properties": {"Queues": [{"Ref": "B"}]}}));
    assert_eq!(
        template.get(&id),
        Some(&json!({"Properties": {"Queues": [{"Ref": "B"}]}}))
    );
}

#[test]
fn merging_one_entry_leaves_other_entries_untouched() {
    let mut template = Template::new();
    let queue = LogicalId::new("MyQueue");
    let topic = LogicalId::new("MyTopic");
    template.merge(&queue, json!({"Type": "AWS::SQS::Queue"}));
    template.merge(&topic, json!({"Type": "AWS::SNS::Topic"}));
    template.merge(&queue, json!({"Properties": {"QueueName": "q"}}));

    assert_eq!(template.len(), 2);
    assert_eq!(template.get(&topic), Some(&json!({"Type": "AWS::SNS::Topic"})));
}

#[test]
fn an_empty_template_reports_empty() {
    let template = Template::new();
    assert!(template.is_empty());
    assert_eq!(template.resources().len(), 0);
}
