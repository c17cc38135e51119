// crates/topic-bridge-core/tests/handle_unit.rs
// ============================================================================
// Module: Resource Handle Tests
// Description: Tests for classification, address derivation, and id extraction.
// ============================================================================
//! ## Overview
//! Validates that every handle shape classifies correctly, that queue
//! addresses and logical ids derive from the supported shapes, and that
//! unsupported shapes surface as typed derivation errors.

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
use topic_bridge_core::DerivationError;
use topic_bridge_core::LogicalId;
use topic_bridge_core::QueueAddress;
use topic_bridge_core::ResourceHandle;
use topic_bridge_core::is_reference;

// ============================================================================
// SECTION: Classification
// ============================================================================

#[test]
fn strings_classify_as_references() {
    assert!(is_reference(&json!("arn:aws:sqs:us-east-1:12345:my-queue")));
}

#[test]
fn intrinsic_objects_classify_as_references() {
    assert!(is_reference(&json!({"Ref": "MyQueue"})));
    assert!(is_reference(&json!({"Fn::GetAtt": ["MyQueue", "Arn"]})));
    assert!(is_reference(&json!({"Fn::ImportValue": "MyExportedQueue"})));
    assert!(is_reference(&json!({"Fn::Sub": "arn:aws:sqs:${AWS::Region}:${AWS::AccountId}:q"})));
}

#[test]
fn inline_specs_do_not_classify_as_references() {
    assert!(!is_reference(&json!({"queueName": "my-queue"})));
    assert!(!is_reference(&json!({"displayName": "orders", "topicName": "orders"})));
}

#[test]
fn non_reference_values_do_not_classify() {
    assert!(!is_reference(&json!(42)));
    assert!(!is_reference(&json!([42])));
    assert!(!is_reference(&json!(true)));
    assert!(!is_reference(&json!(null)));
}

// ============================================================================
// SECTION: Wire Forms
// ============================================================================

#[test]
fn handles_deserialize_from_their_wire_shorthand() {
    let handle: ResourceHandle = serde_json::from_value(json!({"Ref": "MyTopic"})).unwrap();
    assert_eq!(handle, ResourceHandle::LogicalRef { name: "MyTopic".to_owned() });

    let handle: ResourceHandle =
        serde_json::from_value(json!({"Fn::GetAtt": ["MyQueue", "Arn"]})).unwrap();
    assert_eq!(
        handle,
        ResourceHandle::AttributeRef { parts: vec!["MyQueue".to_owned(), "Arn".to_owned()] }
    );

    let handle: ResourceHandle =
        serde_json::from_value(json!("arn:aws:sns:us-east-1:12345:my-topic")).unwrap();
    assert_eq!(handle, ResourceHandle::arn("arn:aws:sns:us-east-1:12345:my-topic"));
}

#[test]
fn handles_serialize_back_to_their_wire_shorthand() {
    let id = LogicalId::new("MyQueue");
    let value = serde_json::to_value(ResourceHandle::attribute_ref(&id, "Arn")).unwrap();
    assert_eq!(value, json!({"Fn::GetAtt": ["MyQueue", "Arn"]}));

    let value = serde_json::to_value(ResourceHandle::logical_ref(&id)).unwrap();
    assert_eq!(value, json!({"Ref": "MyQueue"}));
}

// ============================================================================
// SECTION: Queue Address Derivation
// ============================================================================

#[test]
fn literal_arn_decomposes_into_an_endpoint_url() {
    let handle = ResourceHandle::arn("arn:aws:sqs:us-east-1:12345:my-queue");
    let address = handle.queue_address().unwrap();
    assert_eq!(
        address,
        QueueAddress::Url("https://sqs.us-east-1.amazonaws.com/12345/my-queue".to_owned())
    );
}

#[test]
fn attribute_handle_yields_a_logical_reference() {
    let id = LogicalId::new("MyQueue");
    let handle = ResourceHandle::attribute_ref(&id, "Arn");
    let address = handle.queue_address().unwrap();
    assert_eq!(address, QueueAddress::Logical { name: "MyQueue".to_owned() });
    assert_eq!(serde_json::to_value(&address).unwrap(), json!({"Ref": "MyQueue"}));
}

#[test]
fn malformed_literal_arn_is_an_address_error() {
    let handle = ResourceHandle::arn("arn:aws:sqs:us-east-1:my-queue");
    assert!(matches!(handle.queue_address(), Err(DerivationError::QueueAddress(_))));
}

#[test]
fn import_and_substitution_handles_cannot_become_addresses() {
    let import: ResourceHandle =
        serde_json::from_value(json!({"Fn::ImportValue": "MyExportedQueue"})).unwrap();
    assert!(matches!(import.queue_address(), Err(DerivationError::QueueAddress(_))));

    let substitution: ResourceHandle =
        serde_json::from_value(json!({"Fn::Sub": "arn:${AWS::Region}"})).unwrap();
    assert!(matches!(substitution.queue_address(), Err(DerivationError::QueueAddress(_))));
}

#[test]
fn logical_ref_queue_handle_cannot_become_an_address() {
    let handle = ResourceHandle::LogicalRef { name: "MyQueue".to_owned() };
    assert!(matches!(handle.queue_address(), Err(DerivationError::QueueAddress(_))));
}

// ============================================================================
// SECTION: Logical Id Extraction
// ============================================================================

#[test]
fn queue_id_from_literal_arn_re_derives_the_trailing_segment() {
    let handle = ResourceHandle::arn("arn:aws:sqs:us-east-1:12345:my-queue");
    assert_eq!(handle.queue_logical_id().unwrap(), LogicalId::new("MyDashQueueQueue"));
}

#[test]
fn queue_id_from_attribute_handle_is_its_head() {
    let id = LogicalId::new("MyQueue");
    let handle = ResourceHandle::attribute_ref(&id, "Arn");
    assert_eq!(handle.queue_logical_id().unwrap(), id);
}

#[test]
fn queue_id_from_logical_ref_is_an_error() {
    let handle = ResourceHandle::LogicalRef { name: "MyQueue".to_owned() };
    assert!(matches!(handle.queue_logical_id(), Err(DerivationError::QueueLogicalId(_))));
}

#[test]
fn topic_id_from_logical_ref_is_its_carried_name() {
    let handle = ResourceHandle::LogicalRef { name: "MyTopic".to_owned() };
    assert_eq!(handle.topic_logical_id().unwrap(), LogicalId::new("MyTopic"));
}

#[test]
fn topic_id_from_literal_arn_re_derives_the_trailing_segment() {
    let handle = ResourceHandle::arn("arn:aws:sns:us-east-1:12345:my-topic");
    assert_eq!(handle.topic_logical_id().unwrap(), LogicalId::new("MyDashTopicTopic"));
}

#[test]
fn topic_id_from_import_handle_is_an_error() {
    let handle: ResourceHandle =
        serde_json::from_value(json!({"Fn::ImportValue": "MyExportedTopic"})).unwrap();
    assert!(matches!(handle.topic_logical_id(), Err(DerivationError::TopicLogicalId(_))));
}

#[test]
fn derivation_errors_render_the_offending_handle() {
    let handle = ResourceHandle::LogicalRef { name: "MyQueue".to_owned() };
    let Err(error) = handle.queue_address() else {
        panic!("expected a derivation error");
    };
    assert!(error.to_string().contains("queue URL"));
    assert!(error.to_string().contains("MyQueue"));
}
