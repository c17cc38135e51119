// crates/topic-bridge-core/tests/logical_ids.rs
// ============================================================================
// Module: Logical Identifier Tests
// Description: Tests for deterministic identifier derivation.
// ============================================================================
//! ## Overview
//! Validates derivation normalization, determinism, and override handling.

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

use topic_bridge_core::LogicalId;

#[test]
fn derivation_is_deterministic() {
    let first = LogicalId::derive("my-queue", "Queue");
    let second = LogicalId::derive("my-queue", "Queue");
    assert_eq!(first, second);
}

#[test]
fn dashes_become_dash_tokens() {
    let id = LogicalId::derive("my-queue", "Queue");
    assert_eq!(id.as_str(), "MyDashQueueQueue");
}

#[test]
fn underscores_become_underscore_tokens() {
    let id = LogicalId::derive("my_queue", "Queue");
    assert_eq!(id.as_str(), "MyUnderscoreQueueQueue");
}

#[test]
fn dash_and_underscore_names_derive_distinct_ids() {
    assert_ne!(
        LogicalId::derive("my-queue", "Queue"),
        LogicalId::derive("my_queue", "Queue")
    );
}

#[test]
fn first_letters_of_name_and_suffix_are_capitalized() {
    let id = LogicalId::derive("notifications", "queue");
    assert_eq!(id.as_str(), "NotificationsQueue");
}

#[test]
fn camel_case_names_keep_their_interior_casing() {
    let id = LogicalId::derive("topicName", "Topic");
    assert_eq!(id.as_str(), "TopicNameTopic");
}

#[test]
fn mixed_separators_normalize_in_order() {
    let id = LogicalId::derive("a-b_c", "Topic");
    assert_eq!(id.as_str(), "ADashBUnderscoreCTopic");
}

#[test]
fn override_values_are_used_verbatim() {
    let id = LogicalId::new("my-raw_id");
    assert_eq!(id.as_str(), "my-raw_id");
}

#[test]
fn display_matches_inner_value() {
    let id = LogicalId::derive("orders", "Queue");
    assert_eq!(id.to_string(), "OrdersQueue");
}
