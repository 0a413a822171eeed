#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use docdb_driver_faults::{
    Fault, FaultKind, is_node_shutting_down_error, is_resumable_error, is_retryable_error,
    is_retryable_write_error, is_sdam_unrecoverable_error,
};
use serde_json::{Map, Value};

#[derive(serde::Deserialize)]
struct ReplyCase {
    name: String,
    reply: Map<String, Value>,
    retryable: bool,
    retryable_write: bool,
    node_shutting_down: bool,
    sdam_unrecoverable: bool,
    resumable_wire_4: bool,
    resumable_wire_9: bool,
}

#[derive(serde::Deserialize)]
struct WriteConcernCase {
    name: String,
    reply: Map<String, Value>,
    outer_code: Option<i64>,
    retryable_write: bool,
}

fn load_fixture<T: serde::de::DeserializeOwned>(filename: &str) -> Vec<T> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

#[test]
fn classification_matrix_from_fixture() {
    for case in load_fixture::<ReplyCase>("server_replies.json") {
        let fault = Fault::from_reply(FaultKind::Server, &case.reply);

        assert_eq!(
            is_retryable_error(&fault),
            case.retryable,
            "{}: is_retryable_error",
            case.name
        );
        assert_eq!(
            is_retryable_write_error(&fault),
            case.retryable_write,
            "{}: is_retryable_write_error",
            case.name
        );
        assert_eq!(
            is_node_shutting_down_error(&fault),
            case.node_shutting_down,
            "{}: is_node_shutting_down_error",
            case.name
        );
        assert_eq!(
            is_sdam_unrecoverable_error(Some(&fault)),
            case.sdam_unrecoverable,
            "{}: is_sdam_unrecoverable_error",
            case.name
        );
        assert_eq!(
            is_resumable_error(&fault, Some(4)),
            case.resumable_wire_4,
            "{}: is_resumable_error at wire version 4",
            case.name
        );
        assert_eq!(
            is_resumable_error(&fault, Some(9)),
            case.resumable_wire_9,
            "{}: is_resumable_error at wire version 9",
            case.name
        );
    }
}

#[test]
fn reply_labels_become_fault_labels() {
    let cases = load_fixture::<ReplyCase>("server_replies.json");
    let labeled = cases
        .iter()
        .find(|c| c.name == "shutdown_in_progress_with_retryable_label")
        .unwrap();

    let fault = Fault::from_reply(FaultKind::Server, &labeled.reply);
    assert!(fault.has_label("RetryableWriteError"));
    assert_eq!(fault.labels().count(), 1);
    assert_eq!(fault.numeric_code(), Some(91));
}

#[test]
fn topology_version_survives_reply_construction() {
    let cases = load_fixture::<ReplyCase>("server_replies.json");
    let stepdown = cases
        .iter()
        .find(|c| c.name == "primary_stepdown_with_topology_version")
        .unwrap();

    let fault = Fault::from_reply(FaultKind::Server, &stepdown.reply);
    assert_eq!(
        fault
            .topology_version()
            .and_then(|v| v.get("counter"))
            .and_then(Value::as_i64),
        Some(5)
    );
    assert_eq!(fault.code_name(), Some("PrimarySteppedDown"));
}

#[test]
fn write_concern_cases_from_fixture() {
    for case in load_fixture::<WriteConcernCase>("write_concern_replies.json") {
        let fault = Fault::write_concern(&case.reply);

        assert_eq!(fault.kind(), FaultKind::WriteConcern, "{}", case.name);
        assert_eq!(fault.numeric_code(), case.outer_code, "{}", case.name);
        assert_eq!(
            is_retryable_write_error(&fault),
            case.retryable_write,
            "{}: is_retryable_write_error",
            case.name
        );

        let sanitized = fault.sanitized_result().unwrap();
        assert_eq!(
            sanitized.get("ok"),
            Some(&Value::from(1)),
            "{}: sanitized ok",
            case.name
        );
        for removed in ["errmsg", "code", "codeName"] {
            assert!(
                !sanitized.contains_key(removed),
                "{}: sanitized result still has {removed}",
                case.name
            );
        }
    }
}

#[test]
fn absent_fault_is_unrecoverable() {
    assert!(is_sdam_unrecoverable_error(None));
}
