#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cmdtree_core::errors::CompileError;
use cmdtree_core::logging_facility::test_capture::init_test_capture;
use cmdtree_core::{compile, log_op_end, log_op_error, log_op_start, CommandResource};
use cmdtree_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DESCRIPTOR_COUNT, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_NAME_PREFIX, FIELD_REMOVE_CONTAINER, FIELD_REQUEST_ID,
};
use cmdtree_core_types::{RequestContext, RequestId};
use common::{lab_config, observe};

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_1";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 42);

    capture.assert_event_exists(op_name, EVENT_START);
    let end_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1);
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_2";

    let err = CompileError::EmptyPath {
        op: "invert".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_INVARIANT_VIOLATION"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("InvariantViolation"));
}

#[test]
fn test_compile_logs_start_and_end_with_request_id() {
    let capture = init_test_capture();
    let ctx = RequestContext::with_request_id(RequestId::from_string(
        "compile-logging-ok".to_string(),
    ));
    let resource = CommandResource::from_json_str(
        r#"{"metadata": {"name": "r"}, "spec": {"endpoint": "h",
            "cmds": {"a": {"b": {}}, "c": {}}}}"#,
    )
    .unwrap();

    compile(&resource, &lab_config(), observe(), &ctx).unwrap();

    let events = capture.events_with_field(FIELD_REQUEST_ID, "compile-logging-ok");
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(starts, 1);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_DESCRIPTOR_COUNT), Some("2"));
}

#[test]
fn test_compile_failure_logs_single_end_error() {
    let capture = init_test_capture();
    let ctx = RequestContext::with_request_id(RequestId::from_string(
        "compile-logging-err".to_string(),
    ));
    let resource = CommandResource::from_json_str(
        r#"{"metadata": {"name": "r"}, "spec": {"endpoint": "h", "cmds": {"a": []}}}"#,
    )
    .unwrap();

    assert!(compile(&resource, &lab_config(), observe(), &ctx).is_err());

    let count = capture.count_events(|e| {
        e.field(FIELD_REQUEST_ID) == Some("compile-logging-err")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
    });
    assert_eq!(count, 1);

    let errors = capture.events_with_field(FIELD_REQUEST_ID, "compile-logging-err");
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_INVALID_INPUT")));
}

#[test]
fn test_compile_start_carries_compilation_inputs() {
    let capture = init_test_capture();
    let ctx = RequestContext::with_request_id(RequestId::from_string(
        "compile-logging-inputs".to_string(),
    ));
    let resource = CommandResource::from_json_str(
        r#"{"metadata": {"name": "xr-7"}, "spec": {"endpoint": "h", "removeContainer": true,
            "cmds": {"hostname r1": {}}}}"#,
    )
    .unwrap();

    compile(&resource, &lab_config(), observe(), &ctx).unwrap();

    let starts: Vec<_> = capture
        .events_with_field(FIELD_REQUEST_ID, "compile-logging-inputs")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field(FIELD_NAME_PREFIX), Some("xr-7"));
    assert_eq!(starts[0].field(FIELD_REMOVE_CONTAINER), Some("true"));
}
