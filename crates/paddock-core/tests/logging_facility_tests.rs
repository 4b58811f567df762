#![allow(clippy::unwrap_used, clippy::expect_used)]

use paddock_core::errors::{ExError, ExErrorKind};
use paddock_core::logging_facility::test_capture::init_test_capture;
use paddock_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use paddock_core::{log_op_end, log_op_error, log_op_start, PaddockError};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, race_id = 7);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].fields.get("race_id"), Some(&"7".to_string()));
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42_u64);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PaddockError::RaceNotFound { race_id: 999 };
    log_op_error!(op_name, err, duration_ms = 10_u64);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        events[0].fields.get("err_code"),
        Some(&"ERR_NOT_FOUND".to_string())
    );
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("no such table: races");
    log_op_error!(op_name, err, duration_ms = 0_u64);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_PERSISTENCE")
    });
    assert_eq!(errors, 1);
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_5";

    log_op_start!(op_name);

    let events = capture.events_for_op(op_name);
    assert_eq!(
        events[0].component.as_deref(),
        Some("logging_facility_tests")
    );
}
