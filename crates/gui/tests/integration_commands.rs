//! Integration tests for the AgentCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use crossline_lib::command::{execute_json, execute_json_batch};
use crossline_lib::harness::TestHarness;

#[test]
fn test_command_draw() {
    let mut h = TestHarness::new();

    let json = r#"{"command": "draw", "from": {"x": 0.0, "y": 0.0}, "to": {"x": 10.0, "y": 10.0}}"#;

    let resp = execute_json(&mut h, json).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["index"], 0);
    assert_eq!(h.segment_count(), 1);
}

#[test]
fn test_command_crossing_via_json_batch() {
    let mut h = TestHarness::new();

    let batch = r#"[
        {"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 10, "y": 10}},
        {"command": "click", "x": 0, "y": 10},
        {"command": "move", "x": 10, "y": 0},
        {"command": "inspect"},
        {"command": "click", "x": 10, "y": 0},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h, batch).unwrap();
    assert_eq!(responses.len(), 6);
    assert!(responses.iter().all(|r| r.success));

    // Превью участвует в пересечениях
    let during = responses[3].data.as_ref().unwrap();
    assert_eq!(during["segment_count"], 1);
    assert_eq!(during["drawing"], true);
    assert_eq!(during["intersection_count"], 1);

    let after = responses[5].data.as_ref().unwrap();
    assert_eq!(after["segment_count"], 2);
    assert_eq!(after["drawing"], false);
    assert_eq!(after["intersections"][0]["x"], 5.0);
    assert_eq!(after["intersections"][0]["y"], 5.0);
}

#[test]
fn test_command_collinear_no_intersection() {
    let mut h = TestHarness::new();

    let batch = r#"[
        {"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 5, "y": 0}},
        {"command": "draw", "from": {"x": 10, "y": 0}, "to": {"x": 15, "y": 0}},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h, batch).unwrap();
    let data = responses[2].data.as_ref().unwrap();
    assert_eq!(data["segment_count"], 2);
    assert_eq!(data["intersection_count"], 0);
}

#[test]
fn test_command_cancel() {
    let mut h = TestHarness::new();

    let batch = r#"[
        {"command": "click", "x": 1, "y": 1},
        {"command": "move", "x": 8, "y": 3},
        {"command": "cancel"},
        {"command": "cancel"}
    ]"#;

    let responses = execute_json_batch(&mut h, batch).unwrap();
    assert_eq!(responses[2].data.as_ref().unwrap()["transition"], "cancelled");
    assert_eq!(responses[3].data.as_ref().unwrap()["transition"], "none");
    assert_eq!(h.segment_count(), 0);
}

#[test]
fn test_command_run_collapse() {
    let mut h = TestHarness::new();

    let batch = r#"[
        {"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 20, "y": 0}},
        {"command": "run_collapse", "max_frames": 100},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h, batch).unwrap();
    assert!(responses[1].success);
    assert_eq!(responses[1].data.as_ref().unwrap()["frames"], 2);

    let data = responses[2].data.as_ref().unwrap();
    assert_eq!(data["segment_count"], 0);
    assert_eq!(data["collapsing"], false);
}

#[test]
fn test_command_collapse_blocks_drawing() {
    let mut h = TestHarness::new();

    let batch = r#"[
        {"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 100, "y": 100}},
        {"command": "collapse"},
        {"command": "tick", "frames": 1},
        {"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 5, "y": 5}},
        {"command": "click", "x": 3, "y": 3},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h, batch).unwrap();
    assert!(!responses[3].success);
    assert_eq!(responses[4].data.as_ref().unwrap()["transition"], "none");

    let data = responses[5].data.as_ref().unwrap();
    assert_eq!(data["collapsing"], true);
    assert_eq!(data["collapse_frames"], 1);
    assert_eq!(data["segment_count"], 1);
}

#[test]
fn test_command_invalid_json_error() {
    let mut h = TestHarness::new();
    let err = execute_json(&mut h, "{not json").unwrap_err();
    assert!(err.contains("Invalid command JSON"));

    let err = execute_json_batch(&mut h, r#"{"command": "inspect"}"#).unwrap_err();
    assert!(err.contains("Invalid commands JSON"));
}

#[test]
fn test_command_export_and_reload() {
    let mut h = TestHarness::new();
    execute_json(
        &mut h,
        r#"{"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 10, "y": 10}}"#,
    )
    .unwrap();

    let resp = execute_json(&mut h, r#"{"command": "export"}"#).unwrap();
    let data = resp.data.unwrap();
    let drawing = data["drawing_json"].as_str().unwrap();

    let mut h2 = TestHarness::new();
    h2.load_json(drawing).unwrap();
    assert_eq!(h2.segment_count(), 1);
}

#[test]
fn test_command_clear() {
    let mut h = TestHarness::new();
    execute_json(
        &mut h,
        r#"{"command": "draw", "from": {"x": 0, "y": 0}, "to": {"x": 10, "y": 10}}"#,
    )
    .unwrap();

    let resp = execute_json(&mut h, r#"{"command": "clear"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.segment_count(), 0);
}
