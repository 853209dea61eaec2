//! Debug domain: tests for trace recording and the info overlay text.

use bevy::prelude::Vec2;

use super::systems::format_player_info;
use super::{DebugState, TraceRecorder};
use crate::movement::{Body, MovementState};

fn body_at(x: f32, y: f32) -> Body {
    let mut body = Body::new(Vec2::new(x, y), Vec2::new(60.0, 120.0));
    body.velocity = Vec2::new(120.0, -40.0);
    body
}

#[test]
fn test_debug_state_defaults_off() {
    let state = DebugState::default();
    assert!(!state.show_info);
    assert!(!state.show_colliders);
    assert!(state.recording.is_none());
    assert_eq!(state.traces_written, 0);
}

#[test]
fn test_recorder_numbers_frames_in_order() {
    let mut recorder = TraceRecorder::default();
    let state = MovementState {
        on_floor: true,
        ..MovementState::default()
    };

    recorder.record(0.016, &body_at(1.0, 2.0), &state);
    recorder.record(0.017, &body_at(3.0, 4.0), &state);

    let samples = recorder.samples();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].frame, 0);
    assert_eq!(samples[1].frame, 1);
    assert_eq!(samples[1].x, 3.0);
    assert_eq!(samples[1].vy, -40.0);
    assert!(samples[0].on_floor);
}

#[test]
fn test_trace_json_has_one_object_per_sample() {
    let mut recorder = TraceRecorder::default();
    let state = MovementState {
        dashing: true,
        ..MovementState::default()
    };
    recorder.record(0.5, &body_at(10.0, 20.0), &state);

    let json = recorder.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let samples = value.as_array().unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0]["x"].as_f64(), Some(10.0));
    assert_eq!(samples[0]["dt"].as_f64(), Some(0.5));
    assert_eq!(samples[0]["dashing"], true);
    assert_eq!(samples[0]["hugging_wall"], false);
}

#[test]
fn test_trace_written_to_disk() {
    let dir = std::env::temp_dir().join(format!("dashfall_trace_{}", std::process::id()));
    let mut recorder = TraceRecorder::default();
    recorder.record(0.25, &body_at(0.0, 0.0), &MovementState::default());

    let path = recorder.write_to(&dir, 7).unwrap();

    assert!(path.ends_with("trace_7.json"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"frame\": 0"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_info_overlay_text() {
    let text = format_player_info(&body_at(12.0, 34.5), &MovementState::default(), true);

    assert!(text.contains("pos (12.0, 34.5)"));
    assert!(text.contains("vel (120.0, -40.0)"));
    assert!(text.contains("facing=Right"));
    assert!(text.ends_with("[REC]"));
}
