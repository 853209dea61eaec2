//! Content domain: tests for tuning parsing, validation and fallback.

use std::path::Path;

use super::{load_tuning, parse_tuning, resolve_tuning, validate_tuning};
use crate::movement::MovementTuning;

#[test]
fn test_parse_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning("(gravity: 1500.0, swept_probe: true)", "inline").unwrap();

    assert_eq!(tuning.gravity, 1500.0);
    assert!(tuning.swept_probe);
    assert_eq!(tuning.dash_speed, MovementTuning::default().dash_speed);
}

#[test]
fn test_parse_empty_struct_is_default() {
    let tuning = parse_tuning("()", "inline").unwrap();
    assert_eq!(tuning, MovementTuning::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(gravity: \"heavy\")", "movement.ron").unwrap_err();
    assert_eq!(err.file, "movement.ron");
    assert!(err.to_string().starts_with("Failed to load movement.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::DATA_DIR);
    let tuning = load_tuning(&path).unwrap();
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_validation_reports_each_bad_field() {
    let tuning = MovementTuning {
        body_width: 0.0,
        dash_duration: -1.0,
        gravity: f32::NAN,
        ..MovementTuning::default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"body_width"));
    assert!(fields.contains(&"dash_duration"));
    assert!(fields.contains(&"gravity"));
}

#[test]
fn test_validation_rejects_slide_faster_than_fall() {
    let tuning = MovementTuning {
        wall_slide_speed: 2000.0,
        max_fall_speed: 1000.0,
        ..MovementTuning::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "wall_slide_speed");
}

#[test]
fn test_resolve_falls_back_on_invalid_tuning() {
    let bad = MovementTuning {
        jump_duration: 0.0,
        ..MovementTuning::default()
    };
    assert_eq!(resolve_tuning(Ok(bad)), MovementTuning::default());

    let good = MovementTuning {
        gravity: 1234.0,
        ..MovementTuning::default()
    };
    assert_eq!(resolve_tuning(Ok(good.clone())), good);
}

#[test]
fn test_resolve_falls_back_on_load_error() {
    let loaded = parse_tuning("not ron", "inline");
    assert_eq!(resolve_tuning(loaded), MovementTuning::default());
}
