//! Validation for loaded movement tuning.

use crate::movement::MovementTuning;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub rule: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {} must be {}", self.field, self.value, self.rule)
    }
}

/// Helper macro for checking a field is strictly positive
macro_rules! check_positive {
    ($errors:expr, $tuning:expr, $field:ident) => {
        if !($tuning.$field > 0.0) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $tuning.$field,
                rule: "positive",
            });
        }
    };
}

/// Helper macro for checking a field is zero or more
macro_rules! check_non_negative {
    ($errors:expr, $tuning:expr, $field:ident) => {
        if !($tuning.$field >= 0.0) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $tuning.$field,
                rule: "zero or more",
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, tuning, body_width);
    check_positive!(errors, tuning, body_height);
    check_non_negative!(errors, tuning, gravity);
    check_positive!(errors, tuning, max_fall_speed);
    check_positive!(errors, tuning, wall_slide_speed);
    check_non_negative!(errors, tuning, horizontal_force);
    check_positive!(errors, tuning, max_horizontal_speed);
    check_non_negative!(errors, tuning, stop_threshold);
    check_non_negative!(errors, tuning, jump_force);
    check_positive!(errors, tuning, jump_duration);
    check_positive!(errors, tuning, dash_speed);
    check_positive!(errors, tuning, dash_duration);

    if tuning.wall_slide_speed > tuning.max_fall_speed {
        errors.push(ValidationError {
            field: "wall_slide_speed",
            value: tuning.wall_slide_speed,
            rule: "no greater than max_fall_speed",
        });
    }

    errors
}
