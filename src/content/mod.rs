//! Content domain: data-driven movement tuning loaded from `assets/data`.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

/// Directory holding the RON data files.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_tuning);
    }
}

/// Resolve the tuning to use: the loaded file if it parses and validates,
/// defaults otherwise. Every problem is logged.
pub fn resolve_tuning(loaded: Result<MovementTuning, TuningLoadError>) -> MovementTuning {
    let tuning = match loaded {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return MovementTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        return tuning;
    }

    for e in &errors {
        warn!("Invalid movement tuning: {}", e);
    }
    warn!(
        "{} tuning error(s); using default movement tuning",
        errors.len()
    );
    MovementTuning::default()
}

fn load_movement_tuning(mut commands: Commands) {
    let tuning = resolve_tuning(load_tuning(Path::new(DATA_DIR)));

    info!(
        "Movement tuning: gravity={}, max_fall={}, run={}, jump={}x{}s, dash={}x{}s, swept_probe={}",
        tuning.gravity,
        tuning.max_fall_speed,
        tuning.max_horizontal_speed,
        tuning.jump_force,
        tuning.jump_duration,
        tuning.dash_speed,
        tuning.dash_duration,
        tuning.swept_probe
    );

    commands.insert_resource(tuning);
}
