//! Debug tooling for tuning movement (dev-tools feature).
//!
//! Features:
//! - F1: player state overlay
//! - F2: collider and player box outlines
//! - F3: start/stop a JSON movement trace under `traces/`

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::{DebugState, TraceRecorder, TraceSample};

use bevy::prelude::*;

use crate::debug::systems::{
    draw_collider_gizmos, handle_debug_hotkeys, record_trace, spawn_debug_info_overlay,
    update_debug_info_overlay,
};
use crate::movement::MovementSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_info_overlay)
            .add_systems(Update, handle_debug_hotkeys.before(MovementSet::Simulate))
            .add_systems(
                Update,
                (record_trace, update_debug_info_overlay).after(MovementSet::Simulate),
            )
            .add_systems(
                Update,
                draw_collider_gizmos
                    .after(MovementSet::Render)
                    .run_if(|state: Res<DebugState>| state.show_colliders),
            );
    }
}
