//! Core domain: camera, screen mapping and plugin wiring.

mod systems;


use std::time::Duration;

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};

pub use systems::camera_top;

use crate::core::systems::{follow_player, setup_camera};
use crate::movement::MovementSet;

/// Window width in world units at zoom 1.
pub const VIEW_WIDTH: f32 = 1280.0;
/// Window height in world units at zoom 1.
pub const VIEW_HEIGHT: f32 = 720.0;

/// Frame-rate target. `dt` feeds explicit Euler integration, so the
/// simulation is tuned against this rate.
pub const TARGET_FPS: f64 = 60.0;

/// Wall-clock budget of one frame at [`TARGET_FPS`].
pub fn frame_budget() -> Duration {
    Duration::from_secs_f64(1.0 / TARGET_FPS)
}

/// Caps the update loop at [`TARGET_FPS`], focused or not. Input and window
/// events are buffered until the next tick instead of waking the loop early.
pub fn frame_pacing() -> WinitSettings {
    let capped = || UpdateMode::Reactive {
        wait: frame_budget(),
        react_to_device_events: false,
        react_to_user_events: false,
        react_to_window_events: false,
    };
    WinitSettings {
        focused_mode: capped(),
        unfocused_mode: capped(),
    }
}

/// Map a world-space point (origin top-left, y down) into Bevy's y-up space.
pub fn world_to_screen(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player.after(MovementSet::Render));
    }
}
