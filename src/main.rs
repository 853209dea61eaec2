mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;

use bevy::prelude::*;
use bevy::window::PresentMode;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "dashfall".to_string(),
            resolution: (core::VIEW_WIDTH as u32, core::VIEW_HEIGHT as u32).into(),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(core::frame_pacing())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
