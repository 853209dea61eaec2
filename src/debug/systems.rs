//! Debug domain: debug systems for hotkeys, overlay, gizmos and tracing.

use bevy::math::Isometry2d;
use bevy::prelude::*;
use std::path::Path;

use crate::core::world_to_screen;
use crate::debug::state::{DebugState, TraceRecorder};
use crate::level::Colliders;
use crate::movement::{Body, MovementState, Player};

/// Directory traces are written to, relative to the working directory.
const TRACE_DIR: &str = "traces";

/// Marker for debug info overlay (position, velocity, flags)
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

/// F1: info overlay, F2: collider outlines, F3: start/stop trace recording
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", on_off(debug_state.show_info));
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_colliders = !debug_state.show_colliders;
        info!("[DEBUG] Collider outlines {}", on_off(debug_state.show_colliders));
    }

    if keyboard.just_pressed(KeyCode::F3) {
        match debug_state.recording.take() {
            Some(recorder) => finish_trace(&mut debug_state, recorder),
            None => {
                debug_state.recording = Some(TraceRecorder::default());
                info!("[DEBUG] Trace recording started");
            }
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

fn finish_trace(debug_state: &mut DebugState, recorder: TraceRecorder) {
    let index = debug_state.traces_written;
    match recorder.write_to(Path::new(TRACE_DIR), index) {
        Ok(path) => {
            debug_state.traces_written += 1;
            info!(
                "[DEBUG] Wrote {} trace samples to {}",
                recorder.samples().len(),
                path.display()
            );
        }
        Err(e) => error!("[DEBUG] Failed to write trace: {}", e),
    }
}

pub(crate) fn record_trace(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    player: Query<(&Body, &MovementState), With<Player>>,
) {
    let Some(recorder) = debug_state.recording.as_mut() else {
        return;
    };

    for (body, state) in &player {
        recorder.record(time.delta_secs(), body, state);
    }
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    player: Query<(&Body, &MovementState), With<Player>>,
    mut overlay: Query<(&mut Text, &mut Visibility), With<DebugInfoOverlay>>,
) {
    for (mut text, mut visibility) in &mut overlay {
        if !debug_state.show_info {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Visible;

        if let Ok((body, state)) = player.single() {
            **text = format_player_info(body, state, debug_state.recording.is_some());
        }
    }
}

pub(crate) fn format_player_info(body: &Body, state: &MovementState, recording: bool) -> String {
    format!(
        "pos ({:.1}, {:.1})  vel ({:.1}, {:.1})\n\
         floor={} jump={} ({:.3}s) dash={} ({:.3}s) wall={} facing={:?}{}",
        body.position.x,
        body.position.y,
        body.velocity.x,
        body.velocity.y,
        state.on_floor,
        state.jumping,
        state.jump_time,
        state.dashing,
        state.dash_time,
        state.hugging_wall,
        state.facing,
        if recording { "\n[REC]" } else { "" }
    )
}

pub(crate) fn draw_collider_gizmos(
    colliders: Res<Colliders>,
    player: Query<&Body, With<Player>>,
    mut gizmos: Gizmos,
) {
    for collider in colliders.iter() {
        let rect = collider.rect();
        gizmos.rect_2d(
            Isometry2d::from_translation(world_to_screen(rect.center())),
            rect.size(),
            Color::srgb(1.0, 1.0, 0.0),
        );
    }

    for body in &player {
        gizmos.rect_2d(
            Isometry2d::from_translation(world_to_screen(body.center())),
            body.size,
            Color::srgb(0.0, 1.0, 0.4),
        );
    }
}
