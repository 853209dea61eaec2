//! Core domain: camera setup and follow.

use bevy::prelude::*;

use crate::core::{VIEW_HEIGHT, VIEW_WIDTH, world_to_screen};
use crate::movement::{Body, Player};

/// Top edge of the visible world for a player whose box top sits at `player_y`.
/// The view scrolls up once the player climbs above the screen's midline and
/// never scrolls below the ground-level view.
pub fn camera_top(player_y: f32) -> f32 {
    let half = VIEW_HEIGHT * 0.5;
    if player_y < half { player_y - half } else { 0.0 }
}

fn camera_center(top: f32) -> Vec3 {
    world_to_screen(Vec2::new(VIEW_WIDTH * 0.5, top + VIEW_HEIGHT * 0.5)).extend(0.0)
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_translation(camera_center(0.0))));
}

pub(crate) fn follow_player(
    player: Query<&Body, With<Player>>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(body) = player.single() else {
        return;
    };

    for mut transform in &mut camera {
        transform.translation = camera_center(camera_top(body.position.y));
    }
}
