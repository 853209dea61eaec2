//! Movement domain: player kinematics, collision resolution and plugin wiring.

mod components;
mod resources;
mod systems;


use bevy::prelude::*;

pub use components::{Body, Facing, MovementState, Player};
pub use resources::{Action, ActionState, MovementInput, MovementTuning};
pub use systems::{MovementEvents, player_update};

use crate::movement::systems::{read_input, run_player_update, spawn_player, sync_player_sprite};

/// Stage order inside a frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Simulate,
    Render,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .configure_sets(
                Update,
                (
                    MovementSet::Input,
                    MovementSet::Simulate,
                    MovementSet::Render,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(Update, run_player_update.in_set(MovementSet::Simulate))
            .add_systems(Update, sync_player_sprite.in_set(MovementSet::Render));
    }
}
