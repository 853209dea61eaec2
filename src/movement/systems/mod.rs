//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod update;

pub(crate) use input::read_input;
pub use update::{MovementEvents, player_update};
pub(crate) use update::{run_player_update, spawn_player, sync_player_sprite};
