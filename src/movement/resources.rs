//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub body_width: f32,
    pub body_height: f32,
    /// Downward acceleration, units/s².
    pub gravity: f32,
    /// Terminal fall speed in free fall.
    pub max_fall_speed: f32,
    /// Terminal fall speed while hugging a wall.
    pub wall_slide_speed: f32,
    /// Acceleration and deceleration applied by horizontal input, units/s².
    pub horizontal_force: f32,
    pub max_horizontal_speed: f32,
    /// Below this speed an unpowered player snaps to rest.
    pub stop_threshold: f32,
    /// Upward acceleration while the jump is held, units/s².
    pub jump_force: f32,
    /// How long a held jump keeps pushing upward, seconds.
    pub jump_duration: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Query the whole swept box per axis instead of only the end position.
    /// Off by default: fast bodies can pass through thin colliders.
    pub swept_probe: bool,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            body_width: 60.0,
            body_height: 120.0,
            gravity: 2000.0,
            max_fall_speed: 1200.0,
            wall_slide_speed: 250.0,
            horizontal_force: 6000.0,
            max_horizontal_speed: 600.0,
            stop_threshold: 10.0,
            jump_force: 8000.0,
            jump_duration: 0.15,
            dash_speed: 5000.0,
            dash_duration: 0.1,
            swept_probe: false,
        }
    }
}

impl MovementTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    /// Horizontal distance covered by one uninterrupted dash.
    pub fn dash_distance(&self) -> f32 {
        self.dash_speed * self.dash_duration
    }

    /// Upward speed reached when a jump is held for its full duration, ignoring
    /// the fall cap (gravity keeps acting during the push).
    pub fn peak_jump_speed(&self) -> f32 {
        (self.jump_force - self.gravity) * self.jump_duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Dash,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Dash,
    ];
}

/// Per-action button state, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    pub held: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

/// Input snapshot consumed by the movement core. Immutable for the duration
/// of a tick.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct MovementInput {
    pub move_left: ActionState,
    pub move_right: ActionState,
    pub jump: ActionState,
    pub dash: ActionState,
}

impl MovementInput {
    pub fn state(&self, action: Action) -> &ActionState {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::Jump => &self.jump,
            Action::Dash => &self.dash,
        }
    }

    pub fn state_mut(&mut self, action: Action) -> &mut ActionState {
        match action {
            Action::MoveLeft => &mut self.move_left,
            Action::MoveRight => &mut self.move_right,
            Action::Jump => &mut self.jump,
            Action::Dash => &mut self.dash,
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.state(action).held
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.state(action).just_pressed
    }

    pub fn is_released(&self, action: Action) -> bool {
        self.state(action).just_released
    }

    /// Held horizontal direction. Right wins when both are held.
    pub fn horizontal(&self) -> Option<Facing> {
        if self.is_held(Action::MoveRight) {
            Some(Facing::Right)
        } else if self.is_held(Action::MoveLeft) {
            Some(Facing::Left)
        } else {
            None
        }
    }
}
