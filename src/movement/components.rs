//! Movement domain: player components for kinematic state.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Axis-aligned box driven by the movement core. `position` is the top-left
/// corner in world space (y grows downward); `size` is the one box used for
/// moving, colliding and drawing.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn aabb(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }

    /// Box covering both `from` and the current position.
    pub fn swept_aabb(&self, from: Vec2) -> Rect {
        let start = Rect::from_corners(from, from + self.size);
        start.union(self.aabb())
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct MovementState {
    pub on_floor: bool,
    pub jumping: bool,
    pub jump_time: f32,
    pub dashing: bool,
    pub dash_time: f32,
    pub hugging_wall: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}
