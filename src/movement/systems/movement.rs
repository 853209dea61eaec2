//! Movement domain: kinematics stages (gravity, dash, run, jump).
//!
//! Each stage mutates velocity and mode flags only; position is left to the
//! collision passes.

use bevy::prelude::*;

use crate::movement::{Action, MovementEvents, MovementInput, MovementState, MovementTuning};

pub(crate) fn apply_gravity(
    velocity: &mut Vec2,
    state: &MovementState,
    tuning: &MovementTuning,
    dt: f32,
) {
    let cap = if state.hugging_wall {
        tuning.wall_slide_speed
    } else {
        tuning.max_fall_speed
    };

    velocity.y = (velocity.y + tuning.gravity * dt).min(cap);
}

/// Returns true when a dash was active this tick, in which case horizontal
/// movement must not run.
pub(crate) fn apply_dash(
    velocity: &mut Vec2,
    state: &mut MovementState,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
    events: &mut MovementEvents,
) -> bool {
    if input.is_pressed(Action::Dash) && !state.dashing && !state.hugging_wall {
        state.dashing = true;
        state.dash_time = 0.0;
        events.dash_started = true;
    }

    if !state.dashing {
        return false;
    }

    velocity.x = state.facing.sign() * tuning.dash_speed;
    velocity.y = 0.0;
    state.dash_time += dt;

    if state.dash_time >= tuning.dash_duration {
        state.dashing = false;
        state.dash_time = 0.0;
        velocity.x = 0.0;
        events.dash_ended = true;
    }

    true
}

pub(crate) fn apply_horizontal_movement(
    velocity: &mut Vec2,
    state: &mut MovementState,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
) {
    let step = tuning.horizontal_force * dt;

    match input.horizontal() {
        Some(facing) => {
            velocity.x += facing.sign() * step;
            state.facing = facing;
        }
        None if velocity.x != 0.0 => {
            // Never overshoot through zero
            if velocity.x.abs() <= step {
                velocity.x = 0.0;
            } else {
                velocity.x -= velocity.x.signum() * step;
            }

            if velocity.x.abs() < tuning.stop_threshold {
                velocity.x = 0.0;
            }
        }
        None => {}
    }

    velocity.x = velocity
        .x
        .clamp(-tuning.max_horizontal_speed, tuning.max_horizontal_speed);
}

pub(crate) fn apply_jump(
    velocity: &mut Vec2,
    state: &mut MovementState,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
    events: &mut MovementEvents,
) {
    if input.is_pressed(Action::Jump) && state.on_floor {
        state.jumping = true;
        state.jump_time = 0.0;
        events.jumped = true;
    }

    if !state.jumping {
        return;
    }

    let released = input.is_released(Action::Jump) || !input.is_held(Action::Jump);
    if released || state.jump_time >= tuning.jump_duration {
        state.jumping = false;
        return;
    }

    velocity.y -= tuning.jump_force * dt;
    state.jump_time = (state.jump_time + dt).min(tuning.jump_duration);

    if state.jump_time >= tuning.jump_duration {
        state.jumping = false;
    }
}
