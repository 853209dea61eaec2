//! Movement domain: axis-separated collision resolution against the level.
//!
//! X is always resolved before Y, each against the full collider list, and
//! each pass takes the first overlapping collider in store order. Both rules
//! change corner behaviour if altered.

use bevy::prelude::*;

use crate::level::Colliders;
use crate::movement::{Body, MovementEvents, MovementState, MovementTuning};

fn probe(body: &Body, from: Vec2, tuning: &MovementTuning) -> Rect {
    if tuning.swept_probe {
        body.swept_aabb(from)
    } else {
        body.aabb()
    }
}

pub(crate) fn resolve_horizontal(
    body: &mut Body,
    state: &mut MovementState,
    colliders: &Colliders,
    tuning: &MovementTuning,
    dt: f32,
    events: &mut MovementEvents,
) {
    let from = body.position;
    body.position.x += body.velocity.x * dt;

    let Some(hit) = colliders.first_overlap(probe(body, from, tuning)) else {
        state.hugging_wall = false;
        return;
    };

    body.position.x = if body.velocity.x > 0.0 {
        hit.left() - body.size.x
    } else {
        hit.right()
    };
    body.velocity.x = 0.0;

    let hugging = !state.on_floor && !state.jumping;
    if hugging && !state.hugging_wall {
        events.wall_hug_started = true;
    }
    state.hugging_wall = hugging;
}

pub(crate) fn resolve_vertical(
    body: &mut Body,
    state: &mut MovementState,
    colliders: &Colliders,
    tuning: &MovementTuning,
    dt: f32,
    events: &mut MovementEvents,
) {
    let was_on_floor = state.on_floor;
    let from = body.position;
    body.position.y += body.velocity.y * dt;
    state.on_floor = false;

    let Some(hit) = colliders.first_overlap(probe(body, from, tuning)) else {
        return;
    };

    if body.velocity.y > 0.0 {
        body.position.y = hit.top() - body.size.y;
        state.on_floor = true;
        if !was_on_floor {
            events.landed = true;
        }
    } else {
        body.position.y = hit.bottom();
        state.jumping = false;
        events.bonked = body.velocity.y < 0.0;
    }
    body.velocity.y = 0.0;
}
