//! Movement domain: per-tick driver, player spawn and render sync.

use bevy::prelude::*;

use crate::core::world_to_screen;
use crate::level::Colliders;
use crate::movement::systems::collisions::{resolve_horizontal, resolve_vertical};
use crate::movement::systems::movement::{
    apply_dash, apply_gravity, apply_horizontal_movement, apply_jump,
};
use crate::movement::{Body, MovementInput, MovementState, MovementTuning, Player};

const PLAYER_COLOR: Color = Color::srgb(0.9, 0.16, 0.22);

/// Things that happened to the player during one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementEvents {
    pub jumped: bool,
    pub landed: bool,
    pub bonked: bool,
    pub dash_started: bool,
    pub dash_ended: bool,
    pub wall_hug_started: bool,
}

/// Advance the player by one tick of `dt` seconds: kinematics, then
/// horizontal collision, then vertical collision.
pub fn player_update(
    body: &mut Body,
    state: &mut MovementState,
    input: &MovementInput,
    tuning: &MovementTuning,
    colliders: &Colliders,
    dt: f32,
) -> MovementEvents {
    let mut events = MovementEvents::default();

    apply_gravity(&mut body.velocity, state, tuning, dt);
    let dashed = apply_dash(&mut body.velocity, state, input, tuning, dt, &mut events);
    if !dashed {
        apply_horizontal_movement(&mut body.velocity, state, input, tuning, dt);
    }
    apply_jump(&mut body.velocity, state, input, tuning, dt, &mut events);

    resolve_horizontal(body, state, colliders, tuning, dt, &mut events);
    resolve_vertical(body, state, colliders, tuning, dt, &mut events);

    events
}

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let body = Body::new(Vec2::ZERO, tuning.body_size());

    commands.spawn((
        Player,
        MovementState::default(),
        body,
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(body.size),
            ..default()
        },
        Transform::from_translation(world_to_screen(body.center()).extend(1.0)),
    ));

    info!(
        "Spawned player: size={}x{}, dash_distance={}, peak_jump_speed={}",
        body.size.x,
        body.size.y,
        tuning.dash_distance(),
        tuning.peak_jump_speed()
    );
}

pub(crate) fn run_player_update(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    colliders: Res<Colliders>,
    mut query: Query<(&mut Body, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut body, mut state) in &mut query {
        let events = player_update(&mut body, &mut state, &input, &tuning, &colliders, dt);
        log_events(&events, &body);
    }
}

fn log_events(events: &MovementEvents, body: &Body) {
    if events.jumped {
        debug!("Jump started at {:?}", body.position);
    }
    if events.landed {
        debug!("Landed at y={}", body.position.y);
    }
    if events.bonked {
        debug!("Hit ceiling at y={}", body.position.y);
    }
    if events.dash_started {
        debug!("Dash started: vx={}", body.velocity.x);
    }
    if events.dash_ended {
        debug!("Dash ended at x={}", body.position.x);
    }
    if events.wall_hug_started {
        debug!("Wall hug started at x={}", body.position.x);
    }
}

/// Draw call: place the player sprite at its final box position.
pub(crate) fn sync_player_sprite(
    mut query: Query<(&Body, &mut Transform, &mut Sprite), (With<Player>, Changed<Body>)>,
) {
    for (body, mut transform, mut sprite) in &mut query {
        let center = world_to_screen(body.center());
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        sprite.custom_size = Some(body.size);
    }
}
