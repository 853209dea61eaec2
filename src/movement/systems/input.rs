//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{Action, ActionState, MovementInput};

fn bindings(action: Action) -> &'static [KeyCode] {
    match action {
        Action::MoveLeft => &[KeyCode::ArrowLeft, KeyCode::KeyA],
        Action::MoveRight => &[KeyCode::ArrowRight, KeyCode::KeyD],
        Action::Jump => &[KeyCode::KeyZ, KeyCode::Space],
        Action::Dash => &[KeyCode::KeyC, KeyCode::ShiftLeft],
    }
}

pub(crate) fn sample_action(keyboard: &ButtonInput<KeyCode>, action: Action) -> ActionState {
    let keys = bindings(action);
    ActionState {
        held: keyboard.any_pressed(keys.iter().copied()),
        just_pressed: keyboard.any_just_pressed(keys.iter().copied()),
        just_released: keyboard.any_just_released(keys.iter().copied()),
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    for action in Action::ALL {
        *input.state_mut(action) = sample_action(&keyboard, action);
    }
}
