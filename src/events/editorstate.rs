//! Editor state transition event and observer.
//!
//! Systems request a change of [`EditorStates`] through [`NextEditorState`].
//! Emitting an [`EditorStateChangedEvent`] then applies the transition. Leaving
//! [`EditorStates::Editing`] for [`EditorStates::Playing`] is the point where
//! static draw orders are calibrated, right before the simulation starts.
use crate::resources::editorstate::NextEditorStates::{Pending, Unchanged};
use crate::resources::editorstate::{EditorState, EditorStates, NextEditorState};
use crate::systems::calibrate::calibrate;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending editor state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct EditorStateChangedEvent {}

/// Observer that applies a pending editor state transition.
///
/// - Reads the intention from [`NextEditorState`].
/// - If pending, copies it into [`EditorState`] and resets the request.
/// - On `Editing -> Playing`, queues a calibration pass.
/// - If a resource is missing, logs a diagnostic and returns.
pub fn observe_editor_state_change_event(
    _trigger: On<EditorStateChangedEvent>,
    mut commands: Commands,
    mut next_state: Option<ResMut<NextEditorState>>,
    mut state: Option<ResMut<EditorState>>,
) {
    debug!("EditorStateChangedEvent triggered");

    if let (Some(next_state), Some(state)) = (next_state.as_deref_mut(), state.as_deref_mut()) {
        match next_state.get() {
            Pending(new_state) => {
                let old_state = state.get();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                state.set(new_state);
                next_state.reset();
                if old_state == EditorStates::Editing && new_state == EditorStates::Playing {
                    commands.queue(|world: &mut World| {
                        calibrate(world);
                    });
                }
            }
            Unchanged => debug!("No state change pending."),
        }
    } else {
        warn!(
            "One or more resources missing in observe_editor_state_change_event. next_state: {:?}, state: {:?}",
            next_state.is_some(),
            state.is_some()
        );
    }
}
