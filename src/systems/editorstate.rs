use crate::events::editorstate::EditorStateChangedEvent;
use crate::resources::editorstate::{EditorState, EditorStates, NextEditorState, NextEditorStates};
use bevy_ecs::prelude::*;

/// Trigger [`EditorStateChangedEvent`] when a transition is pending.
pub fn check_pending_editor_state(mut commands: Commands, next_state: Res<NextEditorState>) {
    if let NextEditorStates::Pending(_) = next_state.get() {
        commands.trigger(EditorStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<EditorState>) -> bool {
    matches!(state.get(), EditorStates::Playing)
}
