//! Editor/runtime state resources.
//!
//! These resources track whether the scene is being authored or simulated,
//! and any pending transition. See
//! `crate::events::editorstate::observe_editor_state_change_event` for how a
//! transition is applied and when calibration runs.

use bevy_ecs::prelude::Resource;

/// Whether the scene is being authored or simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorStates {
    #[default]
    Editing,
    Playing,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextEditorStates {
    #[default]
    Unchanged,
    Pending(EditorStates),
}

/// Authoritative current editor state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EditorState {
    current: EditorStates,
}

impl EditorState {
    /// Create a new state initialized to [`EditorStates::Editing`].
    pub fn new() -> Self {
        Self::default()
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> EditorStates {
        self.current
    }
    /// Update the current state immediately, without running hooks.
    pub fn set(&mut self, state: EditorStates) {
        self.current = state;
    }
}

/// Intent to change to a new editor state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NextEditorState {
    next: NextEditorStates,
}

impl NextEditorState {
    /// Create a new value initialized to [`NextEditorStates::Unchanged`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextEditorStates {
        self.next
    }

    /// Request a transition to `next` by marking it as pending.
    pub fn set(&mut self, next: EditorStates) {
        self.next = NextEditorStates::Pending(next);
    }

    /// Reset to [`NextEditorStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextEditorStates::Unchanged;
    }
}
