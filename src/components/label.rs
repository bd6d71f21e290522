use bevy_ecs::prelude::Component;

/// Free-text category label of a node (usually its authored name).
///
/// Matching against it is case-insensitive; see
/// [`classify_label`](crate::systems::classify::classify_label).
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(pub String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
