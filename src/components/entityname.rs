use bevy_ecs::prelude::Component;

/// Human-readable name given to an entity by the scene that spawned it.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct EntityName(pub String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        EntityName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
