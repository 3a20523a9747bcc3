//! Component-internal trigger messages.
//!
//! A component posts a [`ComponentInternalTrigger`] to its own entity through
//! the [`MessageQueue`](crate::resources::messagequeue::MessageQueue) to be
//! woken up later. The `usage_string_hash` tells apart triggers posted for
//! different purposes on the same entity.
//!
//! # Event Flow
//!
//! 1. A component posts the trigger with a delay
//! 2. `dispatch_posted_messages` triggers it once the delay has elapsed
//! 3. Observers check the target entity and the usage hash, then react
//!
//! # Related
//!
//! - [`crate::hash::string_to_hash`] – builds usage hashes from strings
//! - [`crate::systems::messagequeue::dispatch_posted_messages`] – delivery

use bevy_ecs::prelude::*;

use crate::hash::string_to_hash;

/// Delayed wake-up message addressed to a component's own entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInternalTrigger {
    /// The entity the message is addressed to.
    pub entity: Entity,
    /// Opaque hash identifying what the trigger is for.
    pub usage_string_hash: u32,
}

impl ComponentInternalTrigger {
    /// Trigger for `entity` tagged with the hash of `usage`.
    pub fn new(entity: Entity, usage: &str) -> Self {
        ComponentInternalTrigger {
            entity,
            usage_string_hash: string_to_hash(usage),
        }
    }

    pub fn is_usage(&self, usage: &str) -> bool {
        self.usage_string_hash == string_to_hash(usage)
    }
}
