//! Delayed message delivery.
//!
//! [`dispatch_posted_messages`] runs once per frame. It takes every due
//! message out of the [`MessageQueue`](crate::resources::messagequeue::MessageQueue)
//! and triggers it, so observers of
//! [`ComponentInternalTrigger`](crate::events::internaltrigger::ComponentInternalTrigger)
//! receive it. Messages posted by those observers wait for a later frame.

use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::messagequeue::MessageQueue;
use crate::resources::worldtime::WorldTime;

/// Trigger all messages whose due time has been reached.
pub fn dispatch_posted_messages(
    world_time: Res<WorldTime>,
    mut queue: ResMut<MessageQueue>,
    mut commands: Commands,
) {
    let due = queue.take_due(world_time.elapsed);
    if due.is_empty() {
        return;
    }
    trace!(
        "Delivering {} message(s) at t={}, {} still pending",
        due.len(),
        world_time.elapsed,
        queue.len()
    );
    for message in due {
        commands.trigger(message);
    }
}
