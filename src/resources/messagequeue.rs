//! Delayed message queue.
//!
//! [`MessageQueue`] holds [`ComponentInternalTrigger`] messages that were
//! posted with a delay. Each message is due at `posted_at + delay` on the
//! [`WorldTime`](super::worldtime::WorldTime) clock and is never delivered
//! earlier.
//!
//! Delivery happens in batches via [`MessageQueue::take_due`]. A message posted
//! while a batch is being handled is not part of that batch, even with a zero
//! delay, so a handler that re-posts itself cannot loop within one frame.
//!
//! # Example
//! ```ignore
//! let mut queue = MessageQueue::default();
//! queue.post(trigger, 10.0, world_time.elapsed);
//! for msg in queue.take_due(world_time.elapsed) {
//!     commands.trigger(msg);
//! }
//! ```

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::events::internaltrigger::ComponentInternalTrigger;

/// A message waiting for its delivery time.
#[derive(Debug, Clone, Copy)]
pub struct PendingMessage {
    /// World time at which the message becomes deliverable.
    pub due: f32,
    /// Post order, used to keep delivery stable for equal `due` times.
    pub seq: u64,
    pub message: ComponentInternalTrigger,
}

/// Batch of messages returned by [`MessageQueue::take_due`].
pub type DueMessages = SmallVec<[ComponentInternalTrigger; 8]>;

#[derive(Resource, Debug, Default)]
pub struct MessageQueue {
    pending: Vec<PendingMessage>,
    next_seq: u64,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post `message` for delivery `delay` seconds after `now`.
    ///
    /// Negative and NaN delays are treated as zero.
    pub fn post(&mut self, message: ComponentInternalTrigger, delay: f32, now: f32) {
        let delay = if delay > 0.0 { delay } else { 0.0 };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingMessage {
            due: now + delay,
            seq,
            message,
        });
    }

    /// Remove and return every message due at or before `now`.
    ///
    /// Messages come out ordered by due time, then by post order.
    pub fn take_due(&mut self, now: f32) -> DueMessages {
        let mut due: SmallVec<[PendingMessage; 8]> = SmallVec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| p.message).collect()
    }

    /// Drop every pending message addressed to `entity`.
    ///
    /// Returns how many messages were dropped.
    pub fn clear_for(&mut self, entity: Entity) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.message.entity != entity);
        before - self.pending.len()
    }

    /// Pending messages, in post order.
    pub fn pending(&self) -> &[PendingMessage] {
        &self.pending
    }

    /// Earliest due time among pending messages for `entity`.
    pub fn next_due_for(&self, entity: Entity) -> Option<f32> {
        self.pending
            .iter()
            .filter(|p| p.message.entity == entity)
            .map(|p| p.due)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
