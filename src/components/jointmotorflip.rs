//! Timer-driven joint motor flipper.
//!
//! The [`JointMotorFlip`] component periodically inverts the drive velocity of
//! a [`RevoluteJoint`](super::revolutejoint::RevoluteJoint) on the same entity.
//!
//! # How It Works
//!
//! 1. When the simulation starts, the entity receives a
//!    [`SimulationStartedEvent`](crate::events::simulation::SimulationStartedEvent)
//!    and a `FlipMotor` [`ComponentInternalTrigger`](crate::events::internaltrigger::ComponentInternalTrigger)
//!    is posted to itself, due `seconds` later.
//! 2. When the trigger is delivered, the joint's drive velocity is negated (if
//!    the entity has a joint) and the same trigger is posted again.
//! 3. The cycle repeats until the entity is despawned or the component removed.
//!
//! `seconds` is read every time the trigger is posted, so changing it at
//! runtime only affects the next schedule.
//!
//! # Related
//!
//! - [`crate::systems::jointmotorflip`] – the start hook and trigger handler
//! - [`crate::resources::messagequeue::MessageQueue`] – delayed delivery

use bevy_ecs::prelude::Component;

/// Usage string identifying the flip trigger among other internal triggers.
pub const FLIP_MOTOR_USAGE: &str = "FlipMotor";

/// Default delay between flips, in seconds.
pub const DEFAULT_FLIP_SECONDS: f32 = 10.0;

/// Flips the sibling joint's drive velocity every `seconds`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct JointMotorFlip {
    /// Delay between flips in seconds.
    pub seconds: f32,
}

impl Default for JointMotorFlip {
    fn default() -> Self {
        Self::new(DEFAULT_FLIP_SECONDS)
    }
}

impl JointMotorFlip {
    pub fn new(seconds: f32) -> Self {
        JointMotorFlip { seconds }
    }
}

/// Marker inserted once the start hook has fired for an entity.
///
/// Entities with [`JointMotorFlip`] but without this marker are still idle.
#[derive(Component, Clone, Copy, Debug)]
pub struct SimulationStarted;
