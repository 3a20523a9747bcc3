//! Joint motor flip observers.
//!
//! This module provides the two behaviours of
//! [`JointMotorFlip`](crate::components::jointmotorflip::JointMotorFlip):
//!
//! - [`on_joint_motor_flip_started`] – posts the first `FlipMotor` trigger
//! - [`on_flip_motor_trigger`] – reverses the joint motor and posts the trigger again
//!
//! # System Flow
//!
//! 1. `start_simulation_components` triggers `SimulationStartedEvent` once
//! 2. `on_joint_motor_flip_started` posts a `FlipMotor` trigger due `seconds` later
//! 3. `dispatch_posted_messages` delivers the trigger when due
//! 4. `on_flip_motor_trigger` negates `RevoluteJoint::drive_velocity` when the
//!    entity has a joint, then re-posts the same trigger
//!
//! An entity without a joint keeps cycling; the flip is simply skipped.

use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::jointmotorflip::{FLIP_MOTOR_USAGE, JointMotorFlip};
use crate::components::revolutejoint::RevoluteJoint;
use crate::events::internaltrigger::ComponentInternalTrigger;
use crate::events::simulation::SimulationStartedEvent;
use crate::resources::messagequeue::MessageQueue;
use crate::resources::worldtime::WorldTime;

/// Register the observers handling messages for [`JointMotorFlip`].
pub fn register_message_handlers(world: &mut World) {
    world.add_observer(on_joint_motor_flip_started);
    world.add_observer(on_flip_motor_trigger);
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

/// Start hook: schedule the first flip.
pub fn on_joint_motor_flip_started(
    trigger: On<SimulationStartedEvent>,
    flips: Query<&JointMotorFlip>,
    world_time: Res<WorldTime>,
    mut queue: ResMut<MessageQueue>,
) {
    let entity = trigger.event().entity;
    let Ok(flip) = flips.get(entity) else {
        return;
    };
    let message = ComponentInternalTrigger::new(entity, FLIP_MOTOR_USAGE);
    queue.post(message, flip.seconds, world_time.elapsed);
    debug!(
        "{:?}: first motor flip in {}s (t={})",
        entity, flip.seconds, world_time.elapsed
    );
}

/// Trigger handler: reverse the motor and re-arm.
///
/// Triggers tagged for other purposes are ignored. A trigger whose entity no
/// longer carries [`JointMotorFlip`] is dropped, which ends the cycle.
pub fn on_flip_motor_trigger(
    trigger: On<ComponentInternalTrigger>,
    flips: Query<&JointMotorFlip>,
    mut joints: Query<&mut RevoluteJoint>,
    world_time: Res<WorldTime>,
    mut queue: ResMut<MessageQueue>,
) {
    let message = *trigger.event();
    if !message.is_usage(FLIP_MOTOR_USAGE) {
        return;
    }
    let Ok(flip) = flips.get(message.entity) else {
        trace!("Dropping FlipMotor trigger for {:?}", message.entity);
        return;
    };

    if let Ok(mut joint) = joints.get_mut(message.entity) {
        let previous = joint.drive_velocity;
        joint.flip_drive();
        debug!(
            "{:?}: drive velocity {} -> {} at t={}",
            message.entity, previous, joint.drive_velocity, world_time.elapsed
        );
    }

    queue.post(message, flip.seconds, world_time.elapsed);
}
