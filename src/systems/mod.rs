//! Engine systems.
//!
//! Submodules overview
//! - [`jointmotorflip`] – observers that flip joint motors on a timer
//! - [`messagequeue`] – deliver posted messages once they are due
//! - [`revolutejoint`] – advance joint angles from their drive velocity
//! - [`simulation`] – start hooks and cleanup of removed components
//! - [`time`] – update simulation time and delta

pub mod jointmotorflip;
pub mod messagequeue;
pub mod revolutejoint;
pub mod simulation;
pub mod time;

use bevy_ecs::prelude::*;

use crate::resources::messagequeue::MessageQueue;
use crate::resources::simulation::SimulationState;
use crate::resources::worldtime::WorldTime;
use crate::systems::messagequeue::dispatch_posted_messages;
use crate::systems::revolutejoint::revolute_joint_drive;
use crate::systems::simulation::{
    reset_removed_flips, simulation_is_running, start_simulation_components,
};

/// Insert the resources the per-frame schedule needs and register observers.
///
/// Existing resources are left untouched.
pub fn init_world(world: &mut World) {
    world.init_resource::<WorldTime>();
    world.init_resource::<SimulationState>();
    world.init_resource::<MessageQueue>();
    jointmotorflip::register_message_handlers(world);
}

/// Build the per-frame schedule.
///
/// Order matters: start hooks post their first message before delivery runs,
/// and joints integrate after any flip of the frame. Removal cleanup runs even
/// while paused; everything else waits for the simulation to run.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            reset_removed_flips,
            (
                start_simulation_components,
                dispatch_posted_messages,
                revolute_joint_drive,
            )
                .chain()
                .run_if(simulation_is_running),
        )
            .chain(),
    );
    update
}
