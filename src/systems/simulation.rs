//! Simulation lifecycle systems.
//!
//! - [`simulation_is_running`] – run condition gating per-frame simulation work
//! - [`start_simulation_components`] – fires the start hook once per component
//! - [`reset_removed_flips`] – forgets start state and pending messages when a
//!   [`JointMotorFlip`] is removed or its entity despawned
//!
//! A component added while the simulation is already running starts on the
//! next frame, the same way as components present at startup.

use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::jointmotorflip::{JointMotorFlip, SimulationStarted};
use crate::events::simulation::SimulationStartedEvent;
use crate::resources::messagequeue::MessageQueue;
use crate::resources::simulation::SimulationState;

/// Run condition: true while the simulation is running.
pub fn simulation_is_running(sim: Res<SimulationState>) -> bool {
    sim.running
}

/// Trigger [`SimulationStartedEvent`] for every component that has not started yet.
///
/// The [`SimulationStarted`] marker is inserted alongside so the hook never
/// fires twice.
pub fn start_simulation_components(
    query: Query<Entity, (With<JointMotorFlip>, Without<SimulationStarted>)>,
    mut commands: Commands,
) {
    for entity in query.iter() {
        debug!("Simulation started for {:?}", entity);
        commands.entity(entity).insert(SimulationStarted);
        commands.trigger(SimulationStartedEvent { entity });
    }
}

/// Clean up after [`JointMotorFlip`] components that went away.
///
/// Pending triggers for the entity are dropped, and if the entity is still
/// alive its start marker is removed so a re-added component starts afresh.
pub fn reset_removed_flips(
    mut removed: RemovedComponents<JointMotorFlip>,
    mut queue: ResMut<MessageQueue>,
    mut commands: Commands,
) {
    for entity in removed.read() {
        let dropped = queue.clear_for(entity);
        trace!("JointMotorFlip removed from {:?}, dropped {} pending", entity, dropped);
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.try_remove::<SimulationStarted>();
        }
    }
}
