//! Simulation lifecycle events.
//!
//! [`SimulationStartedEvent`] is triggered once per started component when the
//! simulation is running. See
//! [`start_simulation_components`](crate::systems::simulation::start_simulation_components).

use bevy_ecs::prelude::*;

/// Event emitted when simulation begins for an entity's components.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStartedEvent {
    /// The entity whose components just started simulating.
    pub entity: Entity,
}
