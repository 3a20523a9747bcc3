use bevy_ecs::prelude::Resource;

/// Whether the simulation is running.
///
/// Start hooks and message delivery only happen while `running` is true.
/// Time keeps advancing while paused, so messages that fall due during a
/// pause are delivered right after resuming.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationState {
    pub running: bool,
}

impl SimulationState {
    pub fn running() -> Self {
        SimulationState { running: true }
    }
}
