use bevy_ecs::prelude::*;

use crate::components::revolutejoint::RevoluteJoint;
use crate::resources::worldtime::WorldTime;

/// Advance joint angles by their drive velocity.
///
/// Kinematic only: the motor is assumed to reach its target speed instantly.
/// Disabled drives hold their angle.
pub fn revolute_joint_drive(
    world_time: Res<WorldTime>,
    mut query: Query<&mut RevoluteJoint>,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for mut joint in query.iter_mut() {
        if !joint.drive_enabled {
            continue;
        }
        joint.angle += joint.drive_velocity * dt;
    }
}
