//! Revolute joint with a velocity motor drive.
//!
//! The [`RevoluteJoint`] component stores the motor's target angular speed and
//! the joint's current angle. The
//! [`revolute_joint_drive`](crate::systems::revolutejoint::revolute_joint_drive)
//! system advances `angle` from `drive_velocity` each frame.

use bevy_ecs::prelude::Component;

/// Rotational joint driven towards a target angular speed.
///
/// # Fields
/// - `drive_velocity` - Target angular speed in radians per second. Sign picks the direction.
/// - `max_drive_torque` - Upper bound of torque the motor may apply
/// - `drive_enabled` - When false, the motor is off and the angle does not advance
/// - `angle` - Current joint angle in radians
///
/// # Example
/// ```ignore
/// let mut joint = RevoluteJoint::with_drive(5.0);
/// joint.drive_velocity = -joint.drive_velocity; // reverse the motor
/// ```
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RevoluteJoint {
    pub drive_velocity: f32,
    pub max_drive_torque: f32,
    pub drive_enabled: bool,
    pub angle: f32,
}

impl Default for RevoluteJoint {
    fn default() -> Self {
        Self::new()
    }
}

impl RevoluteJoint {
    /// Joint with the motor enabled but not moving.
    pub fn new() -> Self {
        RevoluteJoint {
            drive_velocity: 0.0,
            max_drive_torque: 100.0,
            drive_enabled: true,
            angle: 0.0,
        }
    }

    /// Joint with the motor enabled at the given target speed.
    pub fn with_drive(drive_velocity: f32) -> Self {
        RevoluteJoint {
            drive_velocity,
            ..Self::new()
        }
    }

    /// Reverse the motor direction.
    pub fn flip_drive(&mut self) {
        self.drive_velocity = -self.drive_velocity;
    }
}
