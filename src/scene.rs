//! JSON scene descriptions.
//!
//! A scene lists the entities to spawn, each with an optional revolute joint
//! and an optional [`JointMotorFlip`]. It is the authoring surface for the
//! per-instance flip delay.
//!
//! ```json
//! {
//!   "entities": [
//!     { "name": "door", "joint": { "drive_velocity": 5.0 }, "motor_flip": { "seconds": 10 } },
//!     { "name": "fan", "joint": { "drive_velocity": 2.0, "drive_enabled": false } },
//!     { "name": "orphan", "motor_flip": {} }
//!   ]
//! }
//! ```
//!
//! A `motor_flip` without `seconds` uses the configured default.

use bevy_ecs::prelude::*;
use log::info;
use serde::Deserialize;
use std::path::Path;

use crate::components::entityname::EntityName;
use crate::components::jointmotorflip::JointMotorFlip;
use crate::components::revolutejoint::RevoluteJoint;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SceneDescription {
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EntityDescription {
    pub name: String,
    #[serde(default)]
    pub joint: Option<JointDescription>,
    #[serde(default)]
    pub motor_flip: Option<MotorFlipDescription>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JointDescription {
    pub drive_velocity: f32,
    #[serde(default)]
    pub max_drive_torque: Option<f32>,
    #[serde(default)]
    pub drive_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MotorFlipDescription {
    #[serde(default)]
    pub seconds: Option<f32>,
}

/// Parse a scene from JSON text.
pub fn parse_scene(text: &str) -> Result<SceneDescription, String> {
    let scene: SceneDescription =
        serde_json::from_str(text).map_err(|e| format!("Invalid scene: {}", e))?;
    for entity in &scene.entities {
        let Some(seconds) = entity.motor_flip.as_ref().and_then(|m| m.seconds) else {
            continue;
        };
        if seconds.is_nan() || seconds < 0.0 {
            return Err(format!(
                "Entity '{}': motor_flip.seconds must be non-negative, got {}",
                entity.name, seconds
            ));
        }
    }
    Ok(scene)
}

/// Read and parse a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneDescription, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scene {}: {}", path.display(), e))?;
    parse_scene(&text)
}

/// Spawn every entity of `scene` into `world`.
///
/// `default_seconds` is used for flips that do not set their own delay.
/// Returns the spawned entities in scene order.
pub fn spawn_scene(world: &mut World, scene: &SceneDescription, default_seconds: f32) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(scene.entities.len());
    for desc in &scene.entities {
        let mut entity = world.spawn(EntityName::new(desc.name.clone()));
        if let Some(joint) = &desc.joint {
            let mut component = RevoluteJoint::with_drive(joint.drive_velocity);
            if let Some(torque) = joint.max_drive_torque {
                component.max_drive_torque = torque;
            }
            if let Some(enabled) = joint.drive_enabled {
                component.drive_enabled = enabled;
            }
            entity.insert(component);
        }
        if let Some(flip) = &desc.motor_flip {
            entity.insert(JointMotorFlip::new(flip.seconds.unwrap_or(default_seconds)));
        }
        spawned.push(entity.id());
    }
    info!("Spawned {} scene entities", spawned.len());
    spawned
}

/// Scene with one flipping joint, used when no scene file is given.
pub fn default_scene(drive_velocity: f32, with_joint: bool) -> SceneDescription {
    SceneDescription {
        entities: vec![EntityDescription {
            name: "motor".to_string(),
            joint: with_joint.then(|| JointDescription {
                drive_velocity,
                max_drive_torque: None,
                drive_enabled: None,
            }),
            motor_flip: Some(MotorFlipDescription::default()),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_parts() {
        let scene = parse_scene(
            r#"{ "entities": [
                { "name": "door", "joint": { "drive_velocity": 5.0 }, "motor_flip": { "seconds": 3 } },
                { "name": "orphan", "motor_flip": {} },
                { "name": "fan", "joint": { "drive_velocity": 2.0, "drive_enabled": false } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(scene.entities.len(), 3);
        assert_eq!(scene.entities[0].motor_flip.as_ref().unwrap().seconds, Some(3.0));
        assert!(scene.entities[1].joint.is_none());
        assert_eq!(scene.entities[1].motor_flip.as_ref().unwrap().seconds, None);
        assert!(scene.entities[2].motor_flip.is_none());
    }

    #[test]
    fn rejects_negative_seconds() {
        let err = parse_scene(r#"{ "entities": [ { "name": "x", "motor_flip": { "seconds": -1 } } ] }"#)
            .unwrap_err();
        assert!(err.contains("'x'"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_scene("{ entities: ").is_err());
    }

    #[test]
    fn spawn_uses_default_seconds() {
        let scene = parse_scene(
            r#"{ "entities": [
                { "name": "a", "joint": { "drive_velocity": 1.0, "max_drive_torque": 7 }, "motor_flip": {} },
                { "name": "b", "motor_flip": { "seconds": 2 } }
            ] }"#,
        )
        .unwrap();
        let mut world = World::new();
        let spawned = spawn_scene(&mut world, &scene, 10.0);

        assert_eq!(world.get::<JointMotorFlip>(spawned[0]).unwrap().seconds, 10.0);
        assert_eq!(world.get::<RevoluteJoint>(spawned[0]).unwrap().max_drive_torque, 7.0);
        assert_eq!(world.get::<JointMotorFlip>(spawned[1]).unwrap().seconds, 2.0);
        assert!(world.get::<RevoluteJoint>(spawned[1]).is_none());
        assert_eq!(world.get::<EntityName>(spawned[1]).unwrap().as_str(), "b");
    }

    #[test]
    fn default_scene_without_joint() {
        let scene = default_scene(5.0, false);
        assert!(scene.entities[0].joint.is_none());
        assert!(scene.entities[0].motor_flip.is_some());
    }
}
