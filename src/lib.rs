//! Motor flip library.
//!
//! This module exposes the ECS components, resources, systems, and events that
//! make a revolute joint's motor reverse on a timer, for use in integration
//! tests and by the headless runner.

pub mod components;
pub mod events;
pub mod hash;
pub mod resources;
pub mod scene;
pub mod systems;
