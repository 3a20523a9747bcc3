//! ECS resources made available to systems.
//!
//! Overview
//! - `messagequeue` – messages posted with a delay, waiting for delivery
//! - `simconfig` – runner settings loaded from an INI file
//! - `simulation` – whether the simulation is running
//! - `worldtime` – simulation time and delta
pub mod messagequeue;
pub mod simconfig;
pub mod simulation;
pub mod worldtime;
