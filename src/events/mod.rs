//! Event types exchanged between systems and observers.
//!
//! Submodules:
//! - [`internaltrigger`] – delayed wake-up messages a component posts to itself
//! - [`simulation`] – lifecycle notification fired when simulation starts
pub mod internaltrigger;
pub mod simulation;
