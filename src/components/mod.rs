//! ECS components for entities.
//!
//! Submodules overview:
//! - [`entityname`] – name tag for scene-spawned entities
//! - [`jointmotorflip`] – periodically reverses a joint motor; start marker
//! - [`revolutejoint`] – rotational joint with a velocity motor drive

pub mod entityname;
pub mod jointmotorflip;
pub mod revolutejoint;
