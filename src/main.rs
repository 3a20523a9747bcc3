//! Motor flip headless runner.
//!
//! Spawns a scene of revolute joints with [`JointMotorFlip`] scripts into a
//! **bevy_ecs** world and steps it at a fixed rate, logging every motor flip.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and apply CLI overrides
//! 2. Spawn the scene from `--scene` or a single default motor
//! 3. Register observers and build the schedule
//! 4. Step `WorldTime` by the fixed delta and run the schedule until `duration`
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --seconds 2 --duration 10
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use motorflip::components::entityname::EntityName;
use motorflip::components::jointmotorflip::JointMotorFlip;
use motorflip::components::revolutejoint::RevoluteJoint;
use motorflip::resources::messagequeue::MessageQueue;
use motorflip::resources::simconfig::SimConfig;
use motorflip::resources::simulation::SimulationState;
use motorflip::resources::worldtime::WorldTime;
use motorflip::scene::{default_scene, load_scene, spawn_scene};
use motorflip::systems::time::update_world_time;
use motorflip::systems::{build_schedule, init_world};

/// Reverse revolute joint motors on a timer.
#[derive(Parser)]
#[command(version, about = "Runs a headless simulation of timer-flipped joint motors.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON scene to spawn instead of the single default motor.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Default delay between flips in seconds.
    #[arg(long)]
    seconds: Option<f32>,

    /// Initial drive velocity of the default motor.
    #[arg(long, allow_hyphen_values = true)]
    velocity: Option<f32>,

    /// Simulated time in seconds.
    #[arg(long)]
    duration: Option<f32>,

    /// Fixed step in seconds.
    #[arg(long)]
    dt: Option<f32>,

    /// Spawn the default motor without a joint.
    #[arg(long)]
    no_joint: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SimConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(seconds) = cli.seconds {
        if seconds.is_nan() || seconds < 0.0 {
            error!("--seconds must be non-negative, got {}", seconds);
            std::process::exit(2);
        }
        config.flip_seconds = seconds;
    }
    if let Some(velocity) = cli.velocity {
        config.drive_velocity = velocity;
    }
    if let Some(duration) = cli.duration {
        config.duration = duration;
    }
    if let Some(dt) = cli.dt {
        if dt.is_nan() || dt <= 0.0 {
            error!("--dt must be positive, got {}", dt);
            std::process::exit(2);
        }
        config.fixed_delta = dt;
    }

    let scene = match &cli.scene {
        Some(path) => match load_scene(path) {
            Ok(scene) => scene,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => default_scene(config.drive_velocity, !cli.no_joint),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(SimulationState::running());
    init_world(&mut world);
    spawn_scene(&mut world, &scene, config.flip_seconds);

    let mut update = build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let steps = config.step_count();
    info!(
        "Running {} steps of {}s ({}s simulated)",
        steps, config.fixed_delta, config.duration
    );
    // First frame at t=0 fires the start hooks.
    update_world_time(&mut world, 0.0);
    update.run(&mut world);
    world.clear_trackers();
    for _ in 0..steps {
        update_world_time(&mut world, config.fixed_delta);
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame
    }

    let (elapsed, frames) = {
        let wt = world.resource::<WorldTime>();
        (wt.elapsed, wt.frame_count)
    };
    let pending = world.resource::<MessageQueue>().len();
    let mut query = world.query::<(Entity, &EntityName, Option<&RevoluteJoint>, &JointMotorFlip)>();
    for (entity, name, joint, flip) in query.iter(&world) {
        match joint {
            Some(joint) => info!(
                "{} ({:?}): drive_velocity={} angle={:.3} every {}s",
                name.as_str(),
                entity,
                joint.drive_velocity,
                joint.angle,
                flip.seconds
            ),
            None => info!("{} ({:?}): no joint, every {}s", name.as_str(), entity, flip.seconds),
        }
    }
    info!(
        "Finished at t={} after {} frames with {} pending message(s)",
        elapsed, frames, pending
    );
}
