//! Drives a three-joint arm toward a fixed point, one solver sweep per tick.
//!
//! Usage: reach_target [config.toml]
//!
//! The optional TOML file may set `sampling_step`, `learning_rate` and
//! `convergence_threshold`. Run with `RUST_LOG=debug` to see each tick.

use armik::prelude::*;
use armik::prelude::glam::Vec3;

const MAX_TICKS: u64 = 500;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading solver config from {path}");
            SolverConfig::load(path)?
        }
        None => SolverConfig::default().with_sampling_step(1.0),
    };

    let chain = Chain::new(vec![
        Joint::new(Vec3::new(0.0, 1.0, 0.0), JointAxis::Y)?,
        Joint::new(Vec3::new(1.0, 0.0, 0.0), JointAxis::Z)?,
        Joint::new(Vec3::new(1.0, 0.0, 0.0), JointAxis::Z)?,
        Joint::new(Vec3::new(0.5, 0.0, 0.0), JointAxis::Y)?,
    ])?;
    let target = Vec3::new(0.5, 2.0, 1.2);
    let mut controller = IkController::new(chain, config)?;

    while controller.ticks() < MAX_TICKS {
        controller.step(target);
        if controller.last_outcome() == Some(SweepOutcome::AlreadyConverged) {
            break;
        }
    }

    log::info!(
        "Stopped after {} ticks, distance {:.5}",
        controller.ticks(),
        controller.distance_to(target)
    );
    for (i, (joint, position)) in controller
        .chain()
        .joints()
        .iter()
        .zip(controller.chain().joint_positions(controller.angles()))
        .enumerate()
    {
        println!(
            "joint {i}: axis {:?}, angle {:8.3} deg, position {position:.3}",
            joint.axis(),
            joint.angle()
        );
    }
    println!("end effector {:.3} (target {target})", controller.end_effector());
    Ok(())
}
