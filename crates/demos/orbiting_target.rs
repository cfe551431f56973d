//! Follows a target circling above the base. The target moves every tick,
//! so the arm keeps re-entering descent instead of settling.

use armik::prelude::*;
use armik::prelude::glam::Vec3;

const TICKS: u32 = 600;
const TICK_SECONDS: f32 = 1.0 / 60.0;
const ORBIT_RADIUS: f32 = 1.5;
const ORBIT_SPEED: f32 = 0.5;

fn main() -> Result<()> {
    env_logger::init();

    let chain = Chain::new(vec![
        Joint::new(Vec3::new(0.0, 1.0, 0.0), JointAxis::Y)?,
        Joint::new(Vec3::new(1.0, 0.0, 0.0), JointAxis::Y)?,
        Joint::new(Vec3::new(1.0, 0.0, 0.0), JointAxis::Y)?,
    ])?;
    let mut controller = IkController::new(chain, SolverConfig::default().with_sampling_step(1.0))?;

    let mut worst = 0.0f32;
    for tick in 0..TICKS {
        let t = tick as f32 * TICK_SECONDS * ORBIT_SPEED;
        let target = Vec3::new(ORBIT_RADIUS * t.cos(), 1.0, ORBIT_RADIUS * t.sin());
        controller.step(target);

        let distance = controller.distance_to(target);
        if tick >= TICKS / 2 {
            worst = worst.max(distance);
        }
        if tick % 60 == 0 {
            log::info!(
                "t={:5.2}s distance {:.4} angles {:?}",
                tick as f32 * TICK_SECONDS,
                distance,
                controller.angles()
            );
        }
    }

    println!("worst tracking error over the second half: {worst:.4}");
    Ok(())
}
