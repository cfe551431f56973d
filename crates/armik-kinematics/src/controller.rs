use armik_core::{Result, SolverConfig};
use glam::Vec3;

use crate::{AngleVector, Chain, GradientSolver, SweepOutcome};

/// Host-facing driver adapter: owns a chain and its angle vector and runs
/// one solver sweep per tick.
pub struct IkController {
    chain: Chain,
    solver: GradientSolver,
    angles: AngleVector,
    ticks: u64,
    last_outcome: Option<SweepOutcome>,
}

impl IkController {
    /// Seeds the angle vector from the chain's current joint angles.
    pub fn new(chain: Chain, config: SolverConfig) -> Result<Self> {
        let solver = GradientSolver::new(config)?;
        let angles = chain.angles();
        log::info!(
            "IK controller ready: {} joints, sampling step {}, learning rate {}, threshold {}",
            chain.len(),
            config.sampling_step,
            config.learning_rate,
            config.convergence_threshold
        );
        Ok(Self {
            chain,
            solver,
            angles,
            ticks: 0,
            last_outcome: None,
        })
    }

    /// Advances one tick toward `target` and returns the updated angles,
    /// which are also applied to the chain's live pose.
    pub fn step(&mut self, target: Vec3) -> &[f32] {
        self.ticks += 1;
        let outcome = self.solver.sweep(&mut self.chain, target, &mut self.angles);
        self.chain.write_angles(&self.angles);
        self.last_outcome = Some(outcome);

        if matches!(outcome, SweepOutcome::Converged { .. } | SweepOutcome::Completed) {
            log::debug!(
                "tick {}: {:?}, distance {:.5}",
                self.ticks,
                outcome,
                self.chain.distance_to_target(target, &self.angles)
            );
        }
        &self.angles
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_outcome(&self) -> Option<SweepOutcome> {
        self.last_outcome
    }

    pub fn end_effector(&self) -> Vec3 {
        self.chain.end_effector_position(&self.angles)
    }

    pub fn distance_to(&self, target: Vec3) -> f32 {
        self.chain.distance_to_target(target, &self.angles)
    }
}
