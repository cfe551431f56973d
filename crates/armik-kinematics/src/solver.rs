use armik_core::{Result, SolverConfig};
use glam::Vec3;

use crate::{gradient, Chain};

/// What a single sweep did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Already within the threshold; no angle was touched.
    AlreadyConverged,
    /// Reached the threshold right after updating `joint`; joints closer to
    /// the root were skipped.
    Converged { joint: usize },
    /// Every joint was updated once and the target is still out of reach.
    Completed,
    /// The target was NaN or infinite; no angle was touched.
    Skipped,
}

/// Per-tick coordinate descent over a chain's joint angles.
///
/// Each call makes at most one pass from the end effector back to the root.
/// Every update is visible to the gradient estimates of the joints after it
/// in the same pass.
#[derive(Clone, Debug, Default)]
pub struct GradientSolver {
    config: SolverConfig,
}

impl GradientSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn is_converged(&self, chain: &Chain, target: Vec3, angles: &[f32]) -> bool {
        chain.distance_to_target(target, angles) < self.config.convergence_threshold
    }

    pub fn partial_gradient(&self, chain: &Chain, target: Vec3, angles: &mut [f32], index: usize) -> f32 {
        gradient::partial_gradient(chain, target, angles, index, self.config.sampling_step)
    }

    /// Runs one sweep, updating `angles` in place and mirroring each
    /// accepted update into the chain's live pose.
    ///
    /// Fails only if `angles` does not have one entry per joint, before
    /// anything is modified.
    pub fn solve(&self, chain: &mut Chain, target: Vec3, angles: &mut [f32]) -> Result<SweepOutcome> {
        chain.check_angles(angles)?;
        Ok(self.sweep(chain, target, angles))
    }

    pub(crate) fn sweep(&self, chain: &mut Chain, target: Vec3, angles: &mut [f32]) -> SweepOutcome {
        if !target.is_finite() {
            log::warn!("ignoring non-finite target {target}");
            return SweepOutcome::Skipped;
        }
        if self.is_converged(chain, target, angles) {
            log::debug!("target {target} already within threshold, skipping sweep");
            return SweepOutcome::AlreadyConverged;
        }

        for i in (0..chain.len()).rev() {
            let gradient = self.partial_gradient(chain, target, angles, i);
            angles[i] -= self.config.learning_rate * gradient;

            let distance = chain.distance_to_target(target, angles);
            log::trace!("joint {i}: gradient {gradient:.6}, angle {:.3}, distance {distance:.6}", angles[i]);

            if distance < self.config.convergence_threshold {
                // The converging angle stays in `angles`; the caller applies it.
                log::debug!("converged after updating joint {i}, distance {distance:.6}");
                return SweepOutcome::Converged { joint: i };
            }

            chain.set_joint_angle(i, angles[i]);
        }

        SweepOutcome::Completed
    }
}
