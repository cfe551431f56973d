use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ArmikError, Result};

/// Finite-difference probe size, in degrees.
pub const DEFAULT_SAMPLING_STEP: f32 = 5.0;
/// Scale from a degree-per-length gradient to a degree update. Unitless; it
/// makes up for the gradient not being normalized.
pub const DEFAULT_LEARNING_RATE: f32 = 100.0;
/// Distance, in scene units, under which the end effector counts as arrived.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub sampling_step: f32,
    pub learning_rate: f32,
    pub convergence_threshold: f32,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self {
            sampling_step: DEFAULT_SAMPLING_STEP,
            learning_rate: DEFAULT_LEARNING_RATE,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }

    pub fn with_sampling_step(mut self, sampling_step: f32) -> Self {
        self.sampling_step = sampling_step;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_convergence_threshold(mut self, convergence_threshold: f32) -> Self {
        self.convergence_threshold = convergence_threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.sampling_step.is_finite() && self.sampling_step > 0.0) {
            return Err(ArmikError::InvalidSamplingStep(self.sampling_step));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ArmikError::InvalidConfiguration(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if !(self.convergence_threshold.is_finite() && self.convergence_threshold >= 0.0) {
            return Err(ArmikError::InvalidConfiguration(format!(
                "convergence_threshold must be finite and non-negative, got {}",
                self.convergence_threshold
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SolverConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
