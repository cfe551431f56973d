use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmikError {
    #[error("chain needs at least 2 joints, got {joints}")]
    DegenerateChain { joints: usize },

    #[error("sampling step must be a finite positive angle, got {0}")]
    InvalidSamplingStep(f32),

    #[error("rotation axis ({x}, {y}, {z}) cannot be normalized")]
    DegenerateAxis { x: f32, y: f32, z: f32 },

    #[error("joint {joint} has a non-finite offset")]
    NonFiniteOffset { joint: usize },

    #[error("angle vector has {found} entries but the chain has {expected} joints")]
    AngleCountMismatch { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArmikError>;
