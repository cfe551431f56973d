//! Armik - gradient-descent inverse kinematics for serial joint chains
//!
//! A chain of revolute joints is nudged toward a target one sweep per tick:
//! each joint's sensitivity is estimated with a forward finite difference
//! and the angle is stepped against it, from the end effector back to the
//! root. The host owns the loop and calls the solver once per simulation
//! step.

pub use armik_core as core;
pub use armik_kinematics as kinematics;

pub mod prelude {
    pub use crate::core::{
        ArmikError, JointAxis, Result, SolverConfig, Transform,
    };
    pub use crate::kinematics::{
        AngleVector, Chain, GradientSolver, IkController, Joint, SweepOutcome,
    };
    pub use glam;
}
