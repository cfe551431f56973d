pub mod chain;
pub mod controller;
pub mod gradient;
pub mod joint;
pub mod solver;

pub use chain::*;
pub use controller::*;
pub use gradient::*;
pub use joint::*;
pub use solver::*;
