pub mod axis;
pub mod config;
pub mod error;
pub mod transform;

pub use axis::*;
pub use config::*;
pub use error::*;
pub use transform::*;
