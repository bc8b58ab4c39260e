pub mod config;
pub mod geometry;
pub mod task;

pub use config::*;
pub use geometry::*;
pub use task::*;
