// Core data models

pub mod task;
pub mod display;

pub use task::*;
pub use display::*;
