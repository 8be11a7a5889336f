pub mod task;

pub use task::TaskRepo;
