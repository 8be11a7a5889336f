pub mod command;
pub mod commands;
pub mod console;
pub mod error;
pub mod output;
pub mod session;

pub use command::*;
pub use commands::*;
pub use console::*;
pub use session::*;
