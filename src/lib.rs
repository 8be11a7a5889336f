//! todo - an interactive command-line to-do list
//!
//! This library provides the core functionality, including:
//! - The SQLite-backed task store
//! - Data models for tasks, task names, and display numbering
//! - The interactive command loop and its console
//!
//! # Example
//!
//! ```no_run
//! use todo::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod db;
pub mod models;
pub mod repo;
pub mod cli;
