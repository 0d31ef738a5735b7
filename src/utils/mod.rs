/// Module containing environment variable helpers
pub mod config;
/// Module containing bounded-wait helpers
pub mod deadline;
/// Module containing logging utilities
pub mod logger;

pub use deadline::*;
pub use logger::*;
