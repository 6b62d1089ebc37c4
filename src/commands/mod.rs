//! Command implementations

pub mod batch;
pub mod run;

pub use batch::run_batch;
pub use run::{RunError, RunReport, run_source};
