//! Job files and console output for the `blockcut` binary.
//!
//! This crate provides:
//! - JSON job file parsing into validated pieces and a block
//! - The built-in foam block demo job
//! - Plain-text report summaries

mod job;
mod summary;

pub use job::{demo_job, BlockSpec, Job, JobError, PieceSpec};
pub use summary::{print_summary, render_summary};
