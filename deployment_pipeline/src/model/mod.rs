//!
//! The pipeline data model.
//!

pub mod deployment;
pub mod report;
pub mod timestamp;
