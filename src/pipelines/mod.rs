//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the [Convert] pipeline,
//! which turns the dialog files of a configuration into JSON lines.
pub mod convert;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use convert::{Convert, SplitStats};
pub use pipeline::Pipeline;
