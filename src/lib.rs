pub mod dataset;
pub mod dialog;
pub mod error;
pub mod io;
pub mod pipelines;
