/*! Dataset glue

Everything around the parser: configurations, locating split files, downloading archives and describing the dataset.
!*/
pub mod config;
pub mod download;
pub mod info;
pub mod resolver;

pub use config::{Archive, ConfigTable, DatasetConfig, Split};
pub use download::Downloader;
pub use info::DatasetInfo;
pub use resolver::{DirResolver, StreamResolver};
