/*! Stream resolution

A [StreamResolver] turns a (configuration, split) couple into something readable.
Parsing does not care where the lines come from, so tests and other storages can provide their own resolver.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use log::debug;

use crate::error::Error;

use super::config::{DatasetConfig, Split};

pub trait StreamResolver {
    fn resolve(&self, config: &DatasetConfig, split: Split) -> Result<Box<dyn BufRead>, Error>;
}

/// Resolves split files inside an extracted data directory.
#[derive(Debug, Clone)]
pub struct DirResolver {
    data_dir: PathBuf,
}

impl DirResolver {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// First existing candidate for the given split.
    pub fn locate(&self, config: &DatasetConfig, split: Split) -> Result<PathBuf, Error> {
        let tried = config.candidates(&self.data_dir, split);
        match tried.iter().find(|p| p.is_file()) {
            Some(path) => {
                debug!("[{}] {} split at {:?}", config.name, split, path);
                Ok(path.clone())
            }
            None => Err(Error::StreamUnavailable {
                config: config.name.to_string(),
                split,
                tried,
            }),
        }
    }
}

impl StreamResolver for DirResolver {
    fn resolve(&self, config: &DatasetConfig, split: Split) -> Result<Box<dyn BufRead>, Error> {
        let path = self.locate(config, split)?;
        let f = File::open(path)?;
        Ok(Box::new(BufReader::new(f)))
    }
}
