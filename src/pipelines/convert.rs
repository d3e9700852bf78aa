//! Dialog files to JSON lines conversion.
//!
//! For a given configuration, each split is resolved, parsed and written into `<dst>/<config>/<split>.jsonl`.
//! Splits are processed in parallel, one thread each. They share nothing but the (read-only) resolver.
//!
//! # Errors
//! A failing split does not stop the others and leaves no output file behind. Every error is logged and the first one
//! (in train, validation, test order) is returned once all splits are done.
use std::io::BufRead;
use std::path::PathBuf;

use log::{error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::{DatasetConfig, Split, StreamResolver};
use crate::dialog::{DialogReader, OnMalformed};
use crate::error::Error;
use crate::io::checksum::gen_checksum_file;
use crate::io::{RecordWriter, WriterTrait};

use super::pipeline::Pipeline;

/// Outcome of a split conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitStats {
    pub split: Split,
    pub path: PathBuf,
    pub nb_records: usize,
    pub nb_conversations: usize,
    pub nb_skipped: usize,
}

pub struct Convert<R> {
    resolver: R,
    config: DatasetConfig,
    dst: PathBuf,
    on_malformed: OnMalformed,
    checksum: bool,
}

impl<R> Convert<R>
where
    R: StreamResolver + Sync,
{
    pub fn new(resolver: R, config: DatasetConfig, dst: PathBuf) -> Self {
        Self {
            resolver,
            config,
            dst,
            on_malformed: OnMalformed::default(),
            checksum: false,
        }
    }

    pub fn on_malformed(mut self, on_malformed: OnMalformed) -> Self {
        self.on_malformed = on_malformed;
        self
    }

    /// Also write a sha384 checksum file of the generated splits.
    pub fn checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    fn out_dir(&self) -> PathBuf {
        self.dst.join(self.config.name)
    }

    /// Convert a split, removing its output file if anything goes wrong.
    fn convert_split(&self, split: Split) -> Result<SplitStats, Error> {
        let name = self.config.name;
        info!("[{}] converting {} split", name, split);

        let stream = self.resolver.resolve(&self.config, split)?;
        let path = self.out_dir().join(format!("{}.jsonl", split.name()));
        let result = self.write_split(stream, split);

        if result.is_err() && path.exists() {
            warn!("[{}] removing incomplete {:?}", name, path);
            std::fs::remove_file(&path)?;
        }
        result
    }

    fn write_split(&self, stream: Box<dyn BufRead>, split: Split) -> Result<SplitStats, Error> {
        let mut reader = DialogReader::new(stream).with_policy(self.on_malformed);
        let mut writer = RecordWriter::new(&self.out_dir(), split.name())?;

        let mut last_conversation = None;
        for record in reader.by_ref() {
            let record = record?;
            last_conversation = Some(record.conversation_id);
            writer.write_single(&record)?;
        }
        writer.flush()?;

        let stats = SplitStats {
            split,
            path: writer.path().to_path_buf(),
            nb_records: writer.nb_records(),
            nb_conversations: last_conversation.map_or(0, |c| c as usize + 1),
            nb_skipped: reader.skipped(),
        };
        info!(
            "[{}] {} done: {} records, {} conversations, {} skipped lines",
            self.config.name, split, stats.nb_records, stats.nb_conversations, stats.nb_skipped
        );
        Ok(stats)
    }
}

impl<R> Pipeline<Vec<SplitStats>> for Convert<R>
where
    R: StreamResolver + Sync,
{
    fn run(&self) -> Result<Vec<SplitStats>, Error> {
        std::fs::create_dir_all(self.out_dir())?;

        let results: Vec<(Split, Result<SplitStats, Error>)> = Split::ALL
            .par_iter()
            .map(|split| (*split, self.convert_split(*split)))
            .collect();

        let mut stats = Vec::with_capacity(results.len());
        let mut first_error = None;
        for (split, result) in results {
            match result {
                Ok(s) => stats.push(s),
                Err(e) => {
                    error!("[{}] {} split failed: {}", self.config.name, split, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        if self.checksum {
            let files: Vec<PathBuf> = stats.iter().map(|s| s.path.clone()).collect();
            gen_checksum_file(&self.out_dir(), self.config.name, &files)?;
        }

        Ok(stats)
    }
}
