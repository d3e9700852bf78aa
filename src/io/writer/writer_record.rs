/*! JSON lines writer for dialog records.

Each [Record] is written on its own line in `<dst>/<name>.jsonl`.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::dialog::Record;
use crate::error::Error;

use super::WriterTrait;

pub struct RecordWriter {
    path: PathBuf,
    handle: BufWriter<File>,
    nb_records: usize,
}

impl RecordWriter {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records written so far.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }
}

impl WriterTrait for RecordWriter {
    type Item = Record;

    /// Create (or truncate) `<dst>/<name>.jsonl`.
    fn new(dst: &Path, name: &str) -> Result<Self, Error> {
        let path = dst.join(format!("{}.jsonl", name));
        debug!("creating record file {:?}", path);
        let handle = BufWriter::new(File::create(&path)?);
        Ok(Self {
            path,
            handle,
            nb_records: 0,
        })
    }

    fn write(&mut self, records: Vec<Record>) -> Result<(), Error> {
        for record in records {
            self.write_single(&record)?;
        }
        Ok(())
    }

    fn write_single(&mut self, record: &Record) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;
        self.nb_records += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader};

    use super::*;

    fn record(idx: usize, text: &str, answer: &str) -> Record {
        Record {
            sequence_index: idx,
            conversation_id: 0,
            utterance_id: idx as i32 + 1,
            text: text.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn write() {
        let dst = tempfile::tempdir().unwrap();
        let mut wr = RecordWriter::new(dst.path(), "test").unwrap();
        let records = vec![
            record(0, "who directed Jaws?", "Steven Spielberg"),
            record(1, "and \"Duel\"?", ""),
        ];
        wr.write(records.clone()).unwrap();
        wr.flush().unwrap();
        assert_eq!(wr.nb_records(), 2);

        let f = File::open(dst.path().join("test.jsonl")).unwrap();
        let read: Vec<Record> = BufReader::new(f)
            .lines()
            .map(|l| serde_json::from_str(&l.unwrap()).unwrap())
            .collect();
        assert_eq!(read, records);
    }

    #[test]
    fn missing_folder() {
        let dst = Path::new("does/not/exist");
        assert!(RecordWriter::new(dst, "train").is_err());
    }
}
