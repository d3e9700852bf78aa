/*! Dialog reader

[DialogReader] implements [Iterator] over the [Record]s of a dialog file.

The reader is single-pass: it consumes the lines of the provided [BufRead] and keeps only the current conversation state.
Closing the underlying file is left to whoever owns it.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::{debug, warn};

use crate::error::Error;

use super::line::parse_line;
use super::record::{normalize_answer, Record};
use super::tracker::ConversationTracker;

/// What to do with a line that does not follow the dialog grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMalformed {
    /// Yield an [Error::MalformedLine] and stop.
    #[default]
    Abort,
    /// Log and carry on with the next line.
    Skip,
}

#[derive(Debug)]
pub struct DialogReader<R> {
    lines: Lines<R>,
    tracker: ConversationTracker,
    // raw line number, blank and skipped lines included.
    index: usize,
    on_malformed: OnMalformed,
    skipped: usize,
    done: bool,
}

impl DialogReader<BufReader<File>> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        debug!("opening dialog file {:?}", src);
        let f = File::open(src)?;
        Ok(Self::new(BufReader::new(f)))
    }
}

impl<R: BufRead> DialogReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            tracker: ConversationTracker::new(),
            index: 0,
            on_malformed: OnMalformed::default(),
            skipped: 0,
            done: false,
        }
    }

    pub fn with_policy(mut self, on_malformed: OnMalformed) -> Self {
        self.on_malformed = on_malformed;
        self
    }

    /// Number of malformed lines skipped so far (always 0 with [OnMalformed::Abort]).
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for DialogReader<R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(Error::Io(e)));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            let index = self.index;
            self.index += 1;

            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                continue;
            }

            let parsed = match parse_line(line) {
                Ok(parsed) => parsed,
                Err(reason) => match self.on_malformed {
                    OnMalformed::Abort => {
                        self.done = true;
                        return Some(Err(Error::MalformedLine {
                            index,
                            line: line.to_string(),
                            reason,
                        }));
                    }
                    OnMalformed::Skip => {
                        warn!("skipping line {}: {} ({:?})", index, reason, line);
                        self.skipped += 1;
                        continue;
                    }
                },
            };

            let conversation_id = self.tracker.observe(parsed.utterance_id);

            return Some(Ok(Record {
                sequence_index: index,
                conversation_id,
                utterance_id: parsed.utterance_id,
                text: parsed.text.to_string(),
                answer: parsed.answer.map(normalize_answer).unwrap_or_default(),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read(data: &str) -> Vec<Result<Record, Error>> {
        DialogReader::new(Cursor::new(data.to_string())).collect()
    }

    fn records(data: &str) -> Vec<Record> {
        read(data).into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn conversations() {
        let data = "1 a\n2 b\n3 c\n1 d\n2 e\n1 f\n2 g\n3 h\n4 i\n";
        let recs = records(data);
        let conv: Vec<i32> = recs.iter().map(|r| r.conversation_id).collect();
        let utt: Vec<i32> = recs.iter().map(|r| r.utterance_id).collect();
        let idx: Vec<usize> = recs.iter().map(|r| r.sequence_index).collect();
        assert_eq!(conv, vec![0, 0, 0, 1, 1, 2, 2, 2, 2]);
        assert_eq!(utt, vec![1, 2, 3, 1, 2, 1, 2, 3, 4]);
        assert_eq!(idx, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn answer_normalized() {
        let recs = records("3 what genre?\tAction,Drama");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].text, "what genre?");
        assert_eq!(recs[0].answer, "Action Drama");
    }

    #[test]
    fn no_answer() {
        let recs = records("1 hello there\n");
        assert_eq!(recs[0].text, "hello there");
        assert_eq!(recs[0].answer, "");
    }

    #[test]
    fn single_line() {
        let recs = records("4 only one");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].conversation_id, 0);
        assert_eq!(recs[0].sequence_index, 0);
    }

    #[test]
    fn empty_input() {
        assert!(read("").is_empty());
    }

    #[test]
    fn blank_lines_keep_index() {
        let recs = records("1 a\n\n2 b\r\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].sequence_index, 2);
        assert_eq!(recs[1].text, "b");
    }

    #[test]
    fn malformed_aborts() {
        let res = read("1 a\nabc no number\n2 b\n");
        assert_eq!(res.len(), 2);
        assert!(res[0].is_ok());
        match &res[1] {
            Err(Error::MalformedLine { index, line, .. }) => {
                assert_eq!(*index, 1);
                assert_eq!(line, "abc no number");
            }
            other => panic!("expected malformed line, got {:?}", other),
        }
    }

    #[test]
    fn io_error_ends_iteration() {
        let mut reader = DialogReader::new(Cursor::new(&b"1 a\n2 \xff\xfe\n3 c\n"[..]));
        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.utterance_id, 1);
        match reader.next() {
            Some(Err(Error::Io(e))) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test_log::test]
    fn malformed_skipped() {
        let mut reader = DialogReader::new(Cursor::new("1 a\nabc no number\n2 b\n1 c\n"))
            .with_policy(OnMalformed::Skip);
        let recs: Vec<Record> = reader.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(reader.skipped(), 1);
        let idx: Vec<usize> = recs.iter().map(|r| r.sequence_index).collect();
        assert_eq!(idx, vec![0, 2, 3]);
        assert_eq!(recs[2].conversation_id, 1);
    }

    #[test]
    fn reparse_is_identical() {
        let data = "1 a\tx,y\n2 b\n1 c\tz\n";
        assert_eq!(records(data), records(data));
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task1_qa_test.txt");
        std::fs::write(&path, "1 who?\tme\n1 who else?\tyou\n").unwrap();
        let recs: Vec<Record> = DialogReader::from_path(&path)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].conversation_id, 0);
    }

    #[test]
    fn missing_file() {
        let res = DialogReader::from_path(Path::new("does/not/exist.txt"));
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
