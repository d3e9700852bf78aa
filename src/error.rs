//! Error enum
use std::fmt;
use std::path::PathBuf;

use crate::dataset::Split;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// No readable file could be found for the requested (configuration, split).
    StreamUnavailable {
        config: String,
        split: Split,
        tried: Vec<PathBuf>,
    },
    /// A line did not match the `<id> <text>[\t<answer>]` grammar.
    MalformedLine {
        index: usize,
        line: String,
        reason: String,
    },
    UnknownConfig(String),
    Serde(serde_json::Error),
    Reqwest(reqwest::Error),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::StreamUnavailable {
                config,
                split,
                tried,
            } => write!(
                f,
                "no file for config {} ({}), tried {:?}",
                config, split, tried
            ),
            Error::MalformedLine {
                index,
                line,
                reason,
            } => write!(f, "malformed line {}: {} ({:?})", index, reason, line),
            Error::UnknownConfig(name) => write!(f, "unknown configuration: {}", name),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Reqwest(e) => write!(f, "download error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Reqwest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
