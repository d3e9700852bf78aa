/*! Dataset configurations and splits.

The Movie Dialog dataset comes in several configurations, each of them having a train, a validation and a test split.
Those tables are plain values: build a [ConfigTable] (usually with [ConfigTable::default]) and pass it around.
!*/
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    /// Suffix appended to the configuration base path.
    pub fn suffix(&self) -> &'static str {
        match self {
            Split::Train => "_train.txt",
            Split::Validation => "_dev.txt",
            Split::Test => "_test.txt",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Archives the dataset files are distributed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Archive {
    /// ParlAI archive holding the qa, recommendation and knowledge base tasks.
    OtherTasks,
    /// Reddit discussions, distributed separately.
    Task4Reddit,
}

impl Archive {
    pub fn url(&self) -> &'static str {
        match self {
            Archive::OtherTasks => "http://parl.ai/downloads/moviedialog/moviedialog.tar.gz",
            Archive::Task4Reddit => "http://cs.nyu.edu/~xiang/task4_reddit.tgz",
        }
    }

    /// Local file name of the downloaded archive.
    pub fn file_name(&self) -> &'static str {
        match self {
            Archive::OtherTasks => "moviedialog.tar.gz",
            Archive::Task4Reddit => "task4_reddit.tgz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub archive: Archive,
    /// Directory components leading to the split files, the last one being the file stem.
    /// Empty when the configuration has no split files.
    pub path: &'static [&'static str],
}

impl DatasetConfig {
    pub fn has_splits(&self) -> bool {
        !self.path.is_empty()
    }

    /// Name of the split file (`task1_qa_train.txt`).
    pub fn file_name(&self, split: Split) -> Option<String> {
        self.path
            .last()
            .map(|stem| format!("{}{}", stem, split.suffix()))
    }

    /// Candidate locations of a split file inside an extracted data directory.
    ///
    /// The nested layout (`movie_dialog_dataset/task1_qa/task1_qa_train.txt`) comes first,
    /// then the flat one (`task1_qa_train.txt`).
    pub fn candidates(&self, data_dir: &Path, split: Split) -> Vec<PathBuf> {
        let file_name = match self.file_name(split) {
            Some(f) => f,
            None => return Vec::new(),
        };

        let mut nested = data_dir.to_path_buf();
        nested.extend(self.path);
        nested.push(&file_name);

        vec![nested, data_dir.join(&file_name)]
    }
}

/// Immutable list of the known configurations.
#[derive(Debug, Clone)]
pub struct ConfigTable {
    configs: Vec<DatasetConfig>,
}

impl ConfigTable {
    pub fn new(configs: Vec<DatasetConfig>) -> Self {
        Self { configs }
    }

    pub fn get(&self, name: &str) -> Result<&DatasetConfig, Error> {
        self.configs
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::UnknownConfig(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetConfig> {
        self.configs.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.configs.iter().map(|c| c.name).collect()
    }
}

impl Default for ConfigTable {
    fn default() -> Self {
        Self::new(vec![
            DatasetConfig {
                name: "qa",
                description: "Closed-domain QA dataset asking templated questions about movies, answerable from Wikipedia, similar to WikiMovies.",
                archive: Archive::OtherTasks,
                path: &["movie_dialog_dataset", "task1_qa"],
            },
            DatasetConfig {
                name: "recommendations",
                description: "Questions asking for movie recommendations.",
                archive: Archive::OtherTasks,
                path: &["movie_dialog_dataset", "task2_recs"],
            },
            DatasetConfig {
                name: "qa_recommendations",
                description: "Dialogs discussing questions about movies as well as recommendations.",
                archive: Archive::OtherTasks,
                path: &["movie_dialog_dataset", "task3_qarecs"],
            },
            DatasetConfig {
                name: "reddit",
                description: "Dialogs discussing Movies from Reddit (the Movies SubReddit).",
                archive: Archive::Task4Reddit,
                path: &["task4_reddit"],
            },
            DatasetConfig {
                name: "knowledge_base",
                description: "The knowledge base of information about the movies, actors and other entities that are mentioned in the dialogs.",
                archive: Archive::OtherTasks,
                path: &[],
            },
        ])
    }
}
