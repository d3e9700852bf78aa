//! Dataset description, citation and record schema.
use serde::Serialize;

use super::config::DatasetConfig;

pub const VERSION: &str = "3.01";

pub const HOMEPAGE: &str = "https://research.fb.com/downloads/babi/";

pub const LICENSE: &str = "CC License";

pub const DESCRIPTION: &str = "The Movie Dialog dataset (MDD) from Facebook is designed to measure how well models can perform at goal and non-goal orientated dialog centered around the topic of movies (question answering, recommendation and discussion).
Details and baseline results on this dataset can be found in the paper.

The file format is the same as in the bAbI tasks. The IDs for a given dialog start at 1 and increase.
Each ID consists of one turn for each speaker (an “exchange”), which are tab separated.
When the IDs in a file reset back to 1 you can consider the following sentences as a new conversation.

We use the data provided by the ParlAI project at https://github.com/facebookresearch/ParlAI.
";

pub const CITATION: &str = r#"@misc{dodge2016evaluating,
      title={Evaluating Prerequisite Qualities for Learning End-to-End Dialog Systems},
      author={Jesse Dodge and Andreea Gane and Xiang Zhang and Antoine Bordes and Sumit Chopra and Alexander Miller and Arthur Szlam and Jason Weston},
      year={2016},
      eprint={1511.06931},
      archivePrefix={arXiv},
      primaryClass={cs.CL}
}
"#;

/// Type and name of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: &'static str,
    pub dtype: &'static str,
}

/// Record schema: `{conversation_id: int32, utterance_id: int32, text: string, answer: string}`.
pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            name: "conversation_id",
            dtype: "int32",
        },
        Feature {
            name: "utterance_id",
            dtype: "int32",
        },
        Feature {
            name: "text",
            dtype: "string",
        },
        Feature {
            name: "answer",
            dtype: "string",
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub config_name: &'static str,
    pub config_description: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub homepage: &'static str,
    pub license: &'static str,
    pub version: &'static str,
    pub download_url: &'static str,
    pub features: Vec<Feature>,
}

impl DatasetInfo {
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            config_name: config.name,
            config_description: config.description,
            description: DESCRIPTION,
            citation: CITATION,
            homepage: HOMEPAGE,
            license: LICENSE,
            version: VERSION,
            download_url: config.archive.url(),
            features: features(),
        }
    }
}
