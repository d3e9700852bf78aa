//! Parsed dialog turns.
use serde::{Deserialize, Serialize};

/// A single dialog turn.
///
/// `sequence_index` is serialized as `id` to match the dataset keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "id")]
    pub sequence_index: usize,
    pub conversation_id: i32,
    pub utterance_id: i32,
    pub text: String,
    /// Empty when the line has no answer.
    pub answer: String,
}

/// Answers are comma separated lists (`Action,Drama`).
/// They are joined with spaces instead.
pub fn normalize_answer(answer: &str) -> String {
    answer.replace(',', " ")
}
