/*! Dialog parsing

Dialog files follow the bAbI format: each line holds a turn number, the utterance and an optional tab-separated answer.
Turn numbers increase within a conversation and go back down when a new one starts.

```text
1 what movies did Jaws's director direct?\tDuel,Jurassic Park
2 what genre is Duel?\tThriller
1 who wrote Stand by Me?\tStephen King
```

yields three [Record]s, the first two in conversation `0` and the last one in conversation `1`.
!*/
mod line;
pub mod reader;
mod record;
mod tracker;

pub use line::{parse_line, Line};
pub use reader::{DialogReader, OnMalformed};
pub use record::{normalize_answer, Record};
pub use tracker::ConversationTracker;
