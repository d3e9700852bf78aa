/*! Conversation boundary detection

Files do not delimit conversations: turn numbers start back at a lower value when a new conversation begins.
!*/

/// Tracks the current conversation from the sequence of turn numbers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversationTracker {
    conversation_id: i32,
    // 0 means that no line has been seen yet.
    previous_utterance_id: i32,
}

impl ConversationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next turn number and get the conversation it belongs to.
    ///
    /// A new conversation starts when the turn number is strictly lower than the previous one.
    pub fn observe(&mut self, utterance_id: i32) -> i32 {
        if utterance_id < self.previous_utterance_id {
            self.conversation_id += 1;
        }
        self.previous_utterance_id = utterance_id;
        self.conversation_id
    }
}
