use std::time::Instant;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeechTaskId(pub Uuid);

impl SpeechTaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpeechTaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// One utterance waiting for the synthesis backend. Immutable once queued.
#[derive(Debug, Clone)]
pub struct SpeechTask {
    pub id: SpeechTaskId,
    /// Arrival order, starting at 0
    pub seq: u64,
    pub text: String,
    pub enqueued_at: Instant,
}

impl SpeechTask {
    pub fn new(seq: u64, text: String) -> Self {
        Self {
            id: SpeechTaskId::new(),
            seq,
            text,
            enqueued_at: Instant::now(),
        }
    }
}
