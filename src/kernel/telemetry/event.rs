use serde::{Deserialize, Serialize};

use crate::kernel::dialogue::types::Intent;
use crate::kernel::emotion::types::EmotionLabel;
use crate::kernel::time::Tick;

// Allowed: labels, ids, ticks, counts
// Forbidden: user text, replies, frames, landmark coordinates

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TelemetryEvent {
    TurnCompleted {
        tick: Tick,
        emotion: EmotionLabel,
        intent: Intent,
    },

    SpeechEnqueued {
        tick: Tick,
        task_id: uuid::Uuid,
    },

    /// Submission had nowhere to go (speech disabled or worker gone).
    SpeechSkipped {
        tick: Tick,
    },

    FrameProcessed {
        tick: Tick,
        face_detected: bool,
    },

    /// Source had nothing to read this tick.
    FrameMissing {
        tick: Tick,
    },
}
