use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kernel::emotion::types::EmotionLabel;

/// What the user is doing with a message, as far as canned replies care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Farewell,
    Thanks,
    Apology,
    /// No keyword group matched. Answered with the fallback template.
    Other,
}

impl Intent {
    /// Keyword-checked intents in priority order. `Other` is never checked.
    pub const CHECKED: [Intent; 4] = [
        Intent::Greeting,
        Intent::Farewell,
        Intent::Thanks,
        Intent::Apology,
    ];

    pub const ALL: [Intent; 5] = [
        Intent::Greeting,
        Intent::Farewell,
        Intent::Thanks,
        Intent::Apology,
        Intent::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Thanks => "thanks",
            Intent::Apology => "apology",
            Intent::Other => "other",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one chat submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub emotion: EmotionLabel,
    pub intent: Intent,
    pub response: String,
}
