use std::fmt;

use crate::kernel::lexicon::SpeakerLabels;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Avatar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub content: String,
}

/// Append-only chat log. Each turn adds the user line, then the reply.
#[derive(Debug)]
pub struct Transcript {
    labels: SpeakerLabels,
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new(labels: SpeakerLabels) -> Self {
        Self {
            labels,
            entries: Vec::new(),
        }
    }

    pub fn push_turn(&mut self, user: &str, reply: &str) {
        self.entries.push(TranscriptEntry {
            speaker: Speaker::User,
            content: user.to_string(),
        });
        self.entries.push(TranscriptEntry {
            speaker: Speaker::Avatar,
            content: reply.to_string(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries appended after the first `from`.
    pub fn since(&self, from: usize) -> &[TranscriptEntry] {
        self.entries.get(from..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render<'a>(&'a self, entry: &'a TranscriptEntry) -> RenderedLine<'a> {
        let label = match entry.speaker {
            Speaker::User => &self.labels.user,
            Speaker::Avatar => &self.labels.avatar,
        };
        RenderedLine {
            label: label.as_str(),
            entry,
        }
    }
}

pub struct RenderedLine<'a> {
    label: &'a str,
    entry: &'a TranscriptEntry,
}

impl fmt::Display for RenderedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.entry.content)
    }
}
