use std::sync::Arc;

use super::types::EmotionLabel;
use crate::kernel::lexicon::Lexicon;

pub struct EmotionClassifier {
    lexicon: Arc<Lexicon>,
}

impl EmotionClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// First label (in trigger-set order) with any phrase contained in `text`.
    ///
    /// Matching is literal and case-sensitive. When phrases from several
    /// emotions occur, the earlier emotion wins. Falls back to `Neutral`.
    pub fn classify(&self, text: &str) -> EmotionLabel {
        self.lexicon
            .triggers
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| text.contains(p.as_str())))
            .map(|(label, _)| *label)
            .unwrap_or_default()
    }
}
