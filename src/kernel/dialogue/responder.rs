use std::sync::Arc;

use super::types::Intent;
use crate::kernel::emotion::types::EmotionLabel;
use crate::kernel::lexicon::Lexicon;

pub struct Responder {
    lexicon: Arc<Lexicon>,
}

impl Responder {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Keyword groups are tried greeting -> farewell -> thanks -> apology.
    pub fn detect_intent(&self, text: &str) -> Intent {
        Intent::CHECKED
            .into_iter()
            .find(|intent| {
                self.lexicon
                    .keywords(*intent)
                    .iter()
                    .any(|k| text.contains(k.as_str()))
            })
            .unwrap_or(Intent::Other)
    }

    /// Pick the canned reply for `text`. The emotion only selects the column;
    /// it never changes which intent matched.
    pub fn respond(&self, text: &str, emotion: EmotionLabel) -> String {
        self.respond_with_intent(text, emotion).1
    }

    pub fn respond_with_intent(&self, text: &str, emotion: EmotionLabel) -> (Intent, String) {
        let intent = self.detect_intent(text);
        let reply = match self.lexicon.responses.lookup(intent, emotion) {
            Some(fixed) => fixed.to_string(),
            None => self.lexicon.responses.fallback(emotion),
        };
        (intent, reply)
    }
}
