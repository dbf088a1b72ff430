use std::sync::Arc;

use tracing::info;

use super::dialogue::responder::Responder;
use super::dialogue::types::Turn;
use super::emotion::classifier::EmotionClassifier;
use super::lexicon::Lexicon;
use super::speech::{SpeechDispatcher, SpeechTaskId};
use crate::outputs::transcript::Transcript;

/// Chat context: read-only tables, the transcript and the speech queue.
///
/// Built once at startup and owned by the driver. Nothing in here is
/// process-global.
pub struct Companion {
    lexicon: Arc<Lexicon>,
    classifier: EmotionClassifier,
    responder: Responder,
    transcript: Transcript,
    speech: Option<SpeechDispatcher>,
}

impl Companion {
    pub fn new(lexicon: Lexicon, speech: Option<SpeechDispatcher>) -> Self {
        let lexicon = Arc::new(lexicon);
        Self {
            classifier: EmotionClassifier::new(lexicon.clone()),
            responder: Responder::new(lexicon.clone()),
            transcript: Transcript::new(lexicon.labels.clone()),
            lexicon,
            speech,
        }
    }

    /// Classify, reply, log both lines, queue the reply for speech.
    ///
    /// Empty input is ignored and produces no turn.
    pub fn submit(&mut self, input: &str) -> Option<Turn> {
        self.submit_tracked(input).map(|(turn, _)| turn)
    }

    /// Like `submit`, also returning the speech task id when one was queued.
    pub fn submit_tracked(&mut self, input: &str) -> Option<(Turn, Option<SpeechTaskId>)> {
        if input.is_empty() {
            return None;
        }

        let emotion = self.classifier.classify(input);
        let (intent, response) = self.responder.respond_with_intent(input, emotion);
        info!(emotion = %emotion, intent = %intent, "turn resolved");

        self.transcript.push_turn(input, &response);

        let task = self
            .speech
            .as_mut()
            .and_then(|speech| speech.enqueue(response.clone()));

        Some((
            Turn {
                emotion,
                intent,
                response,
            },
            task,
        ))
    }

    /// Queue the lexicon's self-introduction for speech.
    ///
    /// Bypasses the classifier and leaves the transcript untouched.
    pub fn introduce(&mut self) -> Option<SpeechTaskId> {
        let text = self.lexicon.introduction.clone();
        info!("introduction requested");
        self.speech.as_mut().and_then(|speech| speech.enqueue(text))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Stop accepting speech and wait for queued utterances to finish.
    pub fn shutdown(mut self) {
        if let Some(speech) = self.speech.take() {
            speech.shutdown();
        }
    }
}
