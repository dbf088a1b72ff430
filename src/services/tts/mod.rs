//! Speech synthesis backends.
//!
//! Backends are driven from the speech worker thread only, one call at a
//! time, so they take `&mut self` and may block until audio is done.

pub mod local;
pub mod remote;
pub mod voices;

use tracing::info;

use crate::config::{BackendKind, Config};
use crate::Result;

pub use local::LocalSynthesizer;
pub use remote::RemoteSynthesizer;

pub trait SpeechSynthesizer: Send {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Speak `text`. An error fails this one task only.
    fn speak(&mut self, text: &str) -> Result<()>;
}

impl<S: SpeechSynthesizer + ?Sized> SpeechSynthesizer for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        (**self).speak(text)
    }
}

/// Backend used when speech output is switched off.
#[derive(Debug, Default)]
pub struct SilentSynthesizer;

impl SpeechSynthesizer for SilentSynthesizer {
    fn name(&self) -> &'static str {
        "silent"
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        info!(chars = text.chars().count(), "speech disabled, skipping synthesis");
        Ok(())
    }
}

/// Build the backend selected in `config`.
///
/// The local engine probes its voice list here, so call this once at startup.
pub fn build_synthesizer(config: &Config) -> Box<dyn SpeechSynthesizer> {
    match config.speech.backend {
        BackendKind::Local => Box::new(LocalSynthesizer::from_config(
            &config.speech.local,
            config.language,
        )),
        BackendKind::Remote => Box::new(RemoteSynthesizer::from_config(&config.speech.remote)),
        BackendKind::Silent => Box::new(SilentSynthesizer),
    }
}
