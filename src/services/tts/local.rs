use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::voices::{list_voices, select_voice, EngineFlavor};
use super::SpeechSynthesizer;
use crate::config::LocalEngineConfig;
use crate::kernel::lexicon::Language;
use crate::{Error, Result};

/// Speaks through a local TTS program and blocks until it exits.
#[derive(Debug, Clone)]
pub struct LocalSynthesizer {
    program: String,
    flavor: EngineFlavor,
    rate: u32,
    volume: f32,
    voice: Option<String>,
}

impl LocalSynthesizer {
    /// Rate and volume are fixed for the lifetime of the engine.
    /// The voice is the first one advertising `voice_hint`, else the engine default.
    pub fn new(program: impl Into<String>, rate: u32, volume: f32, voice_hint: &str) -> Self {
        let program = program.into();
        let flavor = EngineFlavor::detect(&program);

        let voices = list_voices(&program, flavor);
        let voice = select_voice(&voices, voice_hint).map(|v| v.id.clone());
        match &voice {
            Some(id) => info!(program = %program, voice = %id, "local speech engine voice selected"),
            None => debug!(
                program = %program,
                hint = voice_hint,
                available = voices.len(),
                "no matching voice, using engine default"
            ),
        }

        Self {
            program,
            flavor,
            rate,
            volume: volume.clamp(0.0, 1.0),
            voice,
        }
    }

    pub fn from_config(config: &LocalEngineConfig, language: Language) -> Self {
        Self::new(
            config.program(),
            config.rate,
            config.volume,
            &config.voice_hint(language),
        )
    }

    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    /// Command line for one utterance.
    pub fn command_args(&self, text: &str) -> Vec<String> {
        let mut args = Vec::new();
        match self.flavor {
            EngineFlavor::Espeak => {
                // volume 1.0 is espeak's normal amplitude (100, range 0-200)
                args.push("-s".to_string());
                args.push(self.rate.to_string());
                args.push("-a".to_string());
                args.push(((self.volume * 100.0).round() as u32).to_string());
                if let Some(voice) = &self.voice {
                    args.push("-v".to_string());
                    args.push(voice.clone());
                }
                args.push(text.to_string());
            }
            EngineFlavor::Say => {
                args.push("-r".to_string());
                args.push(self.rate.to_string());
                if let Some(voice) = &self.voice {
                    args.push("-v".to_string());
                    args.push(voice.clone());
                }
                // say has no volume flag; use the inline embedded command
                args.push(format!("[[volm {:.2}]] {}", self.volume, text));
            }
        }
        args
    }
}

impl SpeechSynthesizer for LocalSynthesizer {
    fn name(&self) -> &'static str {
        "local"
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(self.command_args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| Error::Engine(format!("failed to run `{}`: {}", self.program, e)))?;

        if !status.success() {
            return Err(Error::Engine(format!("`{}` exited with {}", self.program, status)));
        }
        Ok(())
    }
}
