//! Runtime configuration, loaded from TOML with every field defaulted.

use std::path::Path;

use serde::Deserialize;

use crate::kernel::lexicon::Language;
use crate::{Error, Result};

pub const MAX_FRAME_RATE: u32 = 240;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Language,
    /// Used when `RUST_LOG` is not set
    pub log_level: String,
    /// Driver ticks per second
    pub frame_rate: u32,
    pub speech: SpeechConfig,
    pub vision: VisionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::Ja,
            log_level: "info".to_string(),
            frame_rate: 60,
            speech: SpeechConfig::default(),
            vision: VisionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Run a text-to-speech program and wait for playback to finish
    Local,
    /// POST to a VOICEVOX-style synthesis server
    #[default]
    Remote,
    /// Only log what would have been spoken
    #[serde(rename = "none")]
    #[value(name = "none")]
    Silent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechConfig {
    pub backend: BackendKind,
    pub local: LocalEngineConfig,
    pub remote: RemoteEngineConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalEngineConfig {
    /// Engine executable. Platform default when unset.
    pub program: Option<String>,
    /// Words per minute
    pub rate: u32,
    /// 0.0 - 1.0
    pub volume: f32,
    /// Substring looked for in voice names. Language default when unset.
    pub voice_hint: Option<String>,
}

impl Default for LocalEngineConfig {
    fn default() -> Self {
        Self {
            program: None,
            rate: 150,
            volume: 0.9,
            voice_hint: None,
        }
    }
}

impl LocalEngineConfig {
    pub fn program(&self) -> String {
        self.program.clone().unwrap_or_else(|| {
            if cfg!(target_os = "macos") {
                "say".to_string()
            } else {
                "espeak-ng".to_string()
            }
        })
    }

    pub fn voice_hint(&self, language: Language) -> String {
        self.voice_hint.clone().unwrap_or_else(|| match language {
            Language::Ja => "japanese".to_string(),
            Language::En => "english".to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteEngineConfig {
    pub base_url: String,
    pub speaker: u32,
    pub timeout_secs: u64,
}

impl Default for RemoteEngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:50021".to_string(),
            speaker: 1,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisionConfig {
    pub enabled: bool,
    /// Flip frames horizontally before landmark detection
    pub mirror: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mirror: true,
            width: 320,
            height: 240,
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(Error::Config(format!(
                "frame_rate must be within 1..={MAX_FRAME_RATE}, got {}",
                self.frame_rate
            )));
        }
        let volume = self.speech.local.volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(Error::Config(format!(
                "speech.local.volume must be within 0.0..=1.0, got {volume}"
            )));
        }
        if self.speech.remote.base_url.trim().is_empty() {
            return Err(Error::Config("speech.remote.base_url is empty".to_string()));
        }
        if self.vision.width == 0 || self.vision.height == 0 {
            return Err(Error::Config("vision frame size must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Tick period derived from `frame_rate`.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_micros(1_000_000 / u64::from(self.frame_rate.max(1)))
    }
}
