use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::SpeechSynthesizer;
use crate::config::RemoteEngineConfig;
use crate::{Error, Result};

/// Client for a VOICEVOX-style synthesis server.
///
/// The returned audio is read and dropped; there is no playback path.
pub struct RemoteSynthesizer {
    // Built on first use so it is created (and later dropped) on the worker
    // thread, outside any async runtime.
    client: Option<Client>,
    base_url: String,
    speaker: u32,
    timeout: Duration,
}

impl RemoteSynthesizer {
    pub fn new(base_url: impl Into<String>, speaker: u32, timeout: Duration) -> Self {
        Self {
            client: None,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            speaker,
            timeout,
        }
    }

    pub fn from_config(config: &RemoteEngineConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.speaker,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/audio_query", self.base_url)
    }

    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder().timeout(self.timeout).build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| Error::Synthesis("http client unavailable".to_string()))
    }
}

impl SpeechSynthesizer for RemoteSynthesizer {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        let url = self.endpoint();
        let speaker = self.speaker.to_string();
        let response = self
            .client()?
            .post(&url)
            .query(&[("text", text), ("speaker", speaker.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Synthesis(format!("synthesis server returned {status}")));
        }

        let audio = response.bytes()?;
        debug!(bytes = audio.len(), "synthesis payload received");
        Ok(())
    }
}
