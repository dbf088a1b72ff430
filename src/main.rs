use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use vhuman::config::{BackendKind, Config};
use vhuman::kernel::event::InputEvent;
use vhuman::kernel::lexicon::{Language, Lexicon};
use vhuman::kernel::speech::SpeechDispatcher;
use vhuman::services::tts::build_synthesizer;
use vhuman::vision::pipeline::{FacePipeline, NoFaceProvider, SyntheticFrameSource};
use vhuman::{Companion, Reactor};

/// Console virtual human: type a line, get a reply, hear it spoken.
#[derive(Debug, Parser)]
#[command(name = "vhuman", version)]
struct Cli {
    /// TOML config file
    #[arg(long, env = "VHUMAN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the speech backend
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Override the phrase set
    #[arg(long, value_enum)]
    language: Option<Language>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(backend) = cli.backend {
        config.speech.backend = backend;
    }
    if let Some(language) = cli.language {
        config.language = language;
    }

    // Logs go to stderr; stdout carries the transcript.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(language = ?config.language, backend = ?config.speech.backend, "vhuman booting");

    let speech = SpeechDispatcher::spawn(build_synthesizer(&config))
        .context("failed to start speech worker")?;
    let companion = Companion::new(Lexicon::for_language(config.language), Some(speech));

    let face = config.vision.enabled.then(|| {
        FacePipeline::new(
            Box::new(SyntheticFrameSource::new(config.vision.width, config.vision.height)),
            Box::new(NoFaceProvider),
            config.vision.mirror,
        )
    });

    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, companion, face, config.tick_interval());

    // Stdin reader on a plain thread so a pending read never holds up runtime shutdown.
    std::thread::spawn(move || {
        println!("Type a message and press Enter. /intro to introduce, /quit to exit.");
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Err(e) = tx.blocking_send(InputEvent::from_line(&line)) {
                tracing::error!("Failed to send input: {}", e);
                break;
            }
        }
    });

    tokio::select! {
        _ = reactor.run() => {}
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }

    Ok(())
}
