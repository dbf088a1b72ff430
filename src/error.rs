use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Synthesis backend reported a failure for a single task.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Local speech engine process could not run or exited badly.
    #[error("speech engine error: {0}")]
    Engine(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
