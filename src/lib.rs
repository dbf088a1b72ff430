pub mod config;
pub mod error;
pub mod kernel;
pub mod outputs;
pub mod services;
pub mod vision;

// Re-export specific items if needed for convenient access
pub use error::{Error, Result};
pub use kernel::reactor::Reactor;
pub use kernel::session::Companion;
