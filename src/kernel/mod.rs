pub mod dialogue;
pub mod emotion;
pub mod event;
pub mod lexicon;
pub mod reactor;
pub mod session;
pub mod speech;
pub mod telemetry;
pub mod time;
