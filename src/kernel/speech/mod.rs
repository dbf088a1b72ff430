pub mod dispatcher;
pub mod task;

pub use dispatcher::SpeechDispatcher;
pub use task::{SpeechTask, SpeechTaskId};
