pub mod responder;
pub mod types;
