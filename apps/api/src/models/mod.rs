pub mod message;

pub use message::{ChatRequest, Message, Role};
