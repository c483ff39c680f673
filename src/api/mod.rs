pub mod openai;

pub use openai::{delta_text, ChatMessage, OpenAiApi};
