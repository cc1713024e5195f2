mod client;
mod conversation;
mod language;
mod options;
mod outcome;
mod processor;
mod prompt;

pub use client::{CompletionBackend, CompletionRequest, OpenAiClient};
pub use conversation::{ConversationRules, extract_last_message, is_conversation};
pub use language::{Language, detect_language};
pub use options::{Length, Options, SUGGESTED_STYLES};
pub use outcome::{AssistError, CompletionOutcome};
pub use processor::{AssistSettings, Assistant, ClassificationResult};
pub use prompt::{INSTRUCTIONS, SYSTEM_MESSAGE, build_prompt};
