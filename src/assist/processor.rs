use serde::Serialize;

use super::client::{CompletionBackend, CompletionRequest, OpenAiClient};
use super::conversation::{ConversationRules, extract_last_message, is_conversation};
use super::language::{Language, detect_language};
use super::options::Options;
use super::outcome::{AssistError, CompletionOutcome};
use super::prompt::build_prompt;

/// Number of characters shown by the offline preview.
const PREVIEW_CHARS: usize = 100;

/// What the heuristics concluded about a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub language: Language,
    pub is_conversation: bool,
}

/// Model and credential settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AssistSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key: Option<String>,
    /// Environment variable the credential was looked up in (for error messages).
    pub api_key_env: String,
    pub rules: ConversationRules,
}

/// Classifies highlighted text, builds the prompt, and dispatches it.
///
/// Holds no per-request state, so one instance can serve concurrent callers.
pub struct Assistant {
    settings: AssistSettings,
    backend: Box<dyn CompletionBackend>,
}

impl Assistant {
    /// Creates an assistant that talks to an OpenAI-compatible `endpoint`.
    pub fn new(settings: AssistSettings, endpoint: String) -> Self {
        Self::with_backend(settings, Box::new(OpenAiClient::new(endpoint)))
    }

    pub fn with_backend(settings: AssistSettings, backend: Box<dyn CompletionBackend>) -> Self {
        Self { settings, backend }
    }

    pub const fn settings(&self) -> &AssistSettings {
        &self.settings
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        ClassificationResult {
            language: detect_language(text),
            is_conversation: is_conversation(text, &self.settings.rules),
        }
    }

    /// Builds the prompt that would be sent for `text`.
    pub fn prompt_for(&self, text: &str, options: &Options) -> String {
        let text = text.trim();
        build_prompt(text, is_conversation(text, &self.settings.rules), options)
    }

    /// Processes `text` with the model, or locally when `use_llm` is false.
    pub async fn process(&self, text: &str, options: &Options, use_llm: bool) -> CompletionOutcome {
        let text = text.trim();
        if text.is_empty() {
            return CompletionOutcome::Failed(AssistError::EmptyInput);
        }

        if use_llm {
            self.complete(text, options).await.into()
        } else {
            CompletionOutcome::Reply(self.describe_offline(text))
        }
    }

    async fn complete(&self, text: &str, options: &Options) -> Result<String, AssistError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            AssistError::MissingCredential {
                env_var: self.settings.api_key_env.clone(),
            }
        })?;

        let request = CompletionRequest {
            model: self.settings.model.clone(),
            prompt: self.prompt_for(text, options),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        self.backend.complete(api_key, &request).await
    }

    /// Describes `text` without calling a model.
    pub fn describe_offline(&self, text: &str) -> String {
        if is_conversation(text, &self.settings.rules) {
            let last_message = extract_last_message(text);
            format!(
                "[Conversation detected. Last message: {}...]",
                preview(&last_message)
            )
        } else {
            format!("[Informational content detected: {}...]", preview(text))
        }
    }
}

fn preview(text: &str) -> &str {
    text.char_indices()
        .nth(PREVIEW_CHARS)
        .map_or(text, |(end, _)| &text[..end])
}
