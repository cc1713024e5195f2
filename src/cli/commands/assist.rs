use anyhow::Result;
use std::io::{self, Write};

use crate::assist::{AssistError, Assistant, CompletionOutcome, Options};
use crate::cli::{InputArgs, PromptArgs};
use crate::clipboard;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::{InputReader, InputSource};
use crate::ui::{Spinner, Style};
use crate::{debug, status, warn};

pub struct AssistOptions {
    pub text: Option<String>,
    pub input: InputArgs,
    pub prompt: PromptArgs,
    pub no_llm: bool,
    pub copy: bool,
    pub resolve: ResolveOptions,
}

/// Processes the highlighted text and prints the outcome to stdout.
///
/// Returns the process exit code: success for a reply, a kind-specific
/// code for a failed request.
pub async fn run_assist(options: AssistOptions) -> Result<exitcode::ExitCode> {
    let assistant = load_assistant(&options.resolve)?;
    let text = read_text(options.text, &options.input)?;
    let prompt_options = prompt_options(options.prompt);

    let classification = assistant.classify(text.trim());
    debug!(
        "{} {} | {} {}",
        Style::label("language"),
        Style::value(classification.language),
        Style::label("conversation"),
        Style::value(classification.is_conversation)
    );

    let use_llm = !options.no_llm;
    if use_llm {
        let settings = assistant.settings();
        debug!(
            "{} {} | {} {}",
            Style::label("model"),
            Style::value(&settings.model),
            Style::label("max_tokens"),
            Style::value(settings.max_tokens)
        );
    }

    let outcome = {
        let spinner = use_llm.then(|| Spinner::new("Thinking..."));
        let outcome = assistant.process(&text, &prompt_options, use_llm).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }
        outcome
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{outcome}")?;
    stdout.flush()?;

    match &outcome {
        CompletionOutcome::Reply(reply) => {
            if options.copy {
                copy_reply(reply);
            }
            Ok(exitcode::OK)
        }
        CompletionOutcome::Failed(err) => Ok(err.exit_code()),
    }
}

fn copy_reply(reply: &str) {
    match clipboard::write_text(reply) {
        Ok(()) => status!("{}", Style::success("Copied to clipboard")),
        Err(err) => warn!("{} {err}", Style::warning("Warning:")),
    }
}

/// Builds an assistant from the config file and CLI overrides.
pub(crate) fn load_assistant(resolve: &ResolveOptions) -> Result<Assistant> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let resolved = resolve_config(resolve, &file_config)?;
    Ok(Assistant::new(resolved.settings, resolved.endpoint))
}

/// Reads the highlighted text, rejecting blank input.
pub(crate) fn read_text(text: Option<String>, input: &InputArgs) -> Result<String> {
    let source = InputSource::from_args(text, input.file.clone(), input.clipboard);
    let text = InputReader::read(source)?;

    if text.trim().is_empty() {
        return Err(AssistError::EmptyInput.into());
    }

    Ok(text)
}

pub(crate) fn prompt_options(prompt: PromptArgs) -> Options {
    Options::new(prompt.intent, prompt.style, prompt.length)
}
