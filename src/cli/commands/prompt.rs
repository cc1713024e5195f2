//! Prompt preview: prints exactly what the model would receive.

use anyhow::Result;

use crate::cli::{InputArgs, PromptArgs};
use crate::config::ResolveOptions;

use super::assist::{load_assistant, prompt_options, read_text};

pub fn run_prompt(text: Option<String>, input: &InputArgs, prompt: PromptArgs) -> Result<()> {
    let assistant = load_assistant(&ResolveOptions::default())?;
    let text = read_text(text, input)?;

    println!("{}", assistant.prompt_for(&text, &prompt_options(prompt)));

    Ok(())
}
