//! Classification dry run: shows what the heuristics see, without a model call.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::assist::{Language, extract_last_message};
use crate::cli::InputArgs;
use crate::config::ResolveOptions;
use crate::ui::Style;

use super::assist::{load_assistant, read_text};

#[derive(Debug, Serialize)]
struct ClassifyReport {
    language: Language,
    is_conversation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_message: Option<String>,
}

pub fn run_classify(text: Option<String>, input: &InputArgs, json: bool) -> Result<()> {
    let assistant = load_assistant(&ResolveOptions::default())?;
    let text = read_text(text, input)?;
    let text = text.trim();

    let classification = assistant.classify(text);
    let report = ClassifyReport {
        language: classification.language,
        is_conversation: classification.is_conversation,
        last_message: classification
            .is_conversation
            .then(|| extract_last_message(text)),
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize classification")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{}", Style::header("Classification"));
    println!(
        "  {}      {}",
        Style::label("language"),
        Style::value(report.language)
    );
    println!(
        "  {}  {}",
        Style::label("conversation"),
        Style::value(if report.is_conversation { "yes" } else { "no" })
    );
    if let Some(last_message) = &report.last_message {
        println!("  {}", Style::label("last message"));
        for line in last_message.lines() {
            println!("    {line}");
        }
    }

    Ok(())
}
