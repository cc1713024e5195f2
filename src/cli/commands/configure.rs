//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, InquireError, Text};

use crate::config::{
    ConfigFile, ConfigManager, ContextConfig, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, ResolveOptions, resolve_config,
};
use crate::status;
use crate::ui::Style;

/// Prints the current configuration, with the credential redacted.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let resolved = resolve_config(&ResolveOptions::default(), &config)?;
    let settings = &resolved.settings;

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display().to_string())
    );
    print_row("model", &settings.model);
    print_row("endpoint", &resolved.endpoint);
    print_row("api_key_env", &settings.api_key_env);
    print_row(
        "api_key",
        if settings.api_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        },
    );
    print_row("temperature", &settings.temperature.to_string());
    print_row("max_tokens", &settings.max_tokens.to_string());
    print_row("scan_lines", &settings.rules.scan_lines.to_string());
    print_row("min_matches", &settings.rules.min_matches.to_string());

    Ok(())
}

fn print_row(label: &str, value: &str) {
    println!("  {}  {}", Style::label(format!("{label:12}")), Style::value(value));
}

/// Runs the configure command to edit default settings interactively.
///
/// Cancelling any prompt (Esc or Ctrl+C) leaves the config file untouched
/// and is not an error.
pub fn run_configure() -> Result<()> {
    skip_if_cancelled(run_configure_inner())
}

fn skip_if_cancelled(result: Result<()>) -> Result<()> {
    match result {
        Err(err) if err.downcast_ref::<InquireError>().is_some_and(is_cancelled) => {
            status!("\nConfiguration unchanged.");
            Ok(())
        }
        other => other,
    }
}

const fn is_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    let current = &config.context;
    let model = prompt_text(
        "Model:",
        current.model.as_deref().unwrap_or(DEFAULT_MODEL),
        "Model name sent with every request",
    )?;
    let endpoint = prompt_text(
        "Endpoint:",
        current.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
        "OpenAI-compatible base URL",
    )?;
    let api_key_env = prompt_text(
        "API key environment variable:",
        current.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV),
        "The key itself is read from this variable at run time",
    )?;
    let max_tokens = CustomType::<u32>::new("Max tokens:")
        .with_default(current.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
        .with_error_message("Please enter a positive whole number")
        .prompt()?;

    if max_tokens == 0 {
        bail!("Max tokens must be greater than 0");
    }

    config.context = ContextConfig {
        model: Some(model),
        endpoint: Some(endpoint),
        api_key_env: Some(api_key_env),
        max_tokens: Some(max_tokens),
        ..config.context.clone()
    };

    validate(&config)?;
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn prompt_text(message: &str, default: &str, help: &str) -> Result<String> {
    let value = Text::new(message)
        .with_default(default)
        .with_help_message(help)
        .prompt()?;

    let value = value.trim();
    if value.is_empty() {
        bail!("{} cannot be empty", message.trim_end_matches(':'));
    }

    Ok(value.to_string())
}

fn validate(config: &ConfigFile) -> Result<()> {
    resolve_config(&ResolveOptions::default(), config).map(|_| ())
}
