use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::assist::Length;

#[derive(Parser, Debug)]
#[command(name = "context")]
#[command(about = "Selection-based assistant: answers or explains highlighted text")]
#[command(version)]
pub struct Args {
    /// Text to process (reads stdin, then the clipboard, if not provided)
    pub text: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub prompt: PromptArgs,

    /// Describe the text locally instead of calling the model
    #[arg(long)]
    pub no_llm: bool,

    /// API key (defaults to the OPENAI_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Copy the reply to the clipboard as well
    #[arg(long)]
    pub copy: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print classification details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where to read the highlighted text from.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read text from a file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Read text from the clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,
}

/// Optional annotations added to the prompt.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PromptArgs {
    /// Specific intent or instruction (e.g. "decline politely")
    #[arg(short = 'i', long)]
    pub intent: Option<String>,

    /// Style preference (see `context styles` for suggestions)
    #[arg(short = 's', long)]
    pub style: Option<String>,

    /// Length preference
    #[arg(short = 'l', long, value_enum)]
    pub length: Option<Length>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show how the text is classified, without calling the model
    Classify {
        /// Text to classify
        text: Option<String>,

        #[command(flatten)]
        input: InputArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the prompt that would be sent to the model
    Prompt {
        /// Text to build the prompt for
        text: Option<String>,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        prompt: PromptArgs,
    },
    /// List suggested style values
    Styles,
    /// Configure model, endpoint, and credential settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
