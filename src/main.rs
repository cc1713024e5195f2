use anyhow::Error;
use clap::Parser;
use std::io;

use context_cli::assist::AssistError;
use context_cli::cli::commands::{assist, classify, configure, prompt, styles};
use context_cli::cli::{Args, Command};
use context_cli::config::ResolveOptions;
use context_cli::output::{self, OutputConfig};
use context_cli::ui::Style;
use context_cli::warn;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        verbose: args.verbose,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    let code = match run(args).await {
        Ok(code) => code,
        Err(err) => {
            warn!("{} {err:#}", Style::error("Error:"));
            exit_code_for(&err)
        }
    };

    std::process::exit(code);
}

async fn run(args: Args) -> anyhow::Result<exitcode::ExitCode> {
    match args.command {
        Some(Command::Classify { text, input, json }) => {
            classify::run_classify(text, &input, json)?;
        }
        Some(Command::Prompt {
            text,
            input,
            prompt: prompt_args,
        }) => {
            prompt::run_prompt(text, &input, prompt_args)?;
        }
        Some(Command::Styles) => {
            styles::list_styles();
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_config()?;
            } else {
                configure::run_configure()?;
            }
        }
        None => {
            let options = assist::AssistOptions {
                text: args.text,
                input: args.input,
                prompt: args.prompt,
                no_llm: args.no_llm,
                copy: args.copy,
                resolve: ResolveOptions {
                    api_key: args.api_key,
                    model: args.model,
                    endpoint: args.endpoint,
                },
            };
            return assist::run_assist(options).await;
        }
    }

    Ok(exitcode::OK)
}

fn exit_code_for(err: &Error) -> exitcode::ExitCode {
    if let Some(assist_err) = err.downcast_ref::<AssistError>() {
        return assist_err.exit_code();
    }

    let io_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<io::Error>());
    match io_error {
        Some(e) if e.kind() == io::ErrorKind::NotFound => exitcode::NOINPUT,
        Some(_) => exitcode::IOERR,
        None => exitcode::SOFTWARE,
    }
}
