use std::fmt;

/// Failure kinds the assistant reports instead of a reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistError {
    /// A platform service the request needs is not available.
    #[error("{0}")]
    MissingCapability(String),

    #[error("{env_var} is not set. Export it or supply an API key explicitly.")]
    MissingCredential { env_var: String },

    #[error("could not reach the completion endpoint: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("No text provided.")]
    EmptyInput,
}

impl AssistError {
    /// Exit code the command line uses for this failure.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::EmptyInput => exitcode::DATAERR,
            Self::MissingCredential { .. } => exitcode::CONFIG,
            Self::MissingCapability(_) | Self::Transport(_) => exitcode::UNAVAILABLE,
            Self::Provider { .. } | Self::MalformedResponse(_) => exitcode::PROTOCOL,
        }
    }
}

/// Result of processing one piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Text ready to paste.
    Reply(String),
    Failed(AssistError),
}

impl CompletionOutcome {
    pub const fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_))
    }

    pub const fn error(&self) -> Option<&AssistError> {
        match self {
            Self::Reply(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}

impl From<Result<String, AssistError>> for CompletionOutcome {
    fn from(result: Result<String, AssistError>) -> Self {
        match result {
            Ok(reply) => Self::Reply(reply),
            Err(err) => Self::Failed(err),
        }
    }
}

impl fmt::Display for CompletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reply(reply) => f.write_str(reply),
            Self::Failed(err) => write!(f, "Error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_displays_verbatim() {
        let outcome = CompletionOutcome::Reply("Error: this is the model talking".to_string());
        assert!(outcome.is_reply());
        assert_eq!(outcome.to_string(), "Error: this is the model talking");
    }

    #[test]
    fn test_failure_displays_with_prefix() {
        let outcome = CompletionOutcome::Failed(AssistError::MissingCredential {
            env_var: "OPENAI_API_KEY".to_string(),
        });
        assert!(!outcome.is_reply());
        assert!(outcome.to_string().starts_with("Error: OPENAI_API_KEY"));
    }

    #[test]
    fn test_from_result() {
        let ok: CompletionOutcome = Ok::<_, AssistError>("hi".to_string()).into();
        assert_eq!(ok, CompletionOutcome::Reply("hi".to_string()));

        let err: CompletionOutcome = Err(AssistError::EmptyInput).into();
        assert_eq!(err.error(), Some(&AssistError::EmptyInput));
    }

    #[test]
    fn test_exit_codes_are_nonzero() {
        let errors = [
            AssistError::MissingCapability("clipboard".to_string()),
            AssistError::MissingCredential {
                env_var: "KEY".to_string(),
            },
            AssistError::Transport("refused".to_string()),
            AssistError::Provider {
                status: 401,
                body: String::new(),
            },
            AssistError::MalformedResponse("no choices".to_string()),
            AssistError::EmptyInput,
        ];
        assert!(errors.iter().all(|err| err.exit_code() != exitcode::OK));
    }

    #[test]
    fn test_missing_credential_message_names_only_the_variable() {
        let message = AssistError::MissingCredential {
            env_var: "OPENAI_API_KEY".to_string(),
        }
        .to_string();
        assert!(message.starts_with("OPENAI_API_KEY is not set."));
        assert!(!message.contains("--"));
    }
}
