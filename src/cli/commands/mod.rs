//! Subcommand implementations.

/// Default command: process highlighted text.
pub mod assist;

/// Classification dry run.
pub mod classify;

/// Configure command handler.
pub mod configure;

/// Prompt preview.
pub mod prompt;

/// Suggested style listing.
pub mod styles;
