//! # context - Selection-based assistant
//!
//! `context` takes text you highlighted or pasted, works out whether it is a
//! chat conversation or informational content, and asks an
//! OpenAI-compatible model for a reply you can paste straight back.
//!
//! ## Quick Start
//!
//! ```bash
//! # Reply to the last message of a copied conversation
//! context --clipboard --intent "accept, suggest 7pm"
//!
//! # Explain a file
//! context --file notes.md --length short
//!
//! # Pipe text in and copy the answer back to the clipboard
//! pbpaste | context --copy
//!
//! # See what the heuristics think, without calling the model
//! context classify "Alice: hi\nBob: hey"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/context/config.toml`:
//!
//! ```toml
//! [context]
//! model = "gpt-4o-mini"
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//!
//! [classifier]
//! scan_lines = 5
//! min_matches = 2
//! ```

/// Text classification, prompt building, and model dispatch.
pub mod assist;

/// Command-line interface definitions and handlers.
pub mod cli;

/// System clipboard access.
pub mod clipboard;

/// Configuration file management.
pub mod config;

/// Input reading from arguments, files, the clipboard, and stdin.
pub mod input;

/// Global output configuration (quiet/verbose mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
