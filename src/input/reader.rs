use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::clipboard;
use crate::{output, status};

/// Where the highlighted text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text passed directly on the command line.
    Text(String),
    File(PathBuf),
    Clipboard,
    /// Piped stdin, then the clipboard, then an interactive paste.
    Auto,
}

impl InputSource {
    /// Picks the source from CLI values. A file wins over the clipboard,
    /// which wins over positional text.
    pub fn from_args(text: Option<String>, file: Option<PathBuf>, clipboard: bool) -> Self {
        match (file, clipboard, text) {
            (Some(path), _, _) => Self::File(path),
            (None, true, _) => Self::Clipboard,
            (None, false, Some(text)) => Self::Text(text),
            (None, false, None) => Self::Auto,
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn read(source: InputSource) -> Result<String> {
        match source {
            InputSource::Text(text) => Ok(text),
            InputSource::File(path) => Self::read_file(&path),
            InputSource::Clipboard => Ok(clipboard::read_text()?),
            InputSource::Auto => Self::read_auto(),
        }
    }

    fn read_file(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn read_auto() -> Result<String> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Self::read_stdin();
        }

        if let Ok(text) = clipboard::read_text()
            && !text.trim().is_empty()
        {
            return Ok(text);
        }

        status!("Enter or paste the highlighted text (Ctrl+D or Ctrl+Z to finish):");
        output::flush_stderr();
        Self::read_stdin()
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_source_priority() {
        let text = Some("inline".to_string());
        let file = Some(PathBuf::from("notes.txt"));

        assert_eq!(
            InputSource::from_args(text.clone(), file.clone(), true),
            InputSource::File(PathBuf::from("notes.txt"))
        );
        assert_eq!(
            InputSource::from_args(text.clone(), None, true),
            InputSource::Clipboard
        );
        assert_eq!(
            InputSource::from_args(text, None, false),
            InputSource::Text("inline".to_string())
        );
        assert_eq!(InputSource::from_args(None, None, false), InputSource::Auto);
    }

    #[test]
    fn test_read_inline_text() {
        let content = InputReader::read(InputSource::Text("Bob: hi".to_string())).unwrap();
        assert_eq!(content, "Bob: hi");
    }

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let content =
            InputReader::read(InputSource::File(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(content.trim(), "Hello, World!");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(InputSource::File(PathBuf::from(
            "/nonexistent/path/to/file.txt",
        )));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "こんにちは世界！🌍\n日本語テスト";
        write!(temp_file, "{content}").unwrap();

        let result =
            InputReader::read(InputSource::File(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let content =
            InputReader::read(InputSource::File(temp_file.path().to_path_buf())).unwrap();
        assert!(content.is_empty());
    }
}
