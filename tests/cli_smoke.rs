#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points `XDG_CONFIG_HOME` at an empty temp dir and removes the
//! API key from the environment, so no real config or network is used.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn context(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("context").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("OPENAI_API_KEY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    context(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection-based assistant"))
        .stdout(predicate::str::contains("--intent"))
        .stdout(predicate::str::contains("--style"))
        .stdout(predicate::str::contains("--length"))
        .stdout(predicate::str::contains("--no-llm"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    context(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_offline_informational_output() {
    let home = TempDir::new().unwrap();
    let text = "hello ".repeat(30);

    context(&home)
        .args(["--no-llm", &text])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[Informational content detected:",
        ))
        .stdout(predicate::str::contains(&text[..100]));
}

#[test]
fn test_offline_conversation_from_stdin() {
    let home = TempDir::new().unwrap();

    context(&home)
        .arg("--no-llm")
        .write_stdin("Alice: are you free tonight?\nBob: maybe, what time works?\n")
        .assert()
        .success()
        .stdout("[Conversation detected. Last message: Bob: maybe, what time works?...]\n");
}

#[test]
fn test_offline_reads_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("notes.txt");
    fs::write(&file, "Photosynthesis converts light into chemical energy.").unwrap();

    context(&home)
        .args(["--no-llm", "--file", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photosynthesis converts light"));
}

#[test]
fn test_missing_file_fails() {
    let home = TempDir::new().unwrap();

    context(&home)
        .args(["--no-llm", "--file", "/nonexistent/notes.txt"])
        .assert()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_blank_input_is_rejected() {
    let home = TempDir::new().unwrap();

    context(&home)
        .args(["--no-llm", "   "])
        .assert()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No text provided."));
}

#[test]
fn test_missing_credential_names_variable() {
    let home = TempDir::new().unwrap();

    context(&home)
        .arg("What does this mean?")
        .assert()
        .code(exitcode::CONFIG)
        .stdout(predicate::str::starts_with("Error:"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_missing_credential_uses_configured_variable() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("context");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.toml"),
        "[context]\napi_key_env = \"CONTEXT_SMOKE_TEST_KEY\"\n",
    )
    .unwrap();

    context(&home)
        .env_remove("CONTEXT_SMOKE_TEST_KEY")
        .arg("What does this mean?")
        .assert()
        .code(exitcode::CONFIG)
        .stdout(predicate::str::contains("CONTEXT_SMOKE_TEST_KEY"));
}

#[test]
fn test_invalid_length_is_rejected() {
    let home = TempDir::new().unwrap();

    context(&home)
        .args(["--length", "huge", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("short"));
}

#[test]
fn test_classify_conversation() {
    let home = TempDir::new().unwrap();

    context(&home)
        .args(["classify", "Alice: hi\nBob: how are you\nAlice: good thanks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("english"))
        .stdout(predicate::str::contains("yes"))
        .stdout(predicate::str::contains("Alice: good thanks"));
}

#[test]
fn test_classify_json() {
    let home = TempDir::new().unwrap();

    let output = context(&home)
        .args(["classify", "--json", "你好，世界"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["language"], "chinese");
    assert_eq!(json["is_conversation"], false);
    assert!(json.get("last_message").is_none());
}

#[test]
fn test_classify_respects_configured_thresholds() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("context");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[classifier]\nmin_matches = 3\n").unwrap();

    let output = context(&home)
        .args(["classify", "--json", "Alice: hi\nBob: hey"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_conversation"], false);
}

#[test]
fn test_malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("context");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[context\n").unwrap();

    context(&home)
        .args(["--no-llm", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_prompt_preview() {
    let home = TempDir::new().unwrap();

    context(&home)
        .args(["prompt", "--intent", "say yes", "--length", "short", "Alice: lunch?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User intent: say yes"))
        .stdout(predicate::str::contains("Length: short"))
        .stdout(predicate::str::contains("Style:").not())
        .stdout(predicate::str::contains("Highlighted text:\nAlice: lunch?"));
}

#[test]
fn test_styles_list() {
    let home = TempDir::new().unwrap();

    context(&home)
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested styles"))
        .stdout(predicate::str::contains("formal"))
        .stdout(predicate::str::contains("technical"))
        .stdout(predicate::str::contains("medium"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();

    context(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4o-mini"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"))
        .stdout(predicate::str::contains("(not set)"));
}
