//! CLI argument and configuration failure tests — no network I/O.
//!
//! Every command points `PIXGEN_CONFIG` at a nonexistent file and clears the
//! API key variables, so failures fire before any live adapter could be used.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pixgen").unwrap();
    cmd.env("PIXGEN_CONFIG", "/nonexistent/pixgen/config.toml")
        .env_remove("PIXGEN_REPLAY")
        .env_remove("PIXGEN_REC")
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_API_BASE_URL")
        .env_remove("OPENAI_IMAGE_MODEL");
    cmd
}

#[test]
fn missing_prompt_exits_with_error() {
    // Neither prompt nor --prompt-file given → resolve_prompt() returns an error
    cmd().assert().failure().stderr(predicate::str::contains("Provide a prompt string"));
}

#[test]
fn missing_api_key_exits_with_error() {
    // Live mode with no key configured anywhere
    cmd()
        .args(["a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn unreadable_prompt_file_exits_with_error() {
    cmd()
        .args(["-p", "/nonexistent/prompt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn malformed_config_exits_with_error() {
    let dir = std::env::temp_dir().join("pixgen_cli_badconfig_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.toml");
    std::fs::write(&path, "not valid toml {{{").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap(), "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn prompt_and_prompt_file_conflict() {
    cmd().args(["-p", "some-file.txt", "a cat"]).assert().failure();
}
