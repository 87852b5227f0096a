use std::path::Path;

use clap::Parser;
use httpmock::prelude::*;
use repo_badge::{ResolutionResult, SourceLabel, UnavailableReason};
use repo_badge_cli::app::run_with_env;
use repo_badge_cli::cli::Args;
use tempfile::TempDir;

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("repo-badge").chain(argv.iter().copied())).unwrap()
}

fn no_env(_: &str) -> Option<String> {
    None
}

/// An empty config file, so a real one under the user's config dir is never read.
fn empty_config(dir: &Path) -> String {
    let path = dir.join("config.toml");
    std::fs::write(&path, "").unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn writes_counted_badge() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/alice");
        then.status(200).body(r#"{"public_repos": 5}"#);
    });
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("assets").join("repo-count.svg");
    let config = empty_config(temp.path());

    let report = run_with_env(
        &args(&[
            "--owner",
            "alice",
            "--api-url",
            &server.base_url(),
            "--config",
            &config,
            "--output",
            output.to_str().unwrap(),
        ]),
        no_env,
    )
    .await;

    assert_eq!(report.result, ResolutionResult::counted(5, SourceLabel::Public));
    assert!(report.written);
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains(">5</text>"));
    assert!(svg.contains("alice"));
}

#[tokio::test]
async fn unwritable_output_still_returns() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/alice");
        then.status(200).body(r#"{"public_repos": 5}"#);
    });
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let output = blocker.join("badge.svg");
    let config = empty_config(temp.path());

    let report = run_with_env(
        &args(&[
            "--owner",
            "alice",
            "--api-url",
            &server.base_url(),
            "--config",
            &config,
            "--output",
            output.to_str().unwrap(),
        ]),
        no_env,
    )
    .await;

    assert!(!report.written);
    assert_eq!(report.result, ResolutionResult::counted(5, SourceLabel::Public));
    assert!(!output.exists());
}

#[tokio::test]
async fn invalid_api_url_writes_fallback_badge() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("badge.svg");
    let config = empty_config(temp.path());

    let report = run_with_env(
        &args(&[
            "--owner",
            "alice",
            "--api-url",
            "not a url",
            "--config",
            &config,
            "--output",
            output.to_str().unwrap(),
        ]),
        no_env,
    )
    .await;

    assert_eq!(
        report.result,
        ResolutionResult::unavailable(UnavailableReason::RequestError)
    );
    assert!(report.written);
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("request error"));
}

#[tokio::test]
async fn unreadable_config_file_writes_fallback_to_flag_output() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("badge.svg");
    let bad = temp.path().join("bad.toml");
    std::fs::write(&bad, "output = [").unwrap();

    let report = run_with_env(
        &args(&[
            "--owner",
            "alice",
            "--config",
            bad.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]),
        no_env,
    )
    .await;

    assert_eq!(
        report.result,
        ResolutionResult::unavailable(UnavailableReason::RequestError)
    );
    assert_eq!(report.output, output);
    assert!(output.is_file());
}
