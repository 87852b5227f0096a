//! One resolve-render-write pass. Never fails: configuration, network and
//! filesystem problems are logged and still end in a badge when possible.

use std::path::PathBuf;

use repo_badge::{
    DEFAULT_OUTPUT_PATH, ResolutionResult, UnavailableReason, render_badge, resolve_repo_count,
    write_badge,
};
use tracing::{error, info};

use crate::cli::Args;
use crate::config::AppConfig;
use crate::error::AppError;

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub result: ResolutionResult,
    pub output: PathBuf,
    /// `false` when the badge could not be written.
    pub written: bool,
}

/// Runs against the process environment.
pub async fn run(args: &Args) -> RunReport {
    run_with_env(args, |key| std::env::var(key).ok()).await
}

pub async fn run_with_env(args: &Args, env: impl Fn(&str) -> Option<String>) -> RunReport {
    let config = match AppConfig::load_with(args, env) {
        Ok(config) => config,
        Err(e) => {
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
            return config_failure(&e, output).await;
        }
    };

    let client_config = match config.client_config() {
        Ok(client_config) => client_config,
        Err(e) => return config_failure(&e, config.output).await,
    };

    info!(
        owner = config.display_name(),
        authenticated = config.token.is_some(),
        api_url = %config.api_url,
        "Resolving repository count"
    );
    let result = resolve_repo_count(config.owner.as_ref(), client_config).await;
    publish(config.display_name(), result, config.output.clone()).await
}

async fn config_failure(e: &AppError, output: PathBuf) -> RunReport {
    error!(error = %e, "Invalid configuration, writing fallback badge");
    let result = ResolutionResult::unavailable(UnavailableReason::RequestError);
    publish("", result, output).await
}

async fn publish(name: &str, result: ResolutionResult, output: PathBuf) -> RunReport {
    let svg = render_badge(name, &result);
    let written = match write_badge(&output, &svg).await {
        Ok(()) => {
            info!(path = %output.display(), "Badge written");
            true
        }
        Err(e) => {
            error!(path = %output.display(), error = %e, "Failed to write badge");
            false
        }
    };

    RunReport {
        result,
        output,
        written,
    }
}
