use std::path::PathBuf;

use clap::Parser;

/// Resolve a GitHub account's repository count and write it as an SVG badge.
///
/// The credential is read from GH_API_TOKEN or GITHUB_TOKEN, the account from
/// GH_USERNAME or GITHUB_REPOSITORY_OWNER. Flags override both.
#[derive(Parser, Debug)]
#[command(name = "repo-badge", version, about, long_about = None)]
pub struct Args {
    /// Account login (user or organization)
    #[arg(long, value_name = "LOGIN")]
    pub owner: Option<String>,

    /// API token; enables the GraphQL total that includes private repositories
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Badge output path [default: assets/repo-count.svg]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// GitHub API base URL [default: https://api.github.com]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User-Agent header [default: <owner>-repo-count-badge]
    #[arg(long, value_name = "AGENT")]
    pub user_agent: Option<String>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the resolution result as JSON on stdout
    #[arg(long)]
    pub print_result: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
