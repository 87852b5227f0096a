use clap::Parser;
use repo_badge_cli::{app, cli::Args};
use tracing::error;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

// Every run exits 0; failures are reported on the badge and in the log.
#[tokio::main]
async fn main() {
    // Before logging, so a RUST_LOG in .env takes effect. A missing .env is
    // the normal case in CI.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let report = app::run(&args).await;

    if args.print_result {
        match serde_json::to_string(&report.result) {
            Ok(line) => println!("{line}"),
            Err(e) => error!(error = %e, "Failed to serialize result"),
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
