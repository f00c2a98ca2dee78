use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecr_scan_notifier::cli::{self, Commands};
use ecr_scan_notifier::errors::RESULT_DELIVERED;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let command = cli.command.unwrap_or(Commands::Serve);
    // CloudWatch stamps every line itself, so the runtime loop logs JSON without timestamps.
    let in_lambda = matches!(command, Commands::Serve);

    if cli.json_logs || in_lambda {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_current_span(true)
            .without_time()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = option_env!("GIT_HASH").unwrap_or("dev"),
        "ecr-scan-notifier starting"
    );

    let result = match command {
        Commands::Serve => cli::serve::handle_serve().await.map(|()| RESULT_DELIVERED),
        Commands::Invoke(args) => cli::invoke::handle_invoke(args).await,
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.classify().exit_code);
        }
    }
}
