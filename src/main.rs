use clap::Parser;
use tracing::info;
use tryline::cli::{Args, is_config_operation};
use tryline::commands;
use tryline::config::Config;
use tryline::error::AppError;
use tryline::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration management runs (and exits) before any logging setup
    // so it never creates log directories as a side effect
    if is_config_operation(&args) {
        if args.list_config {
            return commands::handle_list_config_command().await;
        }
        return commands::handle_config_update_command(&args).await;
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logging initialized, writing to {log_file_path}");

    let config = Config::load().await?;
    if config.api_key.is_empty() {
        eprintln!(
            "Note: no API key configured; requests will likely be rejected. \
             Set one with: tryline --set-api-key <KEY>"
        );
    }

    if args.watch {
        commands::handle_watch_command(&config, args.interval).await
    } else {
        commands::handle_once_command(&config).await
    }
}
