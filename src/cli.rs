use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only manages configuration and the
/// dashboard itself should not run.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_base_url.is_some()
        || args.new_api_key.is_some()
        || args.new_season_id.is_some()
        || args.list_config
}

/// NRL Rugby League Scores
///
/// Live match scores, the ladder and player statistics in your terminal.
///
/// By default the dashboard is printed once and the program exits. With
/// --watch it keeps running, refreshing the live panel on the configured
/// polling interval until interrupted with Ctrl+C.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Keep watching: refresh the live scores panel on the polling
    /// interval instead of printing once and exiting.
    #[arg(short, long)]
    pub watch: bool,

    /// Override the live panel refresh interval in seconds.
    /// Lower values increase API usage; the upstream trial tier is
    /// rate-limited.
    #[arg(long = "interval", help_heading = "Display Options", value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Update the API base URL in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "BASE_URL"
    )]
    pub new_api_base_url: Option<String>,

    /// Update the API key in config.
    #[arg(
        long = "set-api-key",
        help_heading = "Configuration",
        value_name = "KEY"
    )]
    pub new_api_key: Option<String>,

    /// Update the season identifier in config.
    #[arg(
        long = "set-season",
        help_heading = "Configuration",
        value_name = "SEASON_ID"
    )]
    pub new_season_id: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are echoed to stdout in addition to
    /// the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be
    /// written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_is_not_a_config_operation() {
        let args = Args::parse_from(["tryline"]);
        assert!(!is_config_operation(&args));
        assert!(!args.watch);
    }

    #[test]
    fn test_config_flags_are_config_operations() {
        let args = Args::parse_from(["tryline", "--set-api-key", "k"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["tryline", "--list-config"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["tryline", "--config", "https://api.example.com"]);
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_watch_with_interval() {
        let args = Args::parse_from(["tryline", "--watch", "--interval", "15"]);
        assert!(args.watch);
        assert_eq!(args.interval, Some(15));
    }
}
