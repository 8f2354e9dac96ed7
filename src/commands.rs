use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::ScoreboardService;
use crate::data_fetcher::models::{Match, MatchStatus, PlayerStat, StandingsRow};
use crate::error::AppError;
use crate::subscription::{Subscription, SubscriptionOptions, SubscriptionState};
use chrono::Local;
use std::time::Duration;
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-api-key,
/// --set-season). Updates the stored configuration and saves it.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_base_url) = &args.new_api_base_url {
        config.api_base_url = new_base_url.clone();
    }

    if let Some(new_api_key) = &args.new_api_key {
        config.api_key = new_api_key.clone();
    }

    if let Some(new_season_id) = &args.new_season_id {
        config.season_id = new_season_id.clone();
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the default invocation: fetch every panel once, print the
/// dashboard, exit. Uses the degrade-gracefully service variants so a
/// flaky upstream still yields a printable dashboard.
pub async fn handle_once_command(config: &Config) -> Result<(), AppError> {
    let service = ScoreboardService::from_config(config)?;

    let (live, matches, standings, players) = tokio::join!(
        service.live_matches(),
        service.matches(),
        service.standings(),
        service.player_stats(),
    );

    print_live_panel(&live);
    print_schedule_panel(&matches);
    print_ladder_panel(&standings);
    print_players_panel(&players);

    Ok(())
}

/// Handles --watch: keeps the live panel (and, at a slower cadence, the
/// ladder) refreshing until Ctrl+C. Each panel is its own subscription
/// with its own ticker; the service's cache is the only state they share.
pub async fn handle_watch_command(
    config: &Config,
    interval_override: Option<u64>,
) -> Result<(), AppError> {
    let service = ScoreboardService::from_config(config)?;
    let live_interval = interval_override
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.live_poll_interval());

    info!("Watching live scores every {live_interval:?}");

    let live_service = service.clone();
    let live = Subscription::spawn(
        move || {
            let service = live_service.clone();
            async move { service.fetch_live_matches().await }
        },
        SubscriptionOptions::with_interval(live_interval),
    );

    let ladder_service = service.clone();
    let ladder = Subscription::spawn(
        move || {
            let service = ladder_service.clone();
            async move { service.fetch_standings().await }
        },
        SubscriptionOptions::with_interval(Duration::from_millis(
            crate::constants::intervals::SLOW_POLL_MS,
        )),
    );

    let mut live_rx = live.watch();
    let mut ladder_rx = ladder.watch();

    println!("Watching live scores (Ctrl+C to exit)...");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = live_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render_live_state(&live.state());
            }
            changed = ladder_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render_ladder_state(&ladder.state());
            }
        }
    }

    live.shutdown();
    ladder.shutdown();
    println!("\nStopped.");
    Ok(())
}

fn render_live_state(state: &SubscriptionState<Vec<Match>>) {
    let Some(matches) = &state.data else {
        // Nothing fetched successfully yet; only a blocking first-load
        // failure is worth surfacing as text
        if let Some(error) = &state.error {
            println!("Live scores unavailable: {error}");
        }
        return;
    };

    print_live_panel(matches);
    if let Some(error) = &state.error {
        println!("  ⚠ showing stale data: {error}");
    }
    if let Some(updated) = state.last_updated {
        println!(
            "  updated {}",
            updated.with_timezone(&Local).format("%H:%M:%S")
        );
    }
}

fn render_ladder_state(state: &SubscriptionState<Vec<StandingsRow>>) {
    let Some(rows) = &state.data else {
        return;
    };
    print_ladder_panel(rows);
    if let Some(error) = &state.error {
        println!("  ⚠ showing stale data: {error}");
    }
}

fn print_live_panel(matches: &[Match]) {
    println!("\n═ LIVE ═══════════════════════════════════════");
    if matches.is_empty() {
        println!("No matches in play right now.");
        return;
    }
    for fixture in matches {
        println!("{}", format_match_line(fixture));
    }
}

fn print_schedule_panel(matches: &[Match]) {
    println!("\n═ MATCHES ════════════════════════════════════");
    if matches.is_empty() {
        println!("No scheduled matches found.");
        return;
    }
    for fixture in matches {
        println!("{}", format_match_line(fixture));
    }
}

fn print_ladder_panel(rows: &[StandingsRow]) {
    println!("\n═ LADDER ═════════════════════════════════════");
    if rows.is_empty() {
        println!("No standings available.");
        return;
    }
    println!("{:>2}  {:<28} {:>2} {:>3}-{:<3} {:>3} {:>5}", "#", "Team", "P", "W", "L", "Pts", "+/-");
    for row in rows {
        println!("{}", format_ladder_line(row));
    }
}

fn print_players_panel(players: &[PlayerStat]) {
    println!("\n═ TOP PLAYERS ════════════════════════════════");
    if players.is_empty() {
        println!("No player statistics available.");
        return;
    }
    for player in players {
        println!("{}", format_player_line(player));
    }
}

fn format_match_line(fixture: &Match) -> String {
    let marker = match fixture.status {
        MatchStatus::Live => "LIVE",
        MatchStatus::Upcoming => "  vs",
        MatchStatus::Finished => "  FT",
    };
    format!(
        "{marker}  {} {} {:>2} - {:<2} {} {}  ({}, {})",
        fixture.home_team.logo,
        fixture.home_team.name,
        fixture.home_team.score,
        fixture.away_team.score,
        fixture.away_team.name,
        fixture.away_team.logo,
        fixture.time,
        fixture.venue
    )
}

fn format_ladder_line(row: &StandingsRow) -> String {
    format!(
        "{:>2}  {} {:<26} {:>2} {:>3}-{:<3} {:>3} {:>+5}",
        row.position,
        row.logo,
        row.name,
        row.played,
        row.wins,
        row.losses,
        row.points,
        row.differential
    )
}

fn format_player_line(player: &PlayerStat) -> String {
    format!(
        "{} {} ({}, {}) — {} tries, {} goals, {} pts",
        player.team_logo,
        player.name,
        player.team,
        player.position,
        player.stats.tries,
        player.stats.goals,
        player.stats.points
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::fallback;

    #[test]
    fn test_format_match_line_live() {
        let fixture = &fallback::sample_matches()[0];
        let line = format_match_line(fixture);
        assert!(line.starts_with("LIVE"));
        assert!(line.contains("Sydney Roosters"));
        assert!(line.contains("18"));
        assert!(line.contains("67:32"));
    }

    #[test]
    fn test_format_ladder_line_carries_differential_sign() {
        let row = &fallback::sample_standings()[0];
        let line = format_ladder_line(row);
        assert!(line.contains("Penrith Panthers"));
        assert!(line.contains("+156"));
    }

    #[test]
    fn test_format_player_line() {
        let player = &fallback::sample_player_stats()[0];
        let line = format_player_line(player);
        assert!(line.contains("Nathan Cleary"));
        assert!(line.contains("8 tries"));
        assert!(line.contains("122 pts"));
    }
}
