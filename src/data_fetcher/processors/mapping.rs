//! Raw upstream shapes → normalized domain entities
//!
//! Pure functions with explicit defaults for optional upstream fields:
//! a missing score is 0, a missing venue is "TBD", a missing attendance
//! is 0. Sparse payloads never produce errors here.

use super::match_status::{TIME_TBD, format_match_time, normalize_status};
use super::team_logos::team_logo;
use crate::data_fetcher::models::{
    ApiMatch, ApiPlayerEntry, ApiStandingEntry, ApiTeamRef, LadderTrend, Match, MatchStatus,
    PlayerStat, PlayerTotals, StandingsRow, TeamScore,
};

fn map_team(team: &ApiTeamRef, score: Option<u32>) -> TeamScore {
    TeamScore {
        name: team.name.clone(),
        logo: team_logo(&team.name).to_string(),
        score: score.unwrap_or(0),
    }
}

fn map_round(raw: &ApiMatch) -> String {
    match raw.period.as_ref().and_then(|period| period.number) {
        Some(number) => format!("Round {number}"),
        None => format!("Round {TIME_TBD}"),
    }
}

/// Maps a schedule fixture, normalizing the upstream status string.
pub fn map_match(raw: &ApiMatch) -> Match {
    Match {
        id: raw.id.clone(),
        home_team: map_team(&raw.home_team, raw.home_score),
        away_team: map_team(&raw.away_team, raw.away_score),
        status: normalize_status(&raw.status),
        time: format_match_time(raw),
        venue: raw
            .venue
            .as_ref()
            .and_then(|venue| venue.name.clone())
            .unwrap_or_else(|| TIME_TBD.to_string()),
        attendance: raw.attendance.unwrap_or(0),
        round: map_round(raw),
    }
}

/// Maps a fixture from the live endpoint. That endpoint only carries
/// in-play fixtures, so the status is forced to [`MatchStatus::Live`]
/// regardless of the raw string.
pub fn map_live_match(raw: &ApiMatch) -> Match {
    Match {
        status: MatchStatus::Live,
        ..map_match(raw)
    }
}

/// Maps a ladder entry. The standings feed carries no per-round history,
/// so `form` is empty and the trend is [`LadderTrend::Same`].
pub fn map_standings_row(raw: &ApiStandingEntry) -> StandingsRow {
    StandingsRow {
        position: raw.rank,
        name: raw.team.name.clone(),
        logo: team_logo(&raw.team.name).to_string(),
        played: raw.played,
        wins: raw.wins,
        losses: raw.losses,
        draws: raw.draws,
        points: raw.points,
        differential: raw.point_differential,
        form: Vec::new(),
        change: LadderTrend::Same,
    }
}

/// Maps a season player-statistics entry.
pub fn map_player_stat(raw: &ApiPlayerEntry) -> PlayerStat {
    PlayerStat {
        name: raw.name.clone(),
        team: raw.team.name.clone(),
        team_logo: team_logo(&raw.team.name).to_string(),
        position: raw.position.clone(),
        stats: PlayerTotals {
            tries: raw.statistics.tries,
            goals: raw.statistics.goals,
            points: raw.statistics.points,
            tackles: raw.statistics.tackles,
            run_meters: raw.statistics.run_meters,
            line_breaks: raw.statistics.line_breaks,
        },
    }
}
