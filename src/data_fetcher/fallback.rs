//! Fixed placeholder datasets for the degrade-gracefully path
//!
//! When a fetch has exhausted its retries, the service layer substitutes
//! these instead of surfacing a hard error, so primary panels always have
//! something to render. The substitution is logged at `warn` level by the
//! caller; this module only defines the data.

use crate::data_fetcher::models::{
    LadderTrend, Match, MatchStatus, PlayerStat, PlayerTotals, StandingsRow, TeamScore,
};

pub fn sample_matches() -> Vec<Match> {
    vec![
        Match {
            id: "1".to_string(),
            home_team: TeamScore {
                name: "Sydney Roosters".to_string(),
                logo: "🐓".to_string(),
                score: 18,
            },
            away_team: TeamScore {
                name: "Melbourne Storm".to_string(),
                logo: "⚡".to_string(),
                score: 14,
            },
            status: MatchStatus::Live,
            time: "67:32".to_string(),
            venue: "Allianz Stadium".to_string(),
            attendance: 42_156,
            round: "Round 15".to_string(),
        },
        Match {
            id: "2".to_string(),
            home_team: TeamScore {
                name: "Brisbane Broncos".to_string(),
                logo: "🐎".to_string(),
                score: 22,
            },
            away_team: TeamScore {
                name: "Parramatta Eels".to_string(),
                logo: "🐍".to_string(),
                score: 16,
            },
            status: MatchStatus::Live,
            time: "45:18".to_string(),
            venue: "Suncorp Stadium".to_string(),
            attendance: 38_942,
            round: "Round 15".to_string(),
        },
    ]
}

pub fn sample_standings() -> Vec<StandingsRow> {
    vec![StandingsRow {
        position: 1,
        name: "Penrith Panthers".to_string(),
        logo: "🐆".to_string(),
        played: 15,
        wins: 12,
        losses: 3,
        draws: 0,
        points: 24,
        differential: 156,
        form: vec![
            "W".to_string(),
            "W".to_string(),
            "W".to_string(),
            "L".to_string(),
            "W".to_string(),
        ],
        change: LadderTrend::Same,
    }]
}

pub fn sample_player_stats() -> Vec<PlayerStat> {
    vec![PlayerStat {
        name: "Nathan Cleary".to_string(),
        team: "Penrith Panthers".to_string(),
        team_logo: "🐆".to_string(),
        position: "Halfback".to_string(),
        stats: PlayerTotals {
            tries: 8,
            goals: 45,
            points: 122,
            tackles: 234,
            run_meters: 1456,
            line_breaks: 12,
        },
    }]
}
