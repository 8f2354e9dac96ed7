//! Normalized, UI-agnostic entities produced by the mapping layer
//!
//! These are immutable value types: a fetch replaces a panel's data
//! wholesale, the core never patches individual fields.

use serde::{Deserialize, Serialize};

/// Normalized match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Upcoming,
    Finished,
}

/// One side of a fixture with its display decoration and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    pub logo: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub home_team: TeamScore,
    pub away_team: TeamScore,
    pub status: MatchStatus,
    /// Display time: live clock, kickoff time, "FT" or "TBD".
    pub time: String,
    pub venue: String,
    pub attendance: u32,
    pub round: String,
}

impl Match {
    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }
}

/// Direction a team moved on the ladder since the previous round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LadderTrend {
    Up,
    Down,
    Same,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub position: u32,
    pub name: String,
    pub logo: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: u32,
    pub differential: i32,
    /// Recent results, newest last. Empty when the feed carries no
    /// per-round history.
    pub form: Vec<String>,
    pub change: LadderTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerTotals {
    pub tries: u32,
    pub goals: u32,
    pub points: u32,
    pub tackles: u32,
    pub run_meters: u32,
    pub line_breaks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub name: String,
    pub team: String,
    pub team_logo: String,
    pub position: String,
    pub stats: PlayerTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Live).unwrap(),
            "\"live\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn test_ladder_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LadderTrend::Same).unwrap(), "\"same\"");
    }

    #[test]
    fn test_match_is_live() {
        let team = |name: &str| TeamScore {
            name: name.to_string(),
            logo: "🏉".to_string(),
            score: 0,
        };
        let mut fixture = Match {
            id: "sr:match:1".to_string(),
            home_team: team("Sydney Roosters"),
            away_team: team("Melbourne Storm"),
            status: MatchStatus::Upcoming,
            time: "19:30".to_string(),
            venue: "Allianz Stadium".to_string(),
            attendance: 0,
            round: "Round 15".to_string(),
        };
        assert!(!fixture.is_live());
        fixture.status = MatchStatus::Live;
        assert!(fixture.is_live());
    }
}
