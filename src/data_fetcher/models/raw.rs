//! Serde models for the upstream sports-data API responses
//!
//! Optional upstream fields use `#[serde(default)]` so a sparse payload
//! (common for fixtures that have not kicked off yet) deserializes cleanly;
//! the mapping layer substitutes the documented defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiTeamRef {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiVenue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Match-period descriptor; `number` doubles as the competition round.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiPeriod {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMatch {
    pub id: String,
    /// Kickoff time as an RFC 3339 timestamp.
    #[serde(default)]
    pub scheduled: Option<String>,
    /// Raw upstream status string; normalized by the mapping layer.
    #[serde(default)]
    pub status: String,
    pub home_team: ApiTeamRef,
    pub away_team: ApiTeamRef,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub venue: Option<ApiVenue>,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub period: Option<ApiPeriod>,
    /// Live game clock, present only while in play.
    #[serde(default)]
    pub clock: Option<String>,
}

/// Response wrapper for the season schedule endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchedulesResponse {
    #[serde(default)]
    pub schedules: Vec<ApiMatch>,
}

/// Response wrapper for the live matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LiveMatchesResponse {
    #[serde(default)]
    pub matches: Vec<ApiMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStandingEntry {
    pub team: ApiTeamRef,
    pub rank: u32,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub points_for: u32,
    #[serde(default)]
    pub points_against: u32,
    #[serde(default)]
    pub point_differential: i32,
    #[serde(default)]
    pub points: u32,
}

/// Response wrapper for the standings endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<ApiStandingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiPlayerTotals {
    #[serde(default)]
    pub tries: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub run_meters: u32,
    #[serde(default)]
    pub line_breaks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiPlayerEntry {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub team: ApiTeamRef,
    #[serde(default)]
    pub statistics: ApiPlayerTotals,
}

/// Response wrapper for the season player statistics endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayersResponse {
    #[serde(default)]
    pub players: Vec<ApiPlayerEntry>,
}
