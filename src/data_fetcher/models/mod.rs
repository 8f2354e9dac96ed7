//! Upstream (raw) and normalized (domain) data models

pub mod domain;
pub mod raw;

pub use domain::{
    LadderTrend, Match, MatchStatus, PlayerStat, PlayerTotals, StandingsRow, TeamScore,
};
pub use raw::{
    ApiMatch, ApiPeriod, ApiPlayerEntry, ApiPlayerTotals, ApiStandingEntry, ApiTeamRef, ApiVenue,
    LiveMatchesResponse, PlayersResponse, SchedulesResponse, StandingsResponse,
};
