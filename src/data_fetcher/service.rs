//! Season-scoped operations over the API client
//!
//! Each operation exists in two forms: a fallible `fetch_*` that surfaces
//! the underlying [`AppError`], and an infallible panel-facing variant
//! that degrades gracefully — schedule, ladder and player panels fall
//! back to the fixed placeholder datasets, the live panel to an empty
//! list. UI code consumes the infallible variants through subscriptions
//! and is never left with a hard error for a primary panel.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::api::{ApiClient, endpoints};
use super::fallback;
use super::models::{
    LiveMatchesResponse, Match, PlayerStat, PlayersResponse, SchedulesResponse, StandingsResponse,
    StandingsRow,
};
use super::processors::{map_live_match, map_match, map_player_stat, map_standings_row};
use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ScoreboardService {
    client: Arc<ApiClient>,
    season_id: String,
}

impl ScoreboardService {
    pub fn new(client: Arc<ApiClient>, season_id: impl Into<String>) -> Self {
        Self {
            client,
            season_id: season_id.into(),
        }
    }

    /// Builds a service with its own client from the configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = Arc::new(ApiClient::new(config)?);
        Ok(Self::new(client, config.season_id.clone()))
    }

    /// The underlying client, shared so callers can reach the cache.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Fetches the full season schedule (cached).
    #[instrument(skip(self))]
    pub async fn fetch_matches(&self) -> Result<Vec<Match>, AppError> {
        let path = endpoints::matches_path(&self.season_id);
        let response: SchedulesResponse = self.client.get(&path, &[], true).await?;
        info!("Fetched {} scheduled matches", response.schedules.len());
        Ok(response.schedules.iter().map(map_match).collect())
    }

    /// Season schedule with placeholder fallback.
    pub async fn matches(&self) -> Vec<Match> {
        match self.fetch_matches().await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Falling back to placeholder matches: {e}");
                fallback::sample_matches()
            }
        }
    }

    /// Fetches the fixtures currently in play. Bypasses the cache in both
    /// directions: live scores must never be served stale, and must not
    /// overwrite cached schedule data either.
    #[instrument(skip(self))]
    pub async fn fetch_live_matches(&self) -> Result<Vec<Match>, AppError> {
        let path = endpoints::live_matches_path(&self.season_id);
        let response: LiveMatchesResponse = self.client.get(&path, &[], false).await?;
        info!("Fetched {} live matches", response.matches.len());
        Ok(response.matches.iter().map(map_live_match).collect())
    }

    /// Live fixtures; an empty panel on failure (there is no meaningful
    /// placeholder for "live right now").
    pub async fn live_matches(&self) -> Vec<Match> {
        match self.fetch_live_matches().await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Live matches unavailable: {e}");
                Vec::new()
            }
        }
    }

    /// Fetches the ladder (cached).
    #[instrument(skip(self))]
    pub async fn fetch_standings(&self) -> Result<Vec<StandingsRow>, AppError> {
        let path = endpoints::standings_path(&self.season_id);
        let response: StandingsResponse = self.client.get(&path, &[], true).await?;
        info!("Fetched {} ladder rows", response.standings.len());
        Ok(response.standings.iter().map(map_standings_row).collect())
    }

    /// Ladder with placeholder fallback.
    pub async fn standings(&self) -> Vec<StandingsRow> {
        match self.fetch_standings().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Falling back to placeholder standings: {e}");
                fallback::sample_standings()
            }
        }
    }

    /// Fetches season player statistics (cached).
    #[instrument(skip(self))]
    pub async fn fetch_player_stats(&self) -> Result<Vec<PlayerStat>, AppError> {
        let path = endpoints::player_stats_path(&self.season_id);
        let response: PlayersResponse = self.client.get(&path, &[], true).await?;
        info!("Fetched statistics for {} players", response.players.len());
        Ok(response.players.iter().map(map_player_stat).collect())
    }

    /// Player statistics with placeholder fallback.
    pub async fn player_stats(&self) -> Vec<PlayerStat> {
        match self.fetch_player_stats().await {
            Ok(players) => players,
            Err(e) => {
                warn!("Falling back to placeholder player stats: {e}");
                fallback::sample_player_stats()
            }
        }
    }
}
