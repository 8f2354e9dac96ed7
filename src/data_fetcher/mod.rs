//! Data fetching layer: cache, HTTP client, upstream models, mapping and
//! the season-scoped service operations the UI consumes.

pub mod api;
pub mod cache;
pub mod fallback;
pub mod models;
pub mod processors;
pub mod service;

pub use api::ApiClient;
pub use cache::ResponseCache;
pub use models::{Match, MatchStatus, PlayerStat, StandingsRow};
pub use service::ScoreboardService;
