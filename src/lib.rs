//! NRL Rugby League Scores Library
//!
//! This library provides the data layer behind the `tryline` dashboard:
//! a cached, retrying client for an upstream sports-data API, mappers
//! producing normalized match/ladder/player entities, and a polling
//! subscription primitive that owns the fetch lifecycle for a panel.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use tryline::config::Config;
//! use tryline::data_fetcher::ScoreboardService;
//! use tryline::error::AppError;
//! use tryline::subscription::{Subscription, SubscriptionOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let service = ScoreboardService::from_config(&config)?;
//!
//!     // One-shot fetch
//!     let ladder = service.standings().await;
//!     for row in &ladder {
//!         println!("{:>2} {} {}", row.position, row.logo, row.name);
//!     }
//!
//!     // Polling binding for the live panel
//!     let live_service = service.clone();
//!     let live = Subscription::spawn(
//!         move || {
//!             let service = live_service.clone();
//!             async move { service.fetch_live_matches().await }
//!         },
//!         SubscriptionOptions::with_interval(Duration::from_secs(30)),
//!     );
//!
//!     let mut updates = live.watch();
//!     updates.changed().await.ok();
//!     println!("{} matches in play", live.state().data.unwrap_or_default().len());
//!
//!     live.shutdown();
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod subscription;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Match, MatchStatus, PlayerStat, StandingsRow};
pub use data_fetcher::{ApiClient, ResponseCache, ScoreboardService};
pub use error::AppError;
pub use subscription::{Subscription, SubscriptionOptions, SubscriptionState};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
