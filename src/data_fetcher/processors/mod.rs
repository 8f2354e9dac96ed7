//! Pure mapping and normalization functions

pub mod mapping;
pub mod match_status;
pub mod team_logos;

pub use mapping::{map_live_match, map_match, map_player_stat, map_standings_row};
pub use match_status::{FULL_TIME, TIME_TBD, format_match_time, normalize_status};
pub use team_logos::{DEFAULT_LOGO, team_logo};
