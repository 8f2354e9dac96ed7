use crate::data_fetcher::models::{ApiMatch, MatchStatus};
use chrono::{DateTime, Local, Utc};
use tracing::debug;

/// Marker shown for a completed match.
pub const FULL_TIME: &str = "FT";

/// Placeholder shown when no meaningful display time exists.
pub const TIME_TBD: &str = "TBD";

/// Normalizes an upstream status string into a [`MatchStatus`].
///
/// The lookup is fixed; any string outside it falls back to
/// [`MatchStatus::Upcoming`]. That fallback is deliberate: an unknown
/// status from the provider must not take a panel down, and treating the
/// fixture as not-yet-played is the least misleading rendering.
///
/// # Examples
///
/// ```
/// use tryline::data_fetcher::models::MatchStatus;
/// use tryline::data_fetcher::processors::normalize_status;
///
/// assert_eq!(normalize_status("inprogress"), MatchStatus::Live);
/// assert_eq!(normalize_status("closed"), MatchStatus::Finished);
/// assert_eq!(normalize_status("weird_unknown_value"), MatchStatus::Upcoming);
/// ```
pub fn normalize_status(raw: &str) -> MatchStatus {
    match raw.to_lowercase().as_str() {
        "inprogress" | "live" => MatchStatus::Live,
        "scheduled" | "postponed" => MatchStatus::Upcoming,
        "closed" | "complete" => MatchStatus::Finished,
        other => {
            debug!("Unrecognized match status '{other}', treating as upcoming");
            MatchStatus::Upcoming
        }
    }
}

/// Produces the display time for a fixture.
///
/// - in play with a clock: the live clock
/// - scheduled: the kickoff time in local `HH:MM`
/// - closed: the full-time marker
/// - anything else, including an unparseable kickoff timestamp: `TBD`
pub fn format_match_time(raw: &ApiMatch) -> String {
    if raw.status == "inprogress"
        && let Some(clock) = &raw.clock
    {
        return clock.clone();
    }
    if raw.status == "scheduled" {
        return raw
            .scheduled
            .as_deref()
            .and_then(format_kickoff)
            .unwrap_or_else(|| TIME_TBD.to_string());
    }
    if raw.status == "closed" {
        return FULL_TIME.to_string();
    }
    TIME_TBD.to_string()
}

/// Formats an RFC 3339 kickoff timestamp as local `HH:MM`.
fn format_kickoff(timestamp: &str) -> Option<String> {
    let utc_time = timestamp.parse::<DateTime<Utc>>().ok()?;
    Some(utc_time.with_timezone(&Local).format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ApiTeamRef;

    fn fixture(status: &str) -> ApiMatch {
        ApiMatch {
            id: "sr:match:1".to_string(),
            scheduled: Some("2026-03-12T09:00:00Z".to_string()),
            status: status.to_string(),
            home_team: ApiTeamRef {
                name: "Sydney Roosters".to_string(),
                ..Default::default()
            },
            away_team: ApiTeamRef {
                name: "Melbourne Storm".to_string(),
                ..Default::default()
            },
            home_score: None,
            away_score: None,
            venue: None,
            attendance: None,
            period: None,
            clock: None,
        }
    }

    #[test]
    fn test_normalize_status_lookup() {
        assert_eq!(normalize_status("inprogress"), MatchStatus::Live);
        assert_eq!(normalize_status("live"), MatchStatus::Live);
        assert_eq!(normalize_status("scheduled"), MatchStatus::Upcoming);
        assert_eq!(normalize_status("postponed"), MatchStatus::Upcoming);
        assert_eq!(normalize_status("closed"), MatchStatus::Finished);
        assert_eq!(normalize_status("complete"), MatchStatus::Finished);
    }

    #[test]
    fn test_normalize_status_is_case_insensitive() {
        assert_eq!(normalize_status("InProgress"), MatchStatus::Live);
        assert_eq!(normalize_status("CLOSED"), MatchStatus::Finished);
    }

    #[test]
    fn test_normalize_status_unknown_defaults_to_upcoming() {
        assert_eq!(normalize_status("weird_unknown_value"), MatchStatus::Upcoming);
        assert_eq!(normalize_status(""), MatchStatus::Upcoming);
    }

    #[test]
    fn test_format_match_time_live_clock() {
        let mut raw = fixture("inprogress");
        raw.clock = Some("67:32".to_string());
        assert_eq!(format_match_time(&raw), "67:32");
    }

    #[test]
    fn test_format_match_time_live_without_clock_is_tbd() {
        let raw = fixture("inprogress");
        assert_eq!(format_match_time(&raw), TIME_TBD);
    }

    #[test]
    fn test_format_match_time_scheduled_uses_kickoff() {
        let raw = fixture("scheduled");
        let formatted = format_match_time(&raw);
        // Local-timezone dependent, but always HH:MM
        assert_eq!(formatted.len(), 5);
        assert_eq!(formatted.as_bytes()[2], b':');
    }

    #[test]
    fn test_format_match_time_scheduled_with_bad_timestamp_is_tbd() {
        let mut raw = fixture("scheduled");
        raw.scheduled = Some("not-a-timestamp".to_string());
        assert_eq!(format_match_time(&raw), TIME_TBD);

        raw.scheduled = None;
        assert_eq!(format_match_time(&raw), TIME_TBD);
    }

    #[test]
    fn test_format_match_time_closed_is_full_time() {
        let raw = fixture("closed");
        assert_eq!(format_match_time(&raw), FULL_TIME);
    }

    #[test]
    fn test_format_match_time_unknown_status_is_tbd() {
        let raw = fixture("postponed");
        assert_eq!(format_match_time(&raw), TIME_TBD);
    }
}
