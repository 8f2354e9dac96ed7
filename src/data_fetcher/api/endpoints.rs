//! Endpoint path building and request-signature utilities

use std::collections::BTreeMap;

/// Builds the season schedule path, listing every fixture of the season.
///
/// # Arguments
/// * `season_id` - The upstream season identifier
///
/// # Returns
/// * `String` - The endpoint path, ready to append to the API base URL
///
/// # Example
/// ```
/// use tryline::data_fetcher::api::endpoints::matches_path;
///
/// let path = matches_path("sr:season:5678");
/// assert_eq!(path, "/seasons/sr:season:5678/schedules");
/// ```
pub fn matches_path(season_id: &str) -> String {
    format!("/seasons/{season_id}/schedules")
}

/// Builds the live matches path, listing only fixtures currently in play.
///
/// # Example
/// ```
/// use tryline::data_fetcher::api::endpoints::live_matches_path;
///
/// let path = live_matches_path("sr:season:5678");
/// assert_eq!(path, "/seasons/sr:season:5678/live_standings");
/// ```
pub fn live_matches_path(season_id: &str) -> String {
    format!("/seasons/{season_id}/live_standings")
}

/// Builds the ladder (league standings) path for a season.
///
/// # Example
/// ```
/// use tryline::data_fetcher::api::endpoints::standings_path;
///
/// let path = standings_path("sr:season:5678");
/// assert_eq!(path, "/seasons/sr:season:5678/standings");
/// ```
pub fn standings_path(season_id: &str) -> String {
    format!("/seasons/{season_id}/standings")
}

/// Builds the season player statistics path.
///
/// # Example
/// ```
/// use tryline::data_fetcher::api::endpoints::player_stats_path;
///
/// let path = player_stats_path("sr:season:5678");
/// assert_eq!(path, "/seasons/sr:season:5678/players");
/// ```
pub fn player_stats_path(season_id: &str) -> String {
    format!("/seasons/{season_id}/players")
}

/// Computes the cache key for a request signature.
///
/// Parameters are sorted by name before serialization so that logically
/// identical requests always produce the same key, regardless of the order
/// the call site listed them in. The `api_key` parameter is appended at
/// request time and never participates in the key.
///
/// # Example
/// ```
/// use tryline::data_fetcher::api::endpoints::cache_key;
///
/// let a = cache_key("/seasons/s1/schedules", &[("round", "5"), ("limit", "10")]);
/// let b = cache_key("/seasons/s1/schedules", &[("limit", "10"), ("round", "5")]);
/// assert_eq!(a, b);
/// assert_eq!(a, "/seasons/s1/schedules?limit=10&round=5");
/// ```
pub fn cache_key(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let sorted: BTreeMap<&str, &str> = params.iter().copied().collect();
    let query = sorted
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_paths_substitute_the_id() {
        assert_eq!(
            matches_path("sr:season:2026"),
            "/seasons/sr:season:2026/schedules"
        );
        assert_eq!(
            live_matches_path("sr:season:2026"),
            "/seasons/sr:season:2026/live_standings"
        );
        assert_eq!(
            standings_path("sr:season:2026"),
            "/seasons/sr:season:2026/standings"
        );
        assert_eq!(
            player_stats_path("sr:season:2026"),
            "/seasons/sr:season:2026/players"
        );
    }

    #[test]
    fn test_cache_key_without_params_is_the_path() {
        assert_eq!(cache_key("/seasons/s1/standings", &[]), "/seasons/s1/standings");
    }

    #[test]
    fn test_cache_key_is_order_independent() {
        let a = cache_key("/p", &[("b", "2"), ("a", "1"), ("c", "3")]);
        let b = cache_key("/p", &[("c", "3"), ("a", "1"), ("b", "2")]);
        assert_eq!(a, b);
        assert_eq!(a, "/p?a=1&b=2&c=3");
    }

    #[test]
    fn test_cache_key_distinguishes_paths_and_values() {
        let base = cache_key("/p", &[("round", "1")]);
        assert_ne!(base, cache_key("/q", &[("round", "1")]));
        assert_ne!(base, cache_key("/p", &[("round", "2")]));
        assert_ne!(base, cache_key("/p", &[]));
    }
}
