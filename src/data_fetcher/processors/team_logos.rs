//! Best-effort team logo lookup
//!
//! Cosmetic only; the logo never participates in identity. Matching is a
//! lowercase substring test against a fixed alias table. The slice order is
//! the documented tie-break: longer aliases are listed before any alias
//! they contain (e.g. "south sydney" before "sydney"), so the most
//! specific alias wins.

/// Fallback marker for teams with no alias entry.
pub const DEFAULT_LOGO: &str = "🏉";

const TEAM_LOGOS: &[(&str, &str)] = &[
    ("south sydney", "🐰"),
    ("north queensland", "🐄"),
    ("gold coast", "⚡"),
    ("st george", "🐉"),
    ("penrith", "🐆"),
    ("melbourne", "⚡"),
    ("brisbane", "🐎"),
    ("sydney", "🐓"),
    ("parramatta", "🐍"),
    ("cronulla", "🦈"),
    ("newcastle", "⚔️"),
    ("canterbury", "🐕"),
    ("wests", "🐅"),
    ("manly", "🦅"),
    ("warriors", "⚔️"),
    ("canberra", "🐸"),
];

/// Resolves a team name to its logo marker; unknown names get the
/// generic default rather than an error.
pub fn team_logo(team_name: &str) -> &'static str {
    let key = team_name.to_lowercase();
    TEAM_LOGOS
        .iter()
        .find(|(alias, _)| key.contains(alias))
        .map(|(_, logo)| *logo)
        .unwrap_or(DEFAULT_LOGO)
}
