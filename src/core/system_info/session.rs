/// Environment variables describing the desktop session, most specific first
pub const SESSION_VARS: [&str; 2] = ["DESKTOP_SESSION", "XDG_SESSION_TYPE"];

/// Picks the first non-empty session descriptor reported by `lookup`
pub fn resolve<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    SESSION_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
