use std::fmt;

use crate::types::AlbumObject;

/// Result kind accepted by the catalog search operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchKind {
    #[default]
    Track,
    Artist,
    Album,
    Playlist,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Track,
        SearchKind::Artist,
        SearchKind::Album,
        SearchKind::Playlist,
    ];
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchKind::Track => "track",
            SearchKind::Artist => "artist",
            SearchKind::Album => "album",
            SearchKind::Playlist => "playlist",
        };
        write!(f, "{}", s)
    }
}

/// Parses a search kind from user input. Case-insensitive, whitespace
/// tolerant. Used as the clap value parser for `--kind`.
pub fn parse_search_kind(input: &str) -> Result<SearchKind, String> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return Err("search kind cannot be empty".to_string());
    }

    match normalized.as_str() {
        "track" => Ok(SearchKind::Track),
        "artist" => Ok(SearchKind::Artist),
        "album" => Ok(SearchKind::Album),
        "playlist" => Ok(SearchKind::Playlist),
        other => Err(format!(
            "invalid value '{}' (expected one of: track, artist, album, playlist)",
            other
        )),
    }
}

/// Sorts releases by release-date string descending, newest first.
///
/// The comparison is lexicographic over the upstream's ISO-like date
/// strings (`YYYY-MM-DD`, `YYYY-MM` or `YYYY`), which order correctly
/// without parsing. Releases without a date sort last; ties keep the
/// provider's order.
pub fn sort_releases_newest_first(albums: &mut Vec<AlbumObject>) {
    albums.sort_by(|a, b| b.release_date.cmp(&a.release_date));
}

/// Renders a track duration in minutes with two decimals, e.g. 125000 ms
/// becomes `2.08`.
pub fn format_duration_min(duration_ms: u64) -> String {
    format!("{:.2}", duration_ms as f64 / 1000.0 / 60.0)
}

/// Truncates a string to at most `max_chars` characters, multi-byte safe.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
