//! Catalog tool operations and their rendering helpers.
//!
//! The rendering functions are pure so the output contracts (line shapes,
//! `"Unknown"` degradation, newest-first ordering, the exact zero-result
//! string) stay testable without network access.

use crate::{
    error::ToolError,
    management::TokenManager,
    spotify,
    types::{AlbumObject, AlbumTrack, ArtistObject, PlaylistObject, SearchResponse, TrackObject},
    utils::{self, SearchKind},
};

/// Result cap for single-term searches.
pub const SEARCH_LIMIT: u32 = 5;

/// Default number of entries a discography reply keeps.
pub const DISCOGRAPHY_DEFAULT_LIMIT: usize = 10;

/// Exact reply for a search that matched nothing.
pub const NO_RESULTS: &str = "No results found.";

/// Searches the catalog for a single term.
///
/// Returns a JSON-array-shaped string of up to [`SEARCH_LIMIT`] normalized
/// lines, the literal [`NO_RESULTS`] when nothing matched, or an
/// `Error performing search: …` description on any internal failure.
pub async fn search(term: &str, kind: SearchKind) -> String {
    match search_inner(term, kind).await {
        Ok(reply) => reply,
        Err(e) => format!("Error performing search: {}", e),
    }
}

async fn search_inner(term: &str, kind: SearchKind) -> Result<String, ToolError> {
    let manager = TokenManager::shared();
    let token = manager.lock().await.get_valid_token().await?;

    let response = spotify::search::search_catalog(&token, term, kind, SEARCH_LIMIT).await?;
    Ok(render_search_reply(kind, &response))
}

/// Searches the catalog for several terms sequentially, one result each.
///
/// Authenticates once up front; a failed credential exchange fails the
/// whole batch with a single error string. After that, each term's outcome
/// (found item, no match, or a per-term error) becomes one output line and
/// never affects the other terms. Lines follow the caller's term order.
pub async fn search_many(terms: &[String], kind: SearchKind) -> String {
    let manager = TokenManager::shared();
    let token = match manager.lock().await.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return format!("Error performing search: {}", e),
    };

    let mut lines = Vec::with_capacity(terms.len());
    for term in terms {
        let line = match spotify::search::search_catalog(&token, term, kind, 1).await {
            Ok(response) => {
                let rendered = render_search_lines(kind, &response);
                batch_outcome_line(term, rendered.first().map(String::as_str))
            }
            Err(e) => format!("Query '{}': Error {}", term, e),
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// Searches for tracks of a genre by a specific artist.
///
/// Pure query templating over [`search`]; no additional network contract.
pub async fn search_artist_genre(artist: &str, genre: &str) -> String {
    search(
        &format!("artist:{} genre:{}", artist, genre),
        SearchKind::Track,
    )
    .await
}

/// Searches for tracks of a genre. Query templating over [`search`].
pub async fn search_genre(genre: &str) -> String {
    search(&format!("genre:{}", genre), SearchKind::Track).await
}

/// Lists an artist's top tracks for the configured market, in the
/// provider's order.
pub async fn top_tracks(artist_name: &str) -> String {
    match top_tracks_inner(artist_name).await {
        Ok(reply) => reply,
        Err(ToolError::NotFound(msg)) => msg,
        Err(e) => format!("Error fetching top tracks: {}", e),
    }
}

async fn top_tracks_inner(artist_name: &str) -> Result<String, ToolError> {
    let manager = TokenManager::shared();
    let token = manager.lock().await.get_valid_token().await?;

    let artist = spotify::artists::find_artist(&token, artist_name).await?;
    let tracks = spotify::artists::get_top_tracks(&token, &artist.id).await?;
    Ok(render_top_tracks(&artist.name, &tracks))
}

/// Lists an album's tracks with their catalog track numbers and durations.
pub async fn album_tracklist(album_name: &str) -> String {
    match album_tracklist_inner(album_name).await {
        Ok(reply) => reply,
        Err(ToolError::NotFound(msg)) => msg,
        Err(e) => format!("Error fetching album tracklist: {}", e),
    }
}

async fn album_tracklist_inner(album_name: &str) -> Result<String, ToolError> {
    let manager = TokenManager::shared();
    let token = manager.lock().await.get_valid_token().await?;

    let album = spotify::albums::find_album(&token, album_name).await?;
    let tracks = spotify::albums::get_album_tracks(&token, &album.id).await?;
    Ok(render_tracklist(&album, &tracks))
}

/// Lists an artist's releases newest first, truncated to `limit`.
pub async fn discography(artist_name: &str, limit: usize) -> String {
    match discography_inner(artist_name, limit).await {
        Ok(reply) => reply,
        Err(ToolError::NotFound(msg)) => msg,
        Err(e) => format!("Error fetching discography: {}", e),
    }
}

async fn discography_inner(artist_name: &str, limit: usize) -> Result<String, ToolError> {
    let manager = TokenManager::shared();
    let token = manager.lock().await.get_valid_token().await?;

    let artist = spotify::artists::find_artist(&token, artist_name).await?;
    let releases = spotify::releases::get_artist_releases(&token, &artist.id).await?;
    Ok(render_discography(&artist.name, releases, limit))
}

// ---------------------------------------------------------------------------
// Rendering helpers (pure)
// ---------------------------------------------------------------------------

pub fn render_track_line(track: &TrackObject) -> String {
    let artist = track
        .artists
        .first()
        .map(|a| a.name.as_str())
        .unwrap_or("Unknown");
    let released = track
        .album
        .as_ref()
        .and_then(|a| a.release_date.as_deref())
        .unwrap_or("Unknown");
    format!(
        "Track: {} by {} (album released {})",
        track.name, artist, released
    )
}

pub fn render_artist_line(artist: &ArtistObject) -> String {
    let popularity = artist
        .popularity
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    format!("Artist: {} (popularity {})", artist.name, popularity)
}

pub fn render_album_line(album: &AlbumObject) -> String {
    let artist = album
        .artists
        .first()
        .map(|a| a.name.as_str())
        .unwrap_or("Unknown");
    let released = album.release_date.as_deref().unwrap_or("Unknown");
    format!("Album: {} by {} (released {})", album.name, artist, released)
}

pub fn render_playlist_line(playlist: &PlaylistObject) -> String {
    let owner = playlist
        .owner
        .as_ref()
        .and_then(|o| o.display_name.as_deref())
        .unwrap_or("Unknown");
    let total = playlist
        .tracks
        .as_ref()
        .and_then(|t| t.total)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    format!("Playlist: {} by {} ({} tracks)", playlist.name, owner, total)
}

/// Normalizes the container matching the requested kind into one line per
/// item. Containers for other kinds are ignored even if present.
pub fn render_search_lines(kind: SearchKind, response: &SearchResponse) -> Vec<String> {
    match kind {
        SearchKind::Track => response
            .tracks
            .iter()
            .flat_map(|page| &page.items)
            .map(render_track_line)
            .collect(),
        SearchKind::Artist => response
            .artists
            .iter()
            .flat_map(|page| &page.items)
            .map(render_artist_line)
            .collect(),
        SearchKind::Album => response
            .albums
            .iter()
            .flat_map(|page| &page.items)
            .map(render_album_line)
            .collect(),
        SearchKind::Playlist => response
            .playlists
            .iter()
            .flat_map(|page| &page.items)
            .map(render_playlist_line)
            .collect(),
    }
}

/// Full single-search reply: a JSON array of lines, or [`NO_RESULTS`].
pub fn render_search_reply(kind: SearchKind, response: &SearchResponse) -> String {
    let lines = render_search_lines(kind, response);
    if lines.is_empty() {
        return NO_RESULTS.to_string();
    }

    serde_json::to_string(&lines).unwrap_or_else(|_| lines.join("\n"))
}

/// One batch-search output line for a term's outcome.
pub fn batch_outcome_line(term: &str, item: Option<&str>) -> String {
    match item {
        Some(line) => format!("Query '{}': Found {}", term, line),
        None => format!("Query '{}': No results found.", term),
    }
}

pub fn render_top_tracks(artist_name: &str, tracks: &[TrackObject]) -> String {
    if tracks.is_empty() {
        return format!("No top tracks found for {}.", artist_name);
    }

    let mut lines = vec![format!("Top tracks for {}:", artist_name)];
    for track in tracks {
        let album = track
            .album
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown");
        let released = track
            .album
            .as_ref()
            .and_then(|a| a.release_date.as_deref())
            .unwrap_or("Unknown");
        lines.push(format!(
            "{} (album: {}, released {})",
            track.name, album, released
        ));
    }

    lines.join("\n")
}

pub fn render_tracklist(album: &AlbumObject, tracks: &[AlbumTrack]) -> String {
    let released = album.release_date.as_deref().unwrap_or("Unknown");
    let mut lines = vec![format!("Album: {} (released {})", album.name, released)];

    for track in tracks {
        let number = track
            .track_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        let duration = track
            .duration_ms
            .map(utils::format_duration_min)
            .unwrap_or_else(|| "Unknown".to_string());
        lines.push(format!("{}. {} ({} min)", number, track.name, duration));
    }

    lines.join("\n")
}

pub fn render_discography(
    artist_name: &str,
    mut releases: Vec<AlbumObject>,
    limit: usize,
) -> String {
    if releases.is_empty() {
        return format!("No releases found for {}.", artist_name);
    }

    utils::sort_releases_newest_first(&mut releases);
    releases.truncate(limit);

    let mut lines = vec![format!("Releases by {} (newest first):", artist_name)];
    for release in &releases {
        let date = release.release_date.as_deref().unwrap_or("Unknown");
        let kind = release.album_type.as_deref().unwrap_or("Unknown");
        lines.push(format!("{} - {} ({})", date, release.name, kind));
    }

    lines.join("\n")
}
