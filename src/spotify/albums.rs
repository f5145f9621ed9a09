use crate::{
    config,
    error::ToolError,
    types::{AlbumObject, AlbumTrack, AlbumTracksResponse},
    utils::SearchKind,
};

/// Number of tracks fetched per album listing.
pub const TRACKLIST_LIMIT: u32 = 20;

/// Resolves an album by name through a limit-1 search.
///
/// # Errors
///
/// Returns [`ToolError::NotFound`] with a `Could not find album: <name>`
/// message when the search matches nothing.
pub async fn find_album(token: &str, name: &str) -> Result<AlbumObject, ToolError> {
    let response = super::search::search_catalog(token, name, SearchKind::Album, 1).await?;

    response
        .albums
        .map(|page| page.items)
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ToolError::NotFound(format!("Could not find album: {}", name)))
}

/// Retrieves an album's tracklist, capped at [`TRACKLIST_LIMIT`] tracks and
/// filtered by the configured market.
///
/// Track numbers are reported as the catalog provides them, not recomputed.
pub async fn get_album_tracks(token: &str, album_id: &str) -> Result<Vec<AlbumTrack>, ToolError> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit={limit}&market={market}",
        uri = &config::spotify_api_url(),
        id = album_id,
        limit = TRACKLIST_LIMIT,
        market = &config::market()
    );

    let client = super::http_client()?;
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<AlbumTracksResponse>().await?;
    Ok(json.items)
}
