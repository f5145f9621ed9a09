use crate::{
    config,
    error::ToolError,
    types::{ArtistObject, TopTracksResponse, TrackObject},
    utils::SearchKind,
};

/// Resolves an artist by name through a limit-1 search.
///
/// # Errors
///
/// Returns [`ToolError::NotFound`] with a `Could not find artist: <name>`
/// message when the search matches nothing; network and decoding failures
/// propagate from the search call.
pub async fn find_artist(token: &str, name: &str) -> Result<ArtistObject, ToolError> {
    let response = super::search::search_catalog(token, name, SearchKind::Artist, 1).await?;

    response
        .artists
        .map(|page| page.items)
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ToolError::NotFound(format!("Could not find artist: {}", name)))
}

/// Retrieves an artist's top tracks for the configured market.
///
/// Tracks come back in the provider's relevance/popularity order and are
/// not re-sorted locally.
///
/// # Arguments
///
/// * `token` - Valid access token for API authentication
/// * `artist_id` - Catalog ID of the resolved artist
pub async fn get_top_tracks(token: &str, artist_id: &str) -> Result<Vec<TrackObject>, ToolError> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_api_url(),
        id = artist_id,
        market = &config::market()
    );

    let client = super::http_client()?;
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<TopTracksResponse>().await?;
    Ok(json.tracks)
}
