use crate::{config, error::ToolError, types::{AlbumObject, ArtistAlbumsResponse}};

/// Number of releases fetched per discography lookup.
pub const RELEASE_FETCH_LIMIT: u32 = 50;

/// Retrieves up to [`RELEASE_FETCH_LIMIT`] releases of the `album` and
/// `single` groups for an artist, filtered by the configured market.
///
/// The provider's ordering is not trusted for newest-first semantics; the
/// caller re-sorts by release-date string before presenting anything (see
/// `utils::sort_releases_newest_first`).
///
/// # Arguments
///
/// * `token` - Valid access token for API authentication
/// * `artist_id` - Catalog ID of the resolved artist
///
/// # Errors
///
/// Network failures, non-2xx statuses and undecodable bodies surface as
/// [`ToolError::UpstreamRequest`].
pub async fn get_artist_releases(
    token: &str,
    artist_id: &str,
) -> Result<Vec<AlbumObject>, ToolError> {
    let api_url = format!(
        "{uri}/artists/{id}/albums?include_groups=album,single&limit={limit}&market={market}",
        uri = &config::spotify_api_url(),
        id = artist_id,
        limit = RELEASE_FETCH_LIMIT,
        market = &config::market()
    );

    let client = super::http_client()?;
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<ArtistAlbumsResponse>().await?;
    Ok(json.items)
}
