use crate::{config, error::ToolError, types::SearchResponse, utils::SearchKind};

/// Queries the catalog search endpoint.
///
/// Issues `GET /search` with the term, the requested result kind, a result
/// cap and the configured market. The query string is passed through
/// reqwest's query encoding, so field filters like `artist:` and `genre:`
/// survive unmangled.
///
/// # Arguments
///
/// * `token` - Valid access token for API authentication
/// * `query` - Free-text search term, optionally with field filters
/// * `kind` - Which result container to request
/// * `limit` - Maximum number of items to return (1-50)
///
/// # Errors
///
/// Any network failure, non-2xx status or undecodable body surfaces as
/// [`ToolError::UpstreamRequest`].
pub async fn search_catalog(
    token: &str,
    query: &str,
    kind: SearchKind,
    limit: u32,
) -> Result<SearchResponse, ToolError> {
    let kind_param = kind.to_string();
    let limit_param = limit.to_string();
    let market = config::market();

    let client = super::http_client()?;
    let response = client
        .get(format!("{}/search", config::spotify_api_url()))
        .bearer_auth(token)
        .query(&[
            ("q", query),
            ("type", kind_param.as_str()),
            ("limit", limit_param.as_str()),
            ("market", market.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<SearchResponse>().await?)
}
