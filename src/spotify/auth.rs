use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;

use crate::{
    config,
    error::ToolError,
    types::{Token, TokenResponse},
};

/// Exchanges the configured client credentials for a bearer token.
///
/// Builds an HTTP Basic credential by base64-encoding `id:secret`, sends a
/// `grant_type=client_credentials` POST to the token endpoint, and reads
/// the bearer token from the JSON response. A single attempt, no retry.
///
/// # Errors
///
/// - [`ToolError::Configuration`] when either credential is empty; no
///   network traffic happens in that case.
/// - [`ToolError::UpstreamAuth`] on a network failure, a non-2xx status
///   (the status and response body are kept for diagnostics), or a body
///   that does not decode as a token response.
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token() -> Result<Token, ToolError> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();
    if client_id.is_empty() || client_secret.is_empty() {
        return Err(ToolError::Configuration(
            "SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET must be set".to_string(),
        ));
    }

    let credentials = format!("{}:{}", client_id, client_secret);
    let encoded = STANDARD.encode(credentials);

    let client = super::http_client()?;
    let response = client
        .post(config::spotify_token_url())
        .header("Authorization", format!("Basic {}", encoded))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ToolError::UpstreamAuth(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ToolError::UpstreamAuth(format!(
            "token endpoint returned {}: {}",
            status, body
        )));
    }

    let json = response
        .json::<TokenResponse>()
        .await
        .map_err(|e| ToolError::UpstreamAuth(format!("malformed token response: {}", e)))?;

    Ok(Token {
        access_token: json.access_token,
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
