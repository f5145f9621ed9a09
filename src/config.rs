//! Configuration management for the agent toolbox.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage Spotify API credentials, endpoint URLs, the default catalog
//! market, and the gym schedule page.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Credentials deliberately have no default and are *not* asserted at load
//! time: a missing credential must surface as a configuration error inside
//! the tool result string, never as a process abort, because the consumer
//! is an agent host that only understands text replies.

use dotenv;
use std::{env, path::PathBuf};

/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default token endpoint for the client-credentials grant.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default catalog market (ISO 3166-1 alpha-2).
pub const DEFAULT_MARKET: &str = "TW";

/// Default fitness-center announcements page.
pub const DEFAULT_GYM_URL: &str =
    "https://pe-acad.ncku.edu.tw/p/406-1045-201827,r2330.php?Lang=zh-tw";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `agent-toolbox/.env` under the platform-specific local data
/// directory. A missing `.env` file is not an error; the process
/// environment may already carry everything needed.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/agent-toolbox/.env`
/// - macOS: `~/Library/Application Support/agent-toolbox/.env`
/// - Windows: `%LOCALAPPDATA%/agent-toolbox/.env`
///
/// # Errors
///
/// Returns an error string only if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("agent-toolbox/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Absent file is fine; the process environment takes over.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Spotify API client ID, or an empty string when unset.
///
/// The client validates non-emptiness before any network call and reports
/// a configuration error in its reply; see `spotify::auth`.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify API client secret, or an empty string when unset.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to
/// the public endpoint.
///
/// # Example
///
/// ```
/// let api_url = spotify_api_url(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back
/// to the public accounts endpoint.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the catalog market used on every data call.
///
/// Retrieves the `SPOTIFY_MARKET` environment variable (ISO 3166-1 alpha-2
/// country code), falling back to `TW`.
pub fn market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| DEFAULT_MARKET.to_string())
}

/// Returns the URL of the fitness-center announcements page scraped by the
/// gym schedule tool.
pub fn gym_schedule_url() -> String {
    env::var("GYM_SCHEDULE_URL").unwrap_or_else(|_| DEFAULT_GYM_URL.to_string())
}
