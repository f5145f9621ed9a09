//! # Spotify Integration Module
//!
//! This module implements the catalog side of the toolbox: a credentialed
//! client for the Spotify Web API using the client-credentials grant. It
//! handles the token exchange, the parameterized data calls, and nothing
//! else; shaping responses into host-facing strings happens in
//! [`crate::tools::catalog`].
//!
//! ## Architecture
//!
//! ```text
//! Tool Layer (tools::catalog)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Search (tracks, artists, albums, playlists)
//!     ├── Artist Operations (resolution, top tracks)
//!     ├── Album Operations (resolution, tracklists)
//!     └── Release Listing (discography source data)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Request Discipline
//!
//! Every outbound call carries an explicit 10 second timeout so a hanging
//! upstream can never block the calling agent indefinitely. There are no
//! retries and no backoff: a single failure is terminal for that call and
//! is reported upward as a [`crate::error::ToolError`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /search` - catalog search by term and result kind
//! - `GET /artists/{id}/top-tracks` - market-filtered top tracks
//! - `GET /albums/{id}/tracks` - album tracklist
//! - `GET /artists/{id}/albums` - releases for the discography view

use std::time::Duration;

use reqwest::Client;

use crate::error::ToolError;

pub mod albums;
pub mod artists;
pub mod auth;
pub mod releases;
pub mod search;

/// Timeout applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used by all catalog calls.
pub(crate) fn http_client() -> Result<Client, ToolError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(ToolError::from)
}
