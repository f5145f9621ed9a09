use serde::{Deserialize, Serialize};

/// Bearer token obtained through the client-credentials grant.
///
/// `obtained_at` is a unix timestamp stamped locally when the exchange
/// succeeded; together with `expires_in` it drives the in-process cache in
/// `management::TokenManager`. Tokens are never persisted to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Wire shape of the token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
}

/// Response of `GET /search`. Only the container matching the requested
/// result kind is populated by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<TrackObject>>,
    pub artists: Option<Paging<ArtistObject>>,
    pub albums: Option<Paging<AlbumObject>>,
    pub playlists: Option<Paging<PlaylistObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub album: Option<AlbumRef>,
    pub duration_ms: Option<u64>,
    pub track_number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

/// Album data as embedded in a track object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub release_date: Option<String>,
    pub album_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub name: String,
    pub owner: Option<PlaylistOwner>,
    pub tracks: Option<PlaylistTracks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub total: Option<u64>,
}

/// Response of `GET /artists/{id}/top-tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackObject>,
}

/// Response of `GET /albums/{id}/tracks`. Items are simplified track
/// objects without the embedded album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<AlbumTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub track_number: Option<u32>,
    pub name: String,
    pub duration_ms: Option<u64>,
}

/// Response of `GET /artists/{id}/albums`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistAlbumsResponse {
    pub items: Vec<AlbumObject>,
}

/// Caller-supplied identity fields for the whoami helper. Constructed fresh
/// per call; absent fields simply drop out of the formatted line.
#[derive(Debug, Clone, Default)]
pub struct UserIdentity {
    pub name: Option<String>,
    pub id: Option<String>,
    pub email: Option<String>,
}
