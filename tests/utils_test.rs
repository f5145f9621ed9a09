use agent_toolbox::types::{AlbumObject, ArtistRef};
use agent_toolbox::utils::*;

// Helper function to create a test album
fn create_test_album(id: &str, name: &str, release_date: Option<&str>, artist_name: &str) -> AlbumObject {
    AlbumObject {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![ArtistRef {
            id: Some(format!("{}_artist_id", id)),
            name: artist_name.to_string(),
        }],
        release_date: release_date.map(|d| d.to_string()),
        album_type: Some("album".to_string()),
    }
}

#[test]
fn test_search_kind_display() {
    assert_eq!(SearchKind::Track.to_string(), "track");
    assert_eq!(SearchKind::Artist.to_string(), "artist");
    assert_eq!(SearchKind::Album.to_string(), "album");
    assert_eq!(SearchKind::Playlist.to_string(), "playlist");
}

#[test]
fn test_search_kind_default() {
    // The default result kind is track
    assert_eq!(SearchKind::default(), SearchKind::Track);
}

#[test]
fn test_search_kind_all_constant() {
    // Ensure ALL constant contains all variants
    assert_eq!(SearchKind::ALL.len(), 4);
    assert!(SearchKind::ALL.contains(&SearchKind::Track));
    assert!(SearchKind::ALL.contains(&SearchKind::Artist));
    assert!(SearchKind::ALL.contains(&SearchKind::Album));
    assert!(SearchKind::ALL.contains(&SearchKind::Playlist));
}

#[test]
fn test_parse_search_kind_valid_inputs() {
    assert_eq!(parse_search_kind("track").unwrap(), SearchKind::Track);
    assert_eq!(parse_search_kind("artist").unwrap(), SearchKind::Artist);
    assert_eq!(parse_search_kind("album").unwrap(), SearchKind::Album);
    assert_eq!(parse_search_kind("playlist").unwrap(), SearchKind::Playlist);

    // Case insensitivity and surrounding whitespace
    assert_eq!(parse_search_kind("TRACK").unwrap(), SearchKind::Track);
    assert_eq!(parse_search_kind("  Album ").unwrap(), SearchKind::Album);
}

#[test]
fn test_parse_search_kind_invalid_inputs() {
    // Empty and whitespace-only input
    let result = parse_search_kind("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_search_kind("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Unknown kind
    let result = parse_search_kind("podcast");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'podcast'"));
}

#[test]
fn test_sort_releases_newest_first() {
    let mut albums = vec![
        create_test_album("id1", "Old Album", Some("2020-05-01"), "Artist A"),
        create_test_album("id2", "New Album", Some("2024-01-15"), "Artist A"),
        create_test_album("id3", "Year Only", Some("2022"), "Artist A"),
        create_test_album("id4", "Year Month", Some("2023-07"), "Artist A"),
    ];

    sort_releases_newest_first(&mut albums);

    // Lexicographic descending works across all date precisions
    let dates: Vec<&str> = albums
        .iter()
        .map(|a| a.release_date.as_deref().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-01-15", "2023-07", "2022", "2020-05-01"]);
}

#[test]
fn test_sort_releases_missing_date_last() {
    let mut albums = vec![
        create_test_album("id1", "Dateless", None, "Artist A"),
        create_test_album("id2", "Dated", Some("2021-03-03"), "Artist A"),
    ];

    sort_releases_newest_first(&mut albums);

    assert_eq!(albums[0].name, "Dated");
    assert_eq!(albums[1].name, "Dateless");
}

#[test]
fn test_sort_releases_is_stable_on_ties() {
    let mut albums = vec![
        create_test_album("id1", "First", Some("2023-01-01"), "Artist A"),
        create_test_album("id2", "Second", Some("2023-01-01"), "Artist B"),
    ];

    sort_releases_newest_first(&mut albums);

    // Equal dates keep the provider's order
    assert_eq!(albums[0].name, "First");
    assert_eq!(albums[1].name, "Second");
}

#[test]
fn test_format_duration_min() {
    // Regression case from the tracklist contract: 125000 ms -> 2.08 min
    assert_eq!(format_duration_min(125000), "2.08");

    assert_eq!(format_duration_min(60000), "1.00");
    assert_eq!(format_duration_min(0), "0.00");
    assert_eq!(format_duration_min(90500), "1.51");
}

#[test]
fn test_truncate_chars() {
    assert_eq!(truncate_chars("hello", 10), "hello");
    assert_eq!(truncate_chars("hello", 3), "hel");
    assert_eq!(truncate_chars("", 5), "");

    // Multi-byte characters count as one character each
    assert_eq!(truncate_chars("體適能中心", 3), "體適能");
}
