//! Typed representation of upstream list entries.

/// One `<anime>` element from the upstream list document.
///
/// Episode counts are parsed to integers at the boundary. Identifiers
/// and status codes stay strings because the upstream treats them as
/// opaque codes, not numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnimeEntry {
    pub series_animedb_id: String,
    pub series_title: String,
    pub series_image: String,
    /// Airing status code; "1" means the series is still airing.
    pub series_status: String,
    pub series_episodes: u32,
    pub my_watched_episodes: u32,
    /// Personal watch status code; "1" means currently watching.
    pub my_status: String,
    /// Unix timestamp of the user's last update to this entry. Absent
    /// when the entry was never updated.
    pub my_last_updated: Option<u64>,
}
