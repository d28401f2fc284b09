//! The watching-list pipeline.
//!
//! Pure transformation over raw upstream entries: keep the series the
//! user is currently watching, order them by most recent update, and
//! map each one into the simplified response shape. Sorting happens on
//! raw entries, before mapping discards the update timestamp.

use std::cmp::Ordering;

use serde::Serialize;

use crate::mal::RawAnimeEntry;

/// Upstream code for a series the user is currently watching.
const STATUS_WATCHING: &str = "1";

/// Upstream code for a series that is still airing.
const STATUS_AIRING: &str = "1";

/// Simplified series shape returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeSeries {
    pub id: String,
    pub title: String,
    pub image: String,
    pub is_airing: bool,
    pub total_episodes: u32,
    pub watched_episodes: u32,
}

/// True if the user has the series marked as currently watching.
pub fn is_currently_watching(entry: &RawAnimeEntry) -> bool {
    entry.my_status == STATUS_WATCHING
}

/// Ordering for raw entries: most recently updated first; entries that
/// were never updated sort after every entry that was.
pub fn compare_last_update(a: &RawAnimeEntry, b: &RawAnimeEntry) -> Ordering {
    match (a.my_last_updated, b.my_last_updated) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Map one raw entry into the response shape.
pub fn to_series(entry: RawAnimeEntry) -> AnimeSeries {
    AnimeSeries {
        id: entry.series_animedb_id,
        title: entry.series_title,
        image: entry.series_image,
        is_airing: entry.series_status == STATUS_AIRING,
        total_episodes: entry.series_episodes,
        watched_episodes: entry.my_watched_episodes,
    }
}

/// Filter, sort, and map a full raw list into the response list.
pub fn watching_series(entries: Vec<RawAnimeEntry>) -> Vec<AnimeSeries> {
    let mut watching: Vec<RawAnimeEntry> = entries
        .into_iter()
        .filter(is_currently_watching)
        .collect();
    // Stable sort: ties keep their upstream order.
    watching.sort_by(compare_last_update);
    watching.into_iter().map(to_series).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, my_status: &str, last_updated: Option<u64>) -> RawAnimeEntry {
        RawAnimeEntry {
            series_animedb_id: id.to_string(),
            series_title: format!("Series {}", id),
            series_image: format!("https://cdn.example/{}.jpg", id),
            series_status: "2".to_string(),
            series_episodes: 26,
            my_watched_episodes: 10,
            my_status: my_status.to_string(),
            my_last_updated: last_updated,
        }
    }

    #[test]
    fn only_watching_entries_survive_the_filter() {
        let entries = vec![
            entry("1", "1", Some(10)),
            entry("2", "2", Some(20)),
            entry("3", "3", Some(30)),
            entry("4", "1", Some(40)),
        ];

        let ids: Vec<String> = watching_series(entries).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["4", "1"]);
    }

    #[test]
    fn most_recent_update_sorts_first() {
        let entries = vec![
            entry("old", "1", Some(100)),
            entry("new", "1", Some(300)),
            entry("mid", "1", Some(200)),
        ];

        let ids: Vec<String> = watching_series(entries).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn never_updated_entries_sort_last() {
        let entries = vec![
            entry("never-a", "1", None),
            entry("updated", "1", Some(5)),
            entry("never-b", "1", None),
        ];

        let ids: Vec<String> = watching_series(entries).into_iter().map(|s| s.id).collect();
        // Stable sort keeps the two never-updated entries in upstream order.
        assert_eq!(ids, vec!["updated", "never-a", "never-b"]);
    }

    #[test]
    fn equal_timestamps_compare_equal() {
        let a = entry("a", "1", Some(7));
        let b = entry("b", "1", Some(7));
        assert_eq!(compare_last_update(&a, &b), Ordering::Equal);

        let neither = (entry("c", "1", None), entry("d", "1", None));
        assert_eq!(compare_last_update(&neither.0, &neither.1), Ordering::Equal);
    }

    #[test]
    fn mapping_keeps_id_as_string_and_parses_airing_flag() {
        let mut finished = entry("5", "1", Some(100));
        finished.series_title = "Cowboy Bebop".to_string();

        let series = to_series(finished);
        assert_eq!(series.id, "5");
        assert_eq!(series.title, "Cowboy Bebop");
        assert!(!series.is_airing);
        assert_eq!(series.total_episodes, 26);
        assert_eq!(series.watched_episodes, 10);

        let mut airing = entry("6", "1", None);
        airing.series_status = "1".to_string();
        assert!(to_series(airing).is_airing);
    }

    #[test]
    fn serializes_with_camel_case_member_names() {
        let series = to_series(entry("5", "1", Some(100)));
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "5",
                "title": "Series 5",
                "image": "https://cdn.example/5.jpg",
                "isAiring": false,
                "totalEpisodes": 26,
                "watchedEpisodes": 10,
            })
        );
    }

    #[test]
    fn pipeline_is_pure() {
        let entries = vec![entry("1", "1", Some(10)), entry("2", "2", None)];
        assert_eq!(watching_series(entries.clone()), watching_series(entries));
    }
}
