//! Parser for the `malappinfo.php` XML document.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::mal::error::MalError;
use crate::mal::model::RawAnimeEntry;

/// Parse an upstream list document from raw XML bytes.
///
/// A well-formed document with zero `<anime>` elements yields an empty
/// vector; the upstream answers that way for users with no list. A
/// document carrying an `<error>` element in place of list content
/// fails with [`MalError::Upstream`].
pub fn parse_list_document(xml: &[u8]) -> Result<Vec<RawAnimeEntry>, MalError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current_entry: Option<EntryBuilder> = None;
    let mut current_element = String::new();
    let mut saw_root = false;
    let mut upstream_error: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "myanimelist" {
                    saw_root = true;
                }
                if name == "anime" {
                    current_entry = Some(EntryBuilder::default());
                }
                current_element = name;
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "anime" {
                    if let Some(builder) = current_entry.take() {
                        entries.push(builder.build()?);
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if text.is_empty() {
                    continue;
                }

                if let Some(ref mut entry) = current_entry {
                    entry.set(&current_element, text);
                } else if current_element == "error" {
                    upstream_error = Some(text);
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                if let Some(ref mut entry) = current_entry {
                    entry.set(&current_element, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MalError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(message) = upstream_error {
        return Err(MalError::Upstream(message));
    }
    if !saw_root {
        return Err(MalError::MalformedDocument(
            "missing <myanimelist> root element".to_string(),
        ));
    }

    Ok(entries)
}

/// Accumulates the child elements of one `<anime>` element.
#[derive(Default)]
struct EntryBuilder {
    series_animedb_id: Option<String>,
    series_title: Option<String>,
    series_image: Option<String>,
    series_status: Option<String>,
    series_episodes: Option<String>,
    my_watched_episodes: Option<String>,
    my_status: Option<String>,
    my_last_updated: Option<String>,
}

impl EntryBuilder {
    fn set(&mut self, element: &str, value: String) {
        match element {
            "series_animedb_id" => self.series_animedb_id = Some(value),
            "series_title" => self.series_title = Some(value),
            "series_image" => self.series_image = Some(value),
            "series_status" => self.series_status = Some(value),
            "series_episodes" => self.series_episodes = Some(value),
            "my_watched_episodes" => self.my_watched_episodes = Some(value),
            "my_status" => self.my_status = Some(value),
            "my_last_updated" => self.my_last_updated = Some(value),
            // The upstream carries many more fields (synonyms, dates,
            // scores); they are not part of the response shape.
            _ => {}
        }
    }

    fn build(self) -> Result<RawAnimeEntry, MalError> {
        Ok(RawAnimeEntry {
            series_animedb_id: require(self.series_animedb_id, "series_animedb_id")?,
            series_title: require(self.series_title, "series_title")?,
            series_image: require(self.series_image, "series_image")?,
            series_status: require(self.series_status, "series_status")?,
            series_episodes: parse_count(require(self.series_episodes, "series_episodes")?, "series_episodes")?,
            my_watched_episodes: parse_count(
                require(self.my_watched_episodes, "my_watched_episodes")?,
                "my_watched_episodes",
            )?,
            my_status: require(self.my_status, "my_status")?,
            my_last_updated: parse_timestamp(self.my_last_updated)?,
        })
    }
}

fn require(field: Option<String>, name: &str) -> Result<String, MalError> {
    field.ok_or_else(|| MalError::MalformedDocument(format!("entry is missing required field {}", name)))
}

fn parse_count(raw: String, name: &str) -> Result<u32, MalError> {
    raw.parse::<u32>().map_err(|_| {
        MalError::MalformedDocument(format!("field {} is not a base-10 integer: {}", name, raw))
    })
}

fn parse_timestamp(raw: Option<String>) -> Result<Option<u64>, MalError> {
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<u64>().map(Some).map_err(|_| {
            MalError::MalformedDocument(format!("field my_last_updated is not a timestamp: {}", s))
        }),
    }
}
