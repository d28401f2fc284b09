//! Upstream list fetcher.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::UpstreamConfig;
use crate::mal::error::MalError;
use crate::mal::model::RawAnimeEntry;
use crate::mal::parser::parse_list_document;

/// Client for the upstream anime list endpoint.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Clone, Debug)]
pub struct MalClient {
    client: Client,
    base_url: Url,
}

impl MalClient {
    /// Create a client from upstream settings and a fetch timeout.
    pub fn new(config: &UpstreamConfig, timeout: Duration) -> Result<Self, MalError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build the endpoint URL for one user's full list.
    ///
    /// The username is percent-encoded into the query. The status filter
    /// is always `all`: requesting the entire list is the only
    /// officially supported way to read the data.
    pub fn endpoint_url(&self, username: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("u", username)
            .append_pair("status", "all")
            .append_pair("type", "anime");
        url
    }

    /// Fetch and parse one user's list.
    ///
    /// Any transport failure, non-success status, or decode failure
    /// fails the whole fetch; a partial list is never returned. A
    /// well-formed document with no entries is a successful empty list.
    pub async fn fetch_list(&self, username: &str) -> Result<Vec<RawAnimeEntry>, MalError> {
        let url = self.endpoint_url(username);
        tracing::debug!(url = %url, "Fetching upstream list");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MalError::Status(status));
        }

        let body = response.bytes().await?;
        let entries = parse_list_document(&body)?;

        tracing::debug!(user = %username, entries = entries.len(), "Parsed upstream list");
        Ok(entries)
    }
}
