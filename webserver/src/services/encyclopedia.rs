//! Encyclopedia lookups against a MediaWiki-compatible API
//!
//! Search goes through `w/api.php` and the top hit's summary through the
//! REST `page/summary` endpoint.

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use shared::{
    process_debug, process_warn, EncyclopediaHit, EncyclopediaLookup, EncyclopediaSummary,
    ProcessId,
};
use std::time::Duration;
use url::Url;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::EncyclopediaClient;

/// Search hits returned to the browser
pub const MAX_HITS: usize = 5;

/// Extract used when the summary endpoint returns none
pub const NO_SUMMARY: &str = "No summary available.";

pub const DEFAULT_ENCYCLOPEDIA_URL: &str = "https://en.wikipedia.org";

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryResponse {
    title: Option<String>,
    extract: Option<String>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

/// reqwest-backed encyclopedia client
#[derive(Debug, Clone)]
pub struct RealEncyclopediaClient {
    http: reqwest::Client,
    base_url: Url,
    markup: Regex,
}

impl RealEncyclopediaClient {
    pub fn new(base_url: &str, timeout: Duration) -> WebServerResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tissue-culture-protocol/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let markup = Regex::new(r"<[^>]+>")
            .map_err(|e| WebServerError::config(format!("markup pattern: {e}")))?;

        Ok(Self {
            http,
            base_url,
            markup,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Remove HTML tags from a search snippet
    pub fn strip_markup(&self, text: &str) -> String {
        self.markup.replace_all(text, "").into_owned()
    }

    fn search_url(&self, query: &str) -> WebServerResult<Url> {
        let mut url = self.base_url.join("w/api.php")?;
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "search")
            .append_pair("srsearch", query)
            .append_pair("format", "json")
            .append_pair("origin", "*");
        Ok(url)
    }

    fn summary_url(&self, title: &str) -> WebServerResult<Url> {
        let mut url = self.base_url.join("api/rest_v1/page/summary/")?;
        url.path_segments_mut()
            .map_err(|_| WebServerError::config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push(title);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> WebServerResult<T> {
        process_debug!(ProcessId::current(), "🔎 GET {}", url);
        let response = self.http.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(WebServerError::EncyclopediaStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl EncyclopediaClient for RealEncyclopediaClient {
    async fn search(&self, query: &str) -> WebServerResult<Vec<EncyclopediaHit>> {
        let response: SearchResponse = self.get_json(self.search_url(query)?).await?;

        Ok(response
            .query
            .unwrap_or_default()
            .search
            .into_iter()
            .map(|entry| EncyclopediaHit {
                snippet: self.strip_markup(&entry.snippet),
                title: entry.title,
            })
            .collect())
    }

    async fn summary(&self, title: &str) -> WebServerResult<EncyclopediaSummary> {
        let response: SummaryResponse = self.get_json(self.summary_url(title)?).await?;

        Ok(EncyclopediaSummary {
            title: response.title.unwrap_or_else(|| title.to_string()),
            extract: response
                .extract
                .filter(|extract| !extract.trim().is_empty())
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            thumbnail: response.thumbnail.map(|thumbnail| thumbnail.source),
        })
    }
}

/// Search for `query` and attach the summary of the top hit.
///
/// A failed summary fetch still returns the hits.
pub async fn lookup<E: EncyclopediaClient + ?Sized>(
    client: &E,
    query: &str,
) -> WebServerResult<EncyclopediaLookup> {
    let query = query.trim();
    if query.is_empty() {
        return Err(WebServerError::invalid_request("Enter a search term."));
    }

    let mut hits = client.search(query).await?;
    hits.truncate(MAX_HITS);

    let summary = match hits.first() {
        Some(top) => match client.summary(&top.title).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                process_warn!(ProcessId::current(), "⚠️ Summary fetch failed for {}: {}", top.title, e);
                None
            }
        },
        None => None,
    };

    Ok(EncyclopediaLookup {
        query: query.to_string(),
        hits,
        summary,
    })
}
