//! Encyclopedia lookup payloads returned to the browser

use serde::{Deserialize, Serialize};

/// One search result with markup already stripped from the snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncyclopediaHit {
    pub title: String,
    pub snippet: String,
}

/// Summary of the top search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncyclopediaSummary {
    pub title: String,
    pub extract: String,
    pub thumbnail: Option<String>,
}

/// Combined search hits and top-result summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncyclopediaLookup {
    pub query: String,
    pub hits: Vec<EncyclopediaHit>,
    pub summary: Option<EncyclopediaSummary>,
}

impl EncyclopediaLookup {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            hits: Vec::new(),
            summary: None,
        }
    }
}
