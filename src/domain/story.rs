use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One search hit as the API returns it.
///
/// Only the fields this client interprets are named; everything else the
/// API sends is kept verbatim in `extra` so a round-trip loses nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub author: Option<String>,
    pub points: Option<u32>,
    pub num_comments: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Story {
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => html_escape::decode_html_entities(title).to_string(),
            None => "(untitled)".to_string(),
        }
    }

    /// Comment count with absent or null counts treated as zero.
    pub fn comment_count(&self) -> u32 {
        self.num_comments.unwrap_or(0)
    }
}
