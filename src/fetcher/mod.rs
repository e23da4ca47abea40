pub mod http_fetcher;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::app::Result;
use crate::domain::Story;

/// One page of search results in the shape the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
    #[serde(rename = "nbHits")]
    pub nb_hits: Option<u64>,
    pub page: Option<u32>,
    #[serde(rename = "processingTimeMS")]
    pub processing_time_ms: Option<u64>,
}

#[async_trait]
pub trait SearchFetcher {
    async fn search(&self, url: &Url) -> Result<SearchResponse>;
}

/// Builds the request URL: `<endpoint>?query=<urlencoded term>`.
pub fn search_url(endpoint: &str, query: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut().clear().append_pair("query", query);
    Ok(url)
}
