//! Fetch-lifecycle controller for one search session.
//!
//! A [`SearchSession`] owns its [`SearchState`] outright. Every mutation
//! goes through [`reduce`] via a dispatched [`StoryAction`], so the state
//! invariants hold for any call sequence. `fetch_stories` takes `&mut self`,
//! which serializes requests per session: a stale response can never
//! overwrite the result of a newer one.

use std::sync::Arc;

use url::Url;

use crate::domain::{reduce, SearchState, StoryAction};
use crate::fetcher::SearchFetcher;

pub struct SearchSession {
    fetcher: Arc<dyn SearchFetcher + Send + Sync>,
    state: SearchState,
}

impl SearchSession {
    pub fn new(fetcher: Arc<dyn SearchFetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Issues one request for `url` and settles the state with the outcome.
    ///
    /// Any failure (connect, timeout, non-2xx status, body decode) collapses
    /// into the error flag; the cause is logged and not distinguished.
    pub async fn fetch_stories(&mut self, url: &Url) {
        self.dispatch(StoryAction::InitFetch);

        match self.fetcher.search(url).await {
            Ok(response) => self.dispatch(StoryAction::SetStories(response.hits)),
            Err(e) => {
                tracing::warn!("search request for {} failed: {}", url, e);
                self.dispatch(StoryAction::FetchFailure);
            }
        }
    }

    /// Removes a story from the fetched set. Local only, no request.
    pub fn delete_story(&mut self, id: &str) {
        self.dispatch(StoryAction::RemoveStory(id.to_string()));
    }

    fn dispatch(&mut self, action: StoryAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::app::{KindlingError, Result};
    use crate::domain::Story;
    use crate::fetcher::SearchResponse;

    struct StubFetcher {
        hits: Option<Vec<Story>>,
    }

    #[async_trait]
    impl SearchFetcher for StubFetcher {
        async fn search(&self, _url: &Url) -> Result<SearchResponse> {
            match &self.hits {
                Some(hits) => Ok(SearchResponse {
                    hits: hits.clone(),
                    nb_hits: Some(hits.len() as u64),
                    page: Some(0),
                    processing_time_ms: Some(1),
                }),
                None => Err(KindlingError::Io(std::io::Error::other("connection reset"))),
            }
        }
    }

    fn story(id: &str) -> Story {
        serde_json::from_value(serde_json::json!({
            "objectID": id,
            "title": format!("story {id}"),
            "num_comments": 2,
        }))
        .unwrap()
    }

    fn url() -> Url {
        Url::parse("https://hn.algolia.com/api/v1/search?query=rust").unwrap()
    }

    #[tokio::test]
    async fn test_successful_fetch_settles_loaded() {
        let fetcher = Arc::new(StubFetcher {
            hits: Some(vec![story("1"), story("2")]),
        });
        let mut session = SearchSession::new(fetcher);

        session.fetch_stories(&url()).await;

        let state = session.state();
        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.data.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_results() {
        let mut session = SearchSession::new(Arc::new(StubFetcher {
            hits: Some(vec![story("1")]),
        }));
        session.fetch_stories(&url()).await;

        let mut session = SearchSession {
            fetcher: Arc::new(StubFetcher { hits: None }),
            state: session.state.clone(),
        };
        session.fetch_stories(&url()).await;

        let state = session.state();
        assert!(state.is_error);
        assert!(!state.is_loading);
        assert_eq!(state.data.len(), 1);
        assert_eq!(state.data[0].object_id, "1");
    }

    #[tokio::test]
    async fn test_delete_story_is_local() {
        let fetcher = Arc::new(StubFetcher {
            hits: Some(vec![story("1"), story("2")]),
        });
        let mut session = SearchSession::new(fetcher);
        session.fetch_stories(&url()).await;

        session.delete_story("1");
        assert_eq!(session.state().data.len(), 1);
        assert_eq!(session.state().data[0].object_id, "2");

        // Deleting an id that is not present changes nothing
        session.delete_story("1");
        assert_eq!(session.state().data.len(), 1);
    }
}
