use serde::{Deserialize, Serialize};

use crate::domain::Story;

/// Result-set state for one search session.
///
/// `data` always holds the last successfully completed fetch or deletion.
/// `is_error` and `is_loading` are never both true.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchState {
    pub data: Vec<Story>,
    pub is_error: bool,
    pub is_loading: bool,
}

impl SearchState {
    /// Sum of comment counts across the current result set.
    pub fn total_comments(&self) -> u64 {
        self.data
            .iter()
            .map(|story| u64::from(story.comment_count()))
            .sum()
    }
}

/// One step of the fetch lifecycle, consumed exactly once by [`reduce`].
#[derive(Debug, Clone)]
pub enum StoryAction {
    InitFetch,
    SetStories(Vec<Story>),
    FetchFailure,
    RemoveStory(String),
}

/// Applies `action` to `state`, producing the next state.
///
/// `InitFetch` keeps the previous results so they stay visible while a new
/// request is in flight. `FetchFailure` also keeps them; only a completed
/// fetch or a deletion replaces `data`.
pub fn reduce(state: SearchState, action: StoryAction) -> SearchState {
    match action {
        StoryAction::InitFetch => SearchState {
            is_loading: true,
            is_error: false,
            ..state
        },
        StoryAction::SetStories(data) => SearchState {
            data,
            is_error: false,
            is_loading: false,
        },
        StoryAction::FetchFailure => SearchState {
            is_loading: false,
            is_error: true,
            ..state
        },
        StoryAction::RemoveStory(id) => SearchState {
            data: state
                .data
                .into_iter()
                .filter(|story| story.object_id != id)
                .collect(),
            is_error: false,
            is_loading: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, comments: u32) -> Story {
        serde_json::from_value(serde_json::json!({
            "objectID": id,
            "title": format!("story {id}"),
            "num_comments": comments,
        }))
        .unwrap()
    }

    #[test]
    fn test_init_fetch_keeps_previous_data() {
        let state = reduce(
            SearchState {
                data: vec![story("1", 3)],
                is_error: false,
                is_loading: false,
            },
            StoryAction::InitFetch,
        );
        assert!(state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.data.len(), 1);
    }

    #[test]
    fn test_init_then_set_stories() {
        let state = reduce(SearchState::default(), StoryAction::InitFetch);
        let state = reduce(state, StoryAction::SetStories(vec![story("1", 5), story("2", 7)]));
        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.data.len(), 2);
        assert_eq!(state.total_comments(), 12);
    }

    #[test]
    fn test_init_then_failure_preserves_data() {
        let before = SearchState {
            data: vec![story("1", 3)],
            is_error: false,
            is_loading: false,
        };
        let state = reduce(before, StoryAction::InitFetch);
        let state = reduce(state, StoryAction::FetchFailure);
        assert!(!state.is_loading);
        assert!(state.is_error);
        assert_eq!(state.data[0].object_id, "1");
    }

    #[test]
    fn test_remove_story_filters_by_id() {
        let state = SearchState {
            data: vec![story("1", 0), story("2", 0)],
            is_error: false,
            is_loading: false,
        };
        let state = reduce(state, StoryAction::RemoveStory("1".into()));
        assert_eq!(state.data.len(), 1);
        assert_eq!(state.data[0].object_id, "2");
        assert!(!state.is_error);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let state = SearchState {
            data: vec![story("1", 0)],
            is_error: false,
            is_loading: false,
        };
        let state = reduce(state, StoryAction::RemoveStory("99".into()));
        assert_eq!(state.data.len(), 1);
    }

    #[test]
    fn test_flags_never_both_set() {
        let actions = [
            StoryAction::InitFetch,
            StoryAction::FetchFailure,
            StoryAction::InitFetch,
            StoryAction::SetStories(vec![story("1", 1)]),
            StoryAction::RemoveStory("1".into()),
            StoryAction::InitFetch,
            StoryAction::RemoveStory("2".into()),
            StoryAction::FetchFailure,
        ];

        let mut state = SearchState::default();
        for action in actions {
            state = reduce(state, action);
            assert!(
                !(state.is_error && state.is_loading),
                "error and loading flags set simultaneously"
            );
        }
    }
}
