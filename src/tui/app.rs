use ratatui::widgets::ListState;
use url::Url;

use crate::app::Result;
use crate::debounce::Debouncer;
use crate::domain::Story;
use crate::fetcher::search_url;
use crate::session::SearchSession;
use crate::store::PersistedValue;

pub struct TuiApp {
    pub session: SearchSession,
    pub term: PersistedValue<String>,
    pub endpoint: String,
    pub input: String,
    pub debouncer: Debouncer<Url>,
    pub story_index: usize,
    pub story_list_state: ListState,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_refreshing: bool,
}

impl TuiApp {
    pub fn new(
        session: SearchSession,
        term: PersistedValue<String>,
        endpoint: String,
        debouncer: Debouncer<Url>,
    ) -> Self {
        let input = term.get().clone();

        Self {
            session,
            term,
            endpoint,
            input,
            debouncer,
            story_index: 0,
            story_list_state: ListState::default(),
            should_quit: false,
            status_message: None,
            is_refreshing: false,
        }
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.session.state().data.get(self.story_index)
    }

    pub fn move_up(&mut self) {
        if self.story_index > 0 {
            self.story_index -= 1;
            self.story_list_state.select(Some(self.story_index));
        }
    }

    pub fn move_down(&mut self) {
        let len = self.session.state().data.len();
        if len > 0 && self.story_index < len - 1 {
            self.story_index += 1;
            self.story_list_state.select(Some(self.story_index));
        }
    }

    /// Resets the selection after the result set changed.
    pub fn select_first(&mut self) {
        self.story_index = 0;
        if self.session.state().data.is_empty() {
            self.story_list_state.select(None);
        } else {
            self.story_list_state.select(Some(0));
        }
    }

    pub fn push_input(&mut self, c: char) -> Result<()> {
        self.input.push(c);
        self.input_changed()
    }

    pub fn pop_input(&mut self) -> Result<()> {
        self.input.pop();
        self.input_changed()
    }

    /// Persists the edited term and stages the new query URL. The fetch
    /// itself fires from the event loop once the debouncer settles.
    fn input_changed(&mut self) -> Result<()> {
        self.term.set(self.input.clone())?;
        let url = search_url(&self.endpoint, &self.input)?;
        self.debouncer.update(url);
        self.clear_status();
        Ok(())
    }

    pub fn delete_selected(&mut self) {
        let Some(story) = self.selected_story() else {
            return;
        };
        let id = story.object_id.clone();
        let title = story.display_title();

        self.session.delete_story(&id);

        let len = self.session.state().data.len();
        if len == 0 {
            self.story_list_state.select(None);
        } else {
            if self.story_index >= len {
                self.story_index = len - 1;
            }
            self.story_list_state.select(Some(self.story_index));
        }

        self.set_status(format!("Removed \"{}\"", title));
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
