pub mod state;
pub mod story;

pub use state::{reduce, SearchState, StoryAction};
pub use story::Story;
