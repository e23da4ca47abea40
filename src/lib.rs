//! # Kindling
//!
//! A terminal client for searching Hacker News stories through the public
//! Algolia search API.
//!
//! ## Architecture
//!
//! ```text
//! Persisted term → Debouncer → Fetcher → SearchSession → UI
//! ```
//!
//! - [`debounce`]: collapses rapid keystrokes into one settled query
//! - [`fetcher`]: HTTP client for the search endpoint
//! - [`session`]: the fetch-lifecycle state machine
//! - [`store`]: SQLite persistence for the search term
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # One-shot search
//! kindling search "rust async"
//!
//! # Show the persisted search term
//! kindling term
//!
//! # Launch the TUI
//! kindling tui
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: TOML configuration
//! - [`debounce`]: Quiet-period value stabilization
//! - [`domain`]: Core domain models (Story, SearchState, StoryAction)
//! - [`fetcher`]: Search request building and HTTP fetching
//! - [`session`]: Fetch-lifecycle controller
//! - [`store`]: Settings persistence
//! - [`tui`]: Terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// store, fetcher, configuration.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `search [query]` - One-shot search
/// - `term [value]` - Show or set the persisted search term
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/kindling/config.toml`, covering the search
/// endpoint, the debounce quiet period, and HTTP timeouts.
pub mod config;

/// Quiet-period stabilization for rapidly-changing values.
pub mod debounce;

/// Core domain models.
///
/// - [`Story`](domain::Story): one search hit with opaque passthrough of
///   uninterpreted fields
/// - [`SearchState`](domain::SearchState): loading/error/data state
/// - [`StoryAction`](domain::StoryAction) and [`reduce`](domain::reduce):
///   the fetch-lifecycle reducer
pub mod domain;

/// Search request building and HTTP fetching.
///
/// - [`SearchFetcher`](fetcher::SearchFetcher): async trait for search
///   requests
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based
///   implementation
pub mod fetcher;

/// Fetch-lifecycle controller driving one search session.
pub mod session;

/// Settings persistence.
///
/// - [`Store`](store::Store): key/value trait
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`PersistedValue`](store::PersistedValue): one key with a
///   write-through in-memory copy
pub mod store;

/// Terminal user interface.
///
/// Search input on top, story list below, status line at the bottom.
/// Typing edits the term and refetches after the quiet period; Up/Down
/// navigate, Delete removes a story locally, Enter opens it in the
/// browser, Esc quits.
pub mod tui;
