pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::debounce::Debouncer;
use crate::fetcher::search_url;
use crate::session::SearchSession;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let term = ctx.search_term()?;
    let quiet_period = Duration::from_millis(ctx.config.search.debounce_ms);
    let initial_url = search_url(&ctx.config.search.endpoint, term.get())?;

    let session = SearchSession::new(ctx.fetcher.clone());
    let debouncer = Debouncer::new(initial_url.clone(), quiet_period);
    let mut app = TuiApp::new(
        session,
        term,
        ctx.config.search.endpoint.clone(),
        debouncer,
    );
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Initial fetch for the persisted term
    fetch(terminal, &mut app, &initial_url).await?;

    loop {
        terminal.draw(|frame| layout::render(frame, &mut app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match Action::from(key) {
                Action::Quit => {
                    app.should_quit = true;
                }
                Action::MoveUp => {
                    app.move_up();
                }
                Action::MoveDown => {
                    app.move_down();
                }
                Action::DeleteStory => {
                    app.delete_selected();
                }
                Action::OpenInBrowser => {
                    open_selected(&mut app);
                }
                Action::Input(c) => {
                    app.push_input(c)?;
                }
                Action::Backspace => {
                    app.pop_input()?;
                }
                Action::None => {}
            },
            AppEvent::Tick => {
                // A settled debouncer value is the signal to refetch
                if let Some(url) = app.debouncer.poll().cloned() {
                    fetch(terminal, &mut app, &url).await?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Draws the loading state before the request blocks the loop.
async fn fetch(terminal: &mut Tui, app: &mut TuiApp, url: &url::Url) -> Result<()> {
    app.is_refreshing = true;
    terminal.draw(|frame| layout::render(frame, app))?;

    app.session.fetch_stories(url).await;

    app.is_refreshing = false;
    app.select_first();
    Ok(())
}

fn open_selected(app: &mut TuiApp) {
    let Some(story) = app.selected_story() else {
        return;
    };

    match story.url.clone() {
        Some(link) => {
            if let Err(e) = open::that(&link) {
                app.set_status(format!("Failed to open browser: {}", e));
            }
        }
        None => {
            app.set_status("Selected story has no link".to_string());
        }
    }
}
