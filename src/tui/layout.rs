use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Stories
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_pane(frame, app, chunks[0]);
    render_stories_pane(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_search_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let input = Paragraph::new(app.input.as_str()).block(block);
    frame.render_widget(input, area);

    // Keep the cursor at the end of the edited term
    frame.set_cursor_position((area.x + 1 + app.input.len() as u16, area.y + 1));
}

fn render_stories_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let state = app.session.state();

    let items: Vec<ListItem> = state
        .data
        .iter()
        .map(|story| {
            let date = story
                .created_at
                .map(|d| d.format("%m/%d").to_string())
                .unwrap_or_else(|| "     ".to_string());

            let content = format!(
                "{:>5}pt {:>5}c {} {}",
                story.points.unwrap_or(0),
                story.comment_count(),
                date,
                story.display_title()
            );

            ListItem::new(content)
        })
        .collect();

    let title = format!(" Stories ({}) ", state.data.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut app.story_list_state);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.session.state();

    let text = if app.is_refreshing || state.is_loading {
        "Loading...".to_string()
    } else if state.is_error {
        "Something went wrong, edit the search to retry".to_string()
    } else if let Some(message) = &app.status_message {
        message.clone()
    } else {
        format!(
            "{} stories | {} comments | Enter opens, Del removes, Esc quits",
            state.data.len(),
            state.total_comments()
        )
    };

    let style = if state.is_error && !app.is_refreshing {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
