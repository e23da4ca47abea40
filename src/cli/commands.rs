use crate::app::{AppContext, Result};
use crate::fetcher::search_url;
use crate::session::SearchSession;

pub async fn search_stories(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let mut term = ctx.search_term()?;
    let query = match query {
        Some(q) => {
            // The query becomes the new persisted term
            term.set(q.clone())?;
            q
        }
        None => term.get().clone(),
    };

    let url = search_url(&ctx.config.search.endpoint, &query)?;
    let mut session = SearchSession::new(ctx.fetcher.clone());
    session.fetch_stories(&url).await;

    let state = session.state();
    if state.is_error {
        eprintln!("Search for \"{}\" failed", query);
        return Ok(());
    }

    if state.data.is_empty() {
        println!("No stories matching \"{}\"", query);
        return Ok(());
    }

    for story in &state.data {
        let date = story
            .created_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());

        println!(
            "{:>5}pt {:>5}c {} {}",
            story.points.unwrap_or(0),
            story.comment_count(),
            date,
            story.display_title()
        );
        if let Some(link) = &story.url {
            println!("{:22}{}", "", link);
        }
    }

    println!(
        "\n{} stories, {} comments in total",
        state.data.len(),
        state.total_comments()
    );

    Ok(())
}

pub fn show_or_set_term(ctx: &AppContext, value: Option<String>) -> Result<()> {
    let mut term = ctx.search_term()?;

    match value {
        Some(v) => {
            term.set(v)?;
            println!("Search term set to \"{}\"", term.get());
        }
        None => println!("{}", term.get()),
    }

    Ok(())
}
