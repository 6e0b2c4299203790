// crates/tui/src/ui/home.rs
//! Home view rendering

use super::truncate;
use crate::{
    pagination::PageSlot,
    state::{AppState, Focus},
    theme::Theme,
    view::{home_view, HomeView, ListBody, MovieCard},
};
use marquee_core::display::LIST_SEPARATOR;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Shown when a search succeeds with nothing in it
pub const NO_RESULTS: &str = "No movies found";

/// Renders the home view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let view = home_view(state);
    let list_focused = state.focus == Focus::List;

    let mut constraints = Vec::with_capacity(3);
    if !view.trending.is_empty() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if !view.trending.is_empty() {
        render_trending(frame, chunks[next], &view, theme);
        next += 1;
    }
    render_list(frame, chunks[next], &view, list_focused, theme);
    render_page_bar(frame, chunks[next + 1], &view, theme);
}

/// Renders the trending strip
fn render_trending(frame: &mut Frame, area: Rect, view: &HomeView, theme: &Theme) {
    let mut spans = Vec::new();
    for card in &view.trending {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("{}. ", card.rank), theme.accent_style()));
        spans.push(Span::styled(card.title.clone(), theme.text_style()));
    }

    let strip = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color(false)))
            .title("Trending Movies"),
    );

    frame.render_widget(strip, area);
}

/// Renders the result list, or the loading/error/empty message in its place
fn render_list(frame: &mut Frame, area: Rect, view: &HomeView, focused: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color(focused)))
        .title(if view.query.trim().is_empty() {
            "Popular Movies".to_string()
        } else {
            format!("Results for \"{}\"", view.query.trim())
        });

    let message = |text: &str, style: Style| {
        Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
            .wrap(Wrap { trim: true })
            .block(block.clone())
    };

    match &view.list {
        ListBody::Loading => {
            frame.render_widget(message("Loading…", theme.text_secondary_style()), area);
        }
        ListBody::Error(error) => {
            frame.render_widget(message(error, theme.error_style()), area);
        }
        ListBody::Results(cards) if cards.is_empty() => {
            frame.render_widget(message(NO_RESULTS, theme.text_secondary_style()), area);
        }
        ListBody::Results(cards) => {
            // Borders plus the highlight symbol
            let width = area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = cards
                .iter()
                .map(|card| ListItem::new(card_line(card, width, theme)))
                .collect();

            let list = List::new(items)
                .block(block.clone())
                .highlight_style(theme.highlight_style())
                .highlight_symbol("> ");
            let mut list_state = ListState::default().with_selected(view.selected);

            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

/// One result row: title, rating, language and year
fn card_line(card: &MovieCard, width: usize, theme: &Theme) -> Line<'static> {
    let rest = [
        card.rating.as_str(),
        card.language.as_str(),
        card.year.as_str(),
    ]
    .join(LIST_SEPARATOR);
    let rest_width = rest.chars().count() + LIST_SEPARATOR.chars().count();
    let title = truncate(&card.title, width.saturating_sub(rest_width));

    Line::from(vec![
        Span::styled(title, theme.text_style()),
        Span::styled(LIST_SEPARATOR, theme.text_secondary_style()),
        Span::styled(card.rating.clone(), theme.rating_style()),
        Span::styled(LIST_SEPARATOR, theme.text_secondary_style()),
        Span::styled(card.language.clone(), theme.text_secondary_style()),
        Span::styled(LIST_SEPARATOR, theme.text_secondary_style()),
        Span::styled(card.year.clone(), theme.text_secondary_style()),
    ])
}

/// Renders the page bar with the current page highlighted
fn render_page_bar(frame: &mut Frame, area: Rect, view: &HomeView, theme: &Theme) {
    let mut spans = Vec::new();
    for slot in &view.pages {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        match slot {
            PageSlot::Page(page) if *page == view.current_page => {
                spans.push(Span::styled(format!("[{}]", page), theme.highlight_style()));
            }
            PageSlot::Page(page) => {
                spans.push(Span::styled(page.to_string(), theme.text_style()));
            }
            PageSlot::Ellipsis => {
                spans.push(Span::styled(slot.to_string(), theme.text_secondary_style()));
            }
        }
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color(false)));
    if view.total_pages > 0 {
        block = block.title(format!("Page {} of {}", view.current_page, view.total_pages));
    }
    let bar = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(bar, area);
}
