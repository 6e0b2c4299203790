// crates/tui/src/ui/mod.rs
//! UI rendering modules

pub mod detail;
pub mod home;

use crate::{
    state::{AppState, Focus, View},
    theme::Theme,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the main UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_search_box(frame, chunks[0], state, &theme);
    match state.view {
        View::Home => home::render(frame, chunks[1], state, &theme),
        View::Detail(_) => detail::render(frame, chunks[1], state, &theme),
    }
    render_status_bar(frame, chunks[2], state, &theme);
}

/// Renders the search input
fn render_search_box(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.view == View::Home && state.focus == Focus::Search;
    let query = state.search.query();

    let line = if query.is_empty() && !focused {
        Line::from(Span::styled(
            "Search through thousands of movies",
            theme.text_secondary_style(),
        ))
    } else {
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::styled("Search: ", theme.accent_style()),
            Span::styled(format!("{}{}", query, cursor), theme.text_style()),
        ])
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color(focused)))
            .title("Marquee"),
    );

    frame.render_widget(input, area);
}

/// Renders the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.view {
        View::Home => "Tab: Focus | ←/→: Page | ↑/↓: Select | Enter: Details | Esc: Clear | Ctrl-C: Quit",
        View::Detail(_) => "Esc: Back | q: Quit",
    };
    let status_text = match &state.status_message {
        Some(message) => message.clone(),
        None => {
            let mut parts = vec![active_query(state)];
            if state.page.total_pages() > 0 {
                parts.push(format!(
                    "Page {}/{}",
                    state.page.current_page(),
                    state.page.total_pages()
                ));
            }
            parts.push(hints.to_string());
            parts.push(format!("t: Theme ({})", theme.theme_type.name()));
            parts.join(" | ")
        }
    };
    let width = area.width.saturating_sub(2) as usize;

    let status = Paragraph::new(Line::from(Span::styled(
        truncate(&status_text, width),
        theme.text_secondary_style(),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color(false))),
    );

    frame.render_widget(status, area);
}

/// Query the shown results belong to, "Popular" for the discover listing
fn active_query(state: &AppState) -> String {
    let committed = state.search.committed().trim();
    if committed.is_empty() {
        "Popular".to_string()
    } else {
        format!("\"{}\"", committed)
    }
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with "…"
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}


#[cfg(test)]
mod tests {
    use super::test_support::{contains, draw};
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Inception", 20), "Inception");
        assert_eq!(truncate("Inception", 5), "Ince…");
        assert_eq!(truncate("Inception", 0), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each of these takes two columns
        assert_eq!(truncate("千と千尋の神隠し", 7), "千と千…");
    }

    #[test]
    fn test_placeholder_when_list_focused() {
        let mut state = AppState::new();
        state.focus = Focus::List;
        let rows = draw(&state, 100, 20);
        assert!(contains(&rows, "Search through thousands of movies"));
    }

    #[test]
    fn test_query_shown_while_typing() {
        let mut state = AppState::new();
        state.search.set_query("alien");
        let rows = draw(&state, 100, 20);
        assert!(contains(&rows, "Search: alien_"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut state = AppState::new();
        state.set_status("Theme: Light");
        let rows = draw(&state, 100, 20);
        assert!(contains(&rows, "Theme: Light"));
        assert!(!contains(&rows, "Ctrl-C: Quit"));
    }

    #[test]
    fn test_status_bar_shows_active_query_and_page() {
        let mut state = AppState::new();
        assert!(contains(&draw(&state, 160, 20), "Popular | Page 1/1"));

        let generation = state.search.set_query("heat");
        state.search.on_timer(generation);
        assert!(contains(&draw(&state, 160, 20), "\"heat\" | Page 1/1"));

        state.page.set_total(0);
        assert!(contains(&draw(&state, 160, 20), "\"heat\" | Tab: Focus"));
    }
}
