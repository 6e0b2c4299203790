// crates/tui/src/ui/detail.rs
//! Detail view rendering

use crate::{
    state::AppState,
    theme::Theme,
    view::{detail_body, DetailBody, DetailView},
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the detail view
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_color(true)))
        .title("Movie Details (Esc: Back)");

    let lines = match detail_body(state) {
        Some(DetailBody::Ready(view)) => detail_lines(&view, theme),
        Some(DetailBody::Loading) | None => vec![Line::from(Span::styled(
            "Loading movie details…",
            theme.text_secondary_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn detail_lines(view: &DetailView, theme: &Theme) -> Vec<Line<'static>> {
    let field = |label: &str, value: &str, style: Style| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), theme.accent_style()),
            Span::styled(value.to_string(), style),
        ])
    };
    let text = theme.text_style();
    let trailer_style = if view.has_trailer {
        theme.accent_style()
    } else {
        theme.text_secondary_style()
    };

    vec![
        Line::from(vec![
            Span::styled(view.title.clone(), theme.highlight_style()),
            Span::styled(format!(" ({})", view.year), theme.text_secondary_style()),
        ]),
        Line::from(Span::styled(
            view.tagline.clone(),
            theme.text_secondary_style().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        field("Rating", &view.rating, theme.rating_style()),
        field("Released", &view.release_date, text),
        field("Status", &view.status, text),
        field("Runtime", &view.runtime, text),
        field("Language", &view.language, text),
        field("Genres", &view.genres, text),
        field("Countries", &view.countries, text),
        field("Languages", &view.languages, text),
        field("Budget", &view.budget, text),
        field("Revenue", &view.revenue, text),
        field("Companies", &view.companies, text),
        field("Poster", &view.poster, text),
        field("Trailer", &view.trailer, trailer_style),
        Line::default(),
        Line::from(Span::styled("Overview", theme.accent_style())),
        Line::from(Span::styled(view.overview.clone(), text)),
    ]
}
