// crates/tui/src/events.rs
//! Maps terminal input to application messages

use crate::state::{AppState, Focus, Msg, View};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates a terminal event, `None` for events with no meaning here
pub fn to_msg(state: &AppState, event: CrosstermEvent) -> Option<Msg> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => key_to_msg(state, key),
        _ => None,
    }
}

/// Translates a key press given the current view and focus
pub fn key_to_msg(state: &AppState, key: KeyEvent) -> Option<Msg> {
    // Global keys
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::Quit);
    }

    match state.view {
        View::Home => home_key(state.focus, key),
        View::Detail(_) => detail_key(key),
    }
}

fn home_key(focus: Focus, key: KeyEvent) -> Option<Msg> {
    let typing = focus == Focus::Search && !key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => Some(Msg::ToggleFocus),
        KeyCode::Esc => Some(Msg::ClearQuery),
        KeyCode::Left => Some(Msg::PreviousPage),
        KeyCode::Right => Some(Msg::NextPage),
        KeyCode::Up => Some(Msg::SelectPrevious),
        KeyCode::Down => Some(Msg::SelectNext),
        KeyCode::Enter => Some(Msg::OpenSelected),
        KeyCode::Backspace if focus == Focus::Search => Some(Msg::Backspace),
        KeyCode::Char(c) if typing => Some(Msg::Input(c)),
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Char('t') => Some(Msg::CycleTheme),
        KeyCode::Char('[') => Some(Msg::PreviousPage),
        KeyCode::Char(']') => Some(Msg::NextPage),
        KeyCode::Char('k') => Some(Msg::SelectPrevious),
        KeyCode::Char('j') => Some(Msg::SelectNext),
        _ => None,
    }
}

fn detail_key(key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Some(Msg::Back),
        KeyCode::Char('q') => Some(Msg::Quit),
        _ => None,
    }
}
