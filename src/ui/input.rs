use crate::ui::app::App;
use crate::ui::repos::{Focus, InputEdit, RepoIntent, RepoScreenState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means for the app.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Key not bound in the current focus.
    None,
    Quit,
    Dispatch(RepoIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match map_key(app.screen(), key) {
        KeyAction::None => {}
        KeyAction::Quit => app.request_quit(),
        KeyAction::Dispatch(intent) => app.dispatch(intent),
    }
}

pub fn map_key(screen: &RepoScreenState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        return KeyAction::Quit;
    }
    if is_ctrl_char(key, 'r') {
        return KeyAction::Dispatch(RepoIntent::Refresh);
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        return KeyAction::Dispatch(RepoIntent::FocusNext);
    }

    let intent = match screen.focus {
        Focus::Input => map_input_key(key),
        Focus::List => map_list_key(screen, key),
    };
    intent.map_or(KeyAction::None, KeyAction::Dispatch)
}

fn map_input_key(key: KeyEvent) -> Option<RepoIntent> {
    if is_ctrl_char(key, 'u') {
        return Some(RepoIntent::Edit(InputEdit::Clear));
    }
    match key.code {
        KeyCode::Enter => Some(RepoIntent::Confirm),
        KeyCode::Backspace => Some(RepoIntent::Edit(InputEdit::Backspace)),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(RepoIntent::Edit(InputEdit::Insert(ch)))
        }
        _ => None,
    }
}

fn map_list_key(screen: &RepoScreenState, key: KeyEvent) -> Option<RepoIntent> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(RepoIntent::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(RepoIntent::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => Some(RepoIntent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(RepoIntent::SelectLast),
        KeyCode::PageUp => Some(RepoIntent::PageUp),
        KeyCode::PageDown => Some(RepoIntent::PageDown),
        KeyCode::Enter | KeyCode::Char('o') => screen
            .view
            .selected()
            .map(|index| RepoIntent::Open { index }),
        KeyCode::Char('s') => screen
            .view
            .selected()
            .map(|index| RepoIntent::Share { index }),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
