use crate::domain::Filter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move the cursor up
    Up,
    /// Move the cursor down
    Down,
    /// Enter the selected directory
    Open,
    /// Go to the parent directory
    Parent,
    /// Go to the home directory
    Home,
    /// List the current directory again
    Refresh,
    /// Switch between the shortcuts panel and the listing
    ToggleFocus,
    /// Select a filter
    Filter(Filter),
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q, Esc or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Cursor
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::Up,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Up,
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::Down,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Down,

        // Directory changes
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Open,
        (KeyCode::Right, KeyModifiers::NONE) => KeyAction::Open,
        (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::Open,
        (KeyCode::Backspace, KeyModifiers::NONE) => KeyAction::Parent,
        (KeyCode::Left, KeyModifiers::NONE) => KeyAction::Parent,
        (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::Parent,
        (KeyCode::Char('~'), KeyModifiers::NONE | KeyModifiers::SHIFT) => KeyAction::Home,
        (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,

        (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::ToggleFocus,

        // Filters
        (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::Filter(Filter::All),
        (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::Filter(Filter::Directories),
        (KeyCode::Char('f'), KeyModifiers::NONE) => KeyAction::Filter(Filter::Files),
        (KeyCode::Char('.'), KeyModifiers::NONE) => KeyAction::Filter(Filter::Hidden),

        // Help: ?
        (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_quit() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_key_cursor() {
        assert_eq!(handle_key_event(key(KeyCode::Up)), KeyAction::Up);
        assert_eq!(handle_key_event(key(KeyCode::Char('k'))), KeyAction::Up);
        assert_eq!(handle_key_event(key(KeyCode::Down)), KeyAction::Down);
        assert_eq!(handle_key_event(key(KeyCode::Char('j'))), KeyAction::Down);
    }

    #[test]
    fn test_key_navigation() {
        assert_eq!(handle_key_event(key(KeyCode::Enter)), KeyAction::Open);
        assert_eq!(handle_key_event(key(KeyCode::Right)), KeyAction::Open);
        assert_eq!(handle_key_event(key(KeyCode::Backspace)), KeyAction::Parent);
        assert_eq!(handle_key_event(key(KeyCode::Char('h'))), KeyAction::Parent);
        assert_eq!(handle_key_event(key(KeyCode::Char('r'))), KeyAction::Refresh);
        assert_eq!(handle_key_event(key(KeyCode::Tab)), KeyAction::ToggleFocus);

        let tilde = KeyEvent::new(KeyCode::Char('~'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(tilde), KeyAction::Home);
    }

    #[test]
    fn test_key_filters() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('a'))),
            KeyAction::Filter(Filter::All)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('d'))),
            KeyAction::Filter(Filter::Directories)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('f'))),
            KeyAction::Filter(Filter::Files)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('.'))),
            KeyAction::Filter(Filter::Hidden)
        );
    }

    #[test]
    fn test_key_help() {
        assert_eq!(handle_key_event(key(KeyCode::Char('?'))), KeyAction::Help);
    }

    #[test]
    fn test_key_none() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_d), KeyAction::None);
    }
}
