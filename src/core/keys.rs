use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical navigation keys, decoupled from raw terminal codes. Views match
/// on these; the vi aliases (`j`/`k`/`g`/`G`, `q`) are resolved here once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Activate,
    Back,
    NextRegion,
    Left,
    Right,
    /// Printable input, forwarded verbatim to exclusive-mode text capture.
    Char(char),
    /// Backspace; only meaningful to text capture.
    Erase,
    Help,
    Quit,
}

/// Map a raw key event to its logical meaning. Returns `None` for events the
/// dashboard ignores (key releases, unbound codes).
///
/// `exclusive_capture` is true while a text field owns input: character
/// aliases then stay plain characters instead of becoming navigation.
pub fn logical_key(key: &KeyEvent, exclusive_capture: bool) -> Option<NavKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(NavKey::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::PageUp => Some(NavKey::PageUp),
        KeyCode::PageDown => Some(NavKey::PageDown),
        KeyCode::Home => Some(NavKey::Home),
        KeyCode::End => Some(NavKey::End),
        KeyCode::Enter => Some(NavKey::Activate),
        KeyCode::Esc => Some(NavKey::Back),
        KeyCode::Tab => Some(NavKey::NextRegion),
        KeyCode::Backspace => Some(NavKey::Erase),
        KeyCode::F(1) => Some(NavKey::Help),
        KeyCode::Left => Some(NavKey::Left),
        KeyCode::Right => Some(NavKey::Right),
        KeyCode::Char(ch) if exclusive_capture => Some(NavKey::Char(ch)),
        KeyCode::Char('k') => Some(NavKey::Up),
        KeyCode::Char('j') => Some(NavKey::Down),
        KeyCode::Char('g') => Some(NavKey::Home),
        KeyCode::Char('G') => Some(NavKey::End),
        KeyCode::Char('q') => Some(NavKey::Back),
        KeyCode::Char(ch) => Some(NavKey::Char(ch)),
        _ => None,
    }
}
