//! Compose screen reducer.
//!
//! Edits the buffer in place. Anything that leaves the screen is returned
//! as a `ComposeRequest` for the top-level reducer to carry out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{ComposeState, CursorMove};

/// Transitions the compose screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeRequest {
    /// Tokenize the buffer and start revealing.
    Process,
    /// Return to the reader without re-processing (quits if nothing was
    /// processed yet).
    Resume,
    Quit,
}

/// Parsed key modifiers for pattern matching.
struct Modifiers {
    ctrl: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            alt: key.modifiers.contains(KeyModifiers::ALT),
        }
    }

    fn plain(&self) -> bool {
        !self.ctrl && !self.alt
    }
}

/// Inserts pasted text at the cursor as-is.
pub fn handle_paste(compose: &mut ComposeState, text: &str) {
    compose.buffer.insert_str(text);
}

pub fn handle_key(compose: &mut ComposeState, key: KeyEvent) -> Option<ComposeRequest> {
    let mods = Modifiers::from(&key);
    let buffer = &mut compose.buffer;

    match key.code {
        KeyCode::Char('s') if mods.ctrl => return Some(ComposeRequest::Process),
        KeyCode::Enter if mods.ctrl || mods.alt => return Some(ComposeRequest::Process),
        KeyCode::Char('q') if mods.ctrl => return Some(ComposeRequest::Quit),
        KeyCode::Esc => return Some(ComposeRequest::Resume),
        KeyCode::Char('l') if mods.ctrl => buffer.clear(),
        KeyCode::Enter => buffer.insert_newline(),
        KeyCode::Backspace => buffer.delete_prev_char(),
        KeyCode::Delete => buffer.delete_next_char(),
        KeyCode::Tab => buffer.insert_str("    "),
        KeyCode::Left => buffer.move_cursor(CursorMove::Back),
        KeyCode::Right => buffer.move_cursor(CursorMove::Forward),
        KeyCode::Up => buffer.move_cursor(CursorMove::Up),
        KeyCode::Down => buffer.move_cursor(CursorMove::Down),
        KeyCode::Home if mods.ctrl => buffer.move_cursor(CursorMove::Top),
        KeyCode::End if mods.ctrl => buffer.move_cursor(CursorMove::Bottom),
        KeyCode::Home => buffer.move_cursor(CursorMove::Head),
        KeyCode::End => buffer.move_cursor(CursorMove::End),
        KeyCode::Char(c) if mods.plain() => buffer.insert_char(c),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_and_newlines() {
        let mut compose = ComposeState::default();
        for c in "hi".chars() {
            assert_eq!(handle_key(&mut compose, key(KeyCode::Char(c))), None);
        }
        handle_key(&mut compose, key(KeyCode::Enter));
        handle_key(&mut compose, key(KeyCode::Char('x')));
        assert_eq!(compose.text(), "hi\nx");
    }

    #[test]
    fn test_process_shortcuts() {
        let mut compose = ComposeState::default();
        assert_eq!(
            handle_key(&mut compose, ctrl('s')),
            Some(ComposeRequest::Process)
        );
        assert_eq!(
            handle_key(
                &mut compose,
                KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)
            ),
            Some(ComposeRequest::Process)
        );
        assert_eq!(
            handle_key(&mut compose, key(KeyCode::Esc)),
            Some(ComposeRequest::Resume)
        );
        assert_eq!(
            handle_key(&mut compose, ctrl('q')),
            Some(ComposeRequest::Quit)
        );
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut compose = ComposeState::default();
        handle_key(&mut compose, ctrl('x'));
        assert_eq!(handle_key(&mut compose, ctrl('d')), None);
        assert!(compose.buffer.is_blank());
    }

    #[test]
    fn test_clear_and_paste() {
        let mut compose = ComposeState::default();
        handle_paste(&mut compose, "a\tb\r\nc");
        assert_eq!(compose.text(), "a\tb\nc");
        handle_key(&mut compose, ctrl('l'));
        assert_eq!(compose.text(), "");
    }
}
