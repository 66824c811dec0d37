use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use geez_core::{InputMode, BACKSPACE};

use super::app::Editor;

/// Handle input and return true if the editor should quit
pub fn handle_input(editor: &mut Editor, key: KeyEvent, now: Instant) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Hotkeys never reach the session
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => return true,
        KeyCode::Char(' ') if ctrl => {
            editor.toggle_active();
            return false;
        }
        KeyCode::Char('t') if alt => {
            editor.set_mode(InputMode::Tigrinya);
            return false;
        }
        KeyCode::Char('a') if alt => {
            editor.set_mode(InputMode::Amharic);
            return false;
        }
        KeyCode::Char('l') if alt => {
            editor.set_mode(InputMode::Latin);
            return false;
        }
        KeyCode::Esc => {
            editor.cancel();
            return false;
        }
        KeyCode::Enter => {
            editor.submit();
            return false;
        }
        _ => {}
    }

    if ctrl || alt {
        return false;
    }
    if let Some(name) = key_name(&key) {
        editor.key(&name, now);
    }
    false
}

/// Key name as the session sees it
fn key_name(key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => Some(ch.to_string()),
        KeyCode::Backspace => Some(BACKSPACE.to_string()),
        KeyCode::Tab => Some("Tab".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geez_core::{MappingTable, Session, TransliterationEngine};

    fn editor() -> Editor {
        let engine = TransliterationEngine::with_defaults(MappingTable::builtin());
        Editor::new(Session::new(engine, InputMode::Tigrinya))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut editor = editor();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_input(&mut editor, key, Instant::now()));
    }

    #[test]
    fn test_letters_go_to_session() {
        let mut editor = editor();
        assert!(!handle_input(&mut editor, press(KeyCode::Char('s')), Instant::now()));
        assert_eq!(editor.session.preedit(), "s");
    }

    #[test]
    fn test_alt_switches_mode() {
        let mut editor = editor();
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::ALT);
        handle_input(&mut editor, key, Instant::now());
        assert_eq!(editor.session.mode(), InputMode::Latin);
        assert_eq!(editor.session.preedit(), "");
    }

    #[test]
    fn test_escape_cancels_and_enter_submits() {
        let mut editor = editor();
        let now = Instant::now();
        handle_input(&mut editor, press(KeyCode::Char('s')), now);
        handle_input(&mut editor, press(KeyCode::Esc), now);
        assert_eq!(editor.session.preedit(), "");

        handle_input(&mut editor, press(KeyCode::Char('l')), now);
        handle_input(&mut editor, press(KeyCode::Enter), now);
        assert_eq!(editor.submitted, vec!["ለ".to_string()]);
    }

    #[test]
    fn test_backspace_edits_line() {
        let mut editor = editor();
        let now = Instant::now();
        handle_input(&mut editor, press(KeyCode::Char('1')), now);
        handle_input(&mut editor, press(KeyCode::Char('2')), now);
        handle_input(&mut editor, press(KeyCode::Backspace), now);
        assert_eq!(editor.line.text(), "1");
    }
}
