use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let screen = app.screen_mut();
            if screen.cursor + 1 < screen.list.len() {
                screen.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let screen = app.screen_mut();
            screen.cursor = screen.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.screen_mut().cursor = 0;
        }
        KeyCode::Char('G') => {
            let screen = app.screen_mut();
            screen.cursor = screen.list.len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.select_item();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.remove_item();
        }
        KeyCode::Char('i') | KeyCode::Char('a') => {
            app.mode = Mode::Input;
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => {
            app.pop_screen();
        }
        _ => {}
    }
}

fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.add_item();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let screen = app.screen_mut();
            screen.input.clear();
            screen.input_cursor = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let screen = app.screen_mut();
            screen.input.insert(screen.input_cursor, c);
            screen.input_cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            let screen = app.screen_mut();
            if let Some(prev) = prev_grapheme_boundary(&screen.input, screen.input_cursor) {
                screen.input.replace_range(prev..screen.input_cursor, "");
                screen.input_cursor = prev;
            }
        }
        KeyCode::Delete => {
            let screen = app.screen_mut();
            if let Some(next) = next_grapheme_boundary(&screen.input, screen.input_cursor) {
                screen.input.replace_range(screen.input_cursor..next, "");
            }
        }
        KeyCode::Left => {
            let screen = app.screen_mut();
            if let Some(prev) = prev_grapheme_boundary(&screen.input, screen.input_cursor) {
                screen.input_cursor = prev;
            }
        }
        KeyCode::Right => {
            let screen = app.screen_mut();
            if let Some(next) = next_grapheme_boundary(&screen.input, screen.input_cursor) {
                screen.input_cursor = next;
            }
        }
        KeyCode::Home => {
            app.screen_mut().input_cursor = 0;
        }
        KeyCode::End => {
            let screen = app.screen_mut();
            screen.input_cursor = screen.input.len();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_items(dir: &TempDir, items: &[&str]) -> App {
        let mut app = App::new(dir.path().to_path_buf());
        for item in items {
            let screen = app.screen_mut();
            screen.input = item.to_string();
            screen.input_cursor = item.len();
            app.add_item();
        }
        app
    }

    #[test]
    fn typing_edits_the_input_line() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &[]);
        app.mode = Mode::Input;
        for c in "milk".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.screen().input, "milk");

        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.screen().input, "mil");
        handle_key(&mut app, key(KeyCode::Home));
        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(app.screen().input, "il");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &[]);
        app.mode = Mode::Input;
        let screen = app.screen_mut();
        screen.input = "cafe\u{0301}".to_string(); // é as e + combining accent
        screen.input_cursor = screen.input.len();
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.screen().input, "caf");
    }

    #[test]
    fn enter_in_input_mode_adds_item() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &[]);
        app.mode = Mode::Input;
        for c in "eggs".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen().list.items, vec!["eggs"]);
        assert_eq!(app.screen().input, "");
        // Still in input mode for the next item
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn enter_on_row_opens_nested_list() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["milk"]);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.stack.len(), 2);
        assert_eq!(app.screen().list.name, "milk");
        // Esc pops back to the parent
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.stack.len(), 1);
    }

    #[test]
    fn d_deletes_item_under_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["milk", "eggs"]);
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.screen().list.items, vec!["eggs"]);
    }

    #[test]
    fn cursor_movement_stays_in_bounds() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["a", "b", "c"]);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.screen().cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.screen().cursor, 2);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.screen().cursor, 2);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.screen().cursor, 0);
    }

    #[test]
    fn q_quits_from_any_screen() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_items(&dir, &["milk"]);
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
        assert_eq!(app.stack.len(), 2);
    }
}
