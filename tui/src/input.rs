//! Single-line text input state: value plus cursor, edited by key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default, Clone)]
pub struct Input {
    value: String,
    /// Cursor position in characters, 0..=char count.
    cursor: usize,
}

impl Input {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    /// Apply a key event to the input. Returns `true` when the event edited
    /// or moved the cursor, `false` when it is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.value.insert(self.byte_index(self.cursor), c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let start = self.byte_index(self.cursor);
                    self.value.remove(start);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let start = self.byte_index(self.cursor);
                    self.value.remove(start);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut Input, code: KeyCode) {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(input: &mut Input, text: &str) {
        for c in text.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = Input::default();
        type_str(&mut input, "milk");
        assert_eq!(input.value(), "milk");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = Input::default();
        type_str(&mut input, "milk");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "mik");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn insert_mid_string_respects_multibyte_chars() {
        let mut input = Input::default();
        type_str(&mut input, "döner");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Right);
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(input.value(), "dxöner");
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut input = Input::default();
        let handled = input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!handled);
        assert!(input.is_empty());
    }

    #[test]
    fn set_places_cursor_at_end() {
        let mut input = Input::default();
        input.set("existing".to_string());
        assert_eq!(input.cursor(), 8);
        press(&mut input, KeyCode::Char('!'));
        assert_eq!(input.value(), "existing!");
    }
}
