//! Key mapping for the shell
//!
//! Pure translation from terminal key events to shell events; no state is
//! mutated here. The dropdown flag changes the meaning of digit keys: while
//! the dropdown is open they pick a row, otherwise they type into the draft.
//!
//! Bindings:
//! - Tab toggles the dropdown
//! - 1..9 select a dropdown row while the dropdown is open
//! - Esc closes an open dropdown
//! - Enter commits the draft (same operation as the send action)
//! - printable keys and Backspace edit the draft
//! - Ctrl+C / Ctrl+Q quit the shell

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::state::ShellEvent;

/// Maps one key event to a shell event, if it is bound
pub fn map_key(key: KeyEvent, dropdown_open: bool) -> Option<ShellEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(ShellEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => Some(ShellEvent::ToggleDropdown),
        KeyCode::Esc if dropdown_open => Some(ShellEvent::CloseDropdown),
        KeyCode::Esc => None,
        KeyCode::Enter => Some(ShellEvent::Submit),
        KeyCode::Backspace => Some(ShellEvent::DraftBackspace),
        KeyCode::Char(ch) => map_char(ch, dropdown_open),
        _ => None,
    }
}

fn map_char(ch: char, dropdown_open: bool) -> Option<ShellEvent> {
    if dropdown_open {
        if let Some(digit) = ch.to_digit(10) {
            // Rows are numbered from 1 in the dropdown; 0 is unbound.
            return match digit {
                0 => None,
                row => Some(ShellEvent::SelectEntry(row as usize - 1)),
            };
        }
    }
    Some(ShellEvent::DraftInsert(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_submits_the_draft() {
        assert_eq!(map_key(press(KeyCode::Enter), false), Some(ShellEvent::Submit));
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(ShellEvent::Submit));
    }

    #[test]
    fn tab_toggles_the_dropdown() {
        assert_eq!(
            map_key(press(KeyCode::Tab), false),
            Some(ShellEvent::ToggleDropdown)
        );
    }

    #[test]
    fn digits_select_rows_only_while_the_dropdown_is_open() {
        assert_eq!(
            map_key(press(KeyCode::Char('1')), true),
            Some(ShellEvent::SelectEntry(0))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('3')), true),
            Some(ShellEvent::SelectEntry(2))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('1')), false),
            Some(ShellEvent::DraftInsert('1'))
        );
    }

    #[test]
    fn zero_is_unbound_in_the_dropdown() {
        assert_eq!(map_key(press(KeyCode::Char('0')), true), None);
    }

    #[test]
    fn letters_edit_the_draft_even_with_the_dropdown_open() {
        assert_eq!(
            map_key(press(KeyCode::Char('h')), true),
            Some(ShellEvent::DraftInsert('h'))
        );
    }

    #[test]
    fn backspace_edits_the_draft() {
        assert_eq!(
            map_key(press(KeyCode::Backspace), false),
            Some(ShellEvent::DraftBackspace)
        );
    }

    #[test]
    fn esc_closes_an_open_dropdown_and_is_otherwise_unbound() {
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(ShellEvent::CloseDropdown));
        assert_eq!(map_key(press(KeyCode::Esc), false), None);
    }

    #[test]
    fn control_shortcuts_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, false), Some(ShellEvent::Quit));
        assert_eq!(map_key(ctrl_q, true), Some(ShellEvent::Quit));
    }

    #[test]
    fn other_control_chords_are_unbound() {
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_x, false), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_key(release, false), None);
    }
}
