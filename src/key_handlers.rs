use crate::app::{Action, PanelState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a terminal key event to a user intent.
///
/// Pure function so the bindings are testable as a table. Tab acts as the
/// chat toggle control from either state; the rest of the keys only mean
/// something while the panel is open.
pub fn action_for_key(key: KeyEvent, panel: PanelState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match panel {
        PanelState::Hidden => match key.code {
            KeyCode::Tab | KeyCode::Enter => Some(Action::TogglePanel),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        PanelState::Open => match key.code {
            KeyCode::Tab | KeyCode::Esc => Some(Action::TogglePanel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::PageUp => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::ScrollDown),
            KeyCode::Char(c) => Some(Action::Insert(c)),
            _ => None,
        },
    }
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
    fn tab_toggles_from_either_state() {
        assert_eq!(
            action_for_key(key(KeyCode::Tab), PanelState::Hidden),
            Some(Action::TogglePanel)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Tab), PanelState::Open),
            Some(Action::TogglePanel)
        );
    }

    #[test]
    fn enter_opens_when_hidden_and_submits_when_open() {
        assert_eq!(
            action_for_key(key(KeyCode::Enter), PanelState::Hidden),
            Some(Action::TogglePanel)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Enter), PanelState::Open),
            Some(Action::Submit)
        );
    }

    #[test]
    fn typing_only_counts_while_the_panel_is_open() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('h')), PanelState::Open),
            Some(Action::Insert('h'))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('h')), PanelState::Hidden), None);
    }

    #[test]
    fn q_quits_only_from_the_launcher() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('q')), PanelState::Hidden),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('q')), PanelState::Open),
            Some(Action::Insert('q'))
        );
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        assert_eq!(action_for_key(ctrl('c'), PanelState::Hidden), Some(Action::Quit));
        assert_eq!(action_for_key(ctrl('c'), PanelState::Open), Some(Action::Quit));
    }

    #[test]
    fn other_ctrl_chords_are_ignored() {
        assert_eq!(action_for_key(ctrl('x'), PanelState::Open), None);
    }

    #[test]
    fn scroll_and_edit_keys_map_while_open() {
        assert_eq!(
            action_for_key(key(KeyCode::PageUp), PanelState::Open),
            Some(Action::ScrollUp)
        );
        assert_eq!(
            action_for_key(key(KeyCode::PageDown), PanelState::Open),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Backspace), PanelState::Open),
            Some(Action::Backspace)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Esc), PanelState::Open),
            Some(Action::TogglePanel)
        );
    }
}
