use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashSet;

use super::KeyboardService;

/// What a terminal key event means to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A steering key (or any other character) changed state
    Key(char),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            KeyCode::Char(c) => KeyAction::Key(c.to_ascii_lowercase()),
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Key state built from terminal events.
///
/// Most terminals only report presses, so a press holds the key down until the end of the frame
/// it arrived in. When the terminal reports releases, a key stays down across frames until it is
/// let go; a press and release inside one frame still counts for that frame.
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<char>,
    pressed_this_frame: HashSet<char>,
    reports_releases: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key state for a terminal with release reporting enabled
    pub fn with_release_events() -> Self {
        Self {
            reports_releases: true,
            ..Self::default()
        }
    }

    pub fn record(&mut self, key: char, kind: KeyEventKind) {
        let key = key.to_ascii_lowercase();
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(key);
                self.pressed_this_frame.insert(key);
            }
            KeyEventKind::Release => {
                self.held.remove(&key);
            }
        }
    }

    /// Forget presses once a frame has consumed them
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
        if !self.reports_releases {
            self.held.clear();
        }
    }
}

impl KeyboardService for KeyboardState {
    fn is_key_down(&self, key: char) -> bool {
        let key = key.to_ascii_lowercase();
        self.held.contains(&key) || self.pressed_this_frame.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steering_keys_pass_through() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), KeyAction::Key('w'));

        let j = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(j), KeyAction::Key('j'));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(r), KeyAction::Restart);

        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_press_lasts_until_end_of_frame() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('a', KeyEventKind::Press);
        assert!(keyboard.is_key_down('a'));
        assert!(keyboard.is_key_down('A'));
        assert!(!keyboard.is_key_down('d'));

        keyboard.end_frame();
        assert!(!keyboard.is_key_down('a'));
    }

    #[test]
    fn test_release_within_frame_still_counts_press() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('w', KeyEventKind::Press);
        keyboard.record('w', KeyEventKind::Release);
        assert!(keyboard.is_key_down('w'));

        keyboard.end_frame();
        assert!(!keyboard.is_key_down('w'));
    }

    #[test]
    fn test_held_across_frames_with_release_events() {
        let mut keyboard = KeyboardState::with_release_events();
        keyboard.record('k', KeyEventKind::Press);
        keyboard.end_frame();
        keyboard.end_frame();
        assert!(keyboard.is_key_down('k'));

        keyboard.record('k', KeyEventKind::Release);
        assert!(!keyboard.is_key_down('k'));
    }
}
