use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::maze::Direction;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Move(Direction),
    Restart,
    Quit,
    ForceQuit, // Ctrl+C

    // TUI-local events (handled directly in TUI)
    ToggleHelp,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Translate a key press into a `TuiEvent`. Releases and repeats are ignored
/// so one physical press is one move.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Restart),
        (_, KeyCode::Char('?')) => Some(TuiEvent::ToggleHelp),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(c)) => Direction::from_key(c).map(TuiEvent::Move),
        (_, KeyCode::Up) => Some(TuiEvent::Move(Direction::Up)),
        (_, KeyCode::Down) => Some(TuiEvent::Move(Direction::Down)),
        (_, KeyCode::Left) => Some(TuiEvent::Move(Direction::Left)),
        (_, KeyCode::Right) => Some(TuiEvent::Move(Direction::Right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_and_arrows_move() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(TuiEvent::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(TuiEvent::Move(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(TuiEvent::Move(Direction::Down)));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(TuiEvent::Move(Direction::Right)));
        assert_eq!(map_key(press(KeyCode::Up)), Some(TuiEvent::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(TuiEvent::Move(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(TuiEvent::Restart));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Char('?'))), Some(TuiEvent::ToggleHelp));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_uppercase_and_unknown_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('W'))), None);
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
