//! Key and mouse mapping from terminal events to game input.

use crate::types::Command;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input the event loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A game command (only applied while running).
    Command(Command),
    /// Left click at a terminal cell; starts a game if it hits the board.
    Start { column: u16, row: u16 },
    /// Keyboard start (Enter).
    StartKey,
    Quit,
    Resize { width: u16, height: u16 },
}

/// Map keyboard input to game commands.
///
/// Only the four arrow keys are bound; everything else is ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map any terminal event.
///
/// Key presses and auto-repeats both count; releases are ignored.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if should_quit(key) {
                return Some(InputEvent::Quit);
            }
            if key.code == KeyCode::Enter {
                return Some(InputEvent::StartKey);
            }
            map_key(key).map(InputEvent::Command)
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::Start { column, row }),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}
