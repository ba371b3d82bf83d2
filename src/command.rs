use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Direction),
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Turn(Direction::North)),
            (_, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Turn(Direction::South)),
            (_, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Turn(Direction::West)),
            (_, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Turn(Direction::East)),
            (_, KeyCode::Char('q') | KeyCode::Esc) => Some(Command::Quit),
            (_, KeyCode::Char('r')) => Some(Command::Restart),
            _ => None,
        }
    }
}
