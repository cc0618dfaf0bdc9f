use std::time::Duration;

use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    TogglePause,
    Finish,
    TurnBack,
    Start,
    None,
    Unknown,
}

impl KeyCommand {
    pub fn read(timeout: &Duration) -> Result<Self> {
        if poll(*timeout)? {
            return Ok(read()?.into());
        }

        Ok(Self::None)
    }
}

impl From<Event> for KeyCommand {
    fn from(value: Event) -> Self {
        match value {
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                ..
            }) => match c {
                'q' => Self::Quit,
                'p' | ' ' => Self::TogglePause,
                'f' => Self::Finish,
                't' => Self::TurnBack,
                's' => Self::Start,
                _ => Self::Unknown,
            },
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                ..
            }) => Self::Quit,
            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), modifiers))
    }

    #[test]
    fn maps_keys() {
        assert_eq!(KeyCommand::from(key('q', KeyModifiers::NONE)), KeyCommand::Quit);
        assert_eq!(KeyCommand::from(key('p', KeyModifiers::NONE)), KeyCommand::TogglePause);
        assert_eq!(KeyCommand::from(key(' ', KeyModifiers::NONE)), KeyCommand::TogglePause);
        assert_eq!(KeyCommand::from(key('f', KeyModifiers::NONE)), KeyCommand::Finish);
        assert_eq!(KeyCommand::from(key('t', KeyModifiers::NONE)), KeyCommand::TurnBack);
        assert_eq!(KeyCommand::from(key('s', KeyModifiers::NONE)), KeyCommand::Start);
        assert_eq!(KeyCommand::from(key('x', KeyModifiers::NONE)), KeyCommand::Unknown);
        assert_eq!(KeyCommand::from(key('c', KeyModifiers::CONTROL)), KeyCommand::Quit);
        assert_eq!(KeyCommand::from(Event::FocusGained), KeyCommand::None);
    }
}
