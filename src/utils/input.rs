use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    Play,
    Pause,
    Stop,
    TogglePlayPause,

    Prev,
    Next,

    PlaylistUp,
    PlaylistDown,
    Confirm,
    PlaylistSelect(usize),

    MouseClick { col: u16, row: u16 },

    None,
}

pub fn map_key(ev: KeyEvent) -> Action {
    match ev.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::TogglePlayPause,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Stop,
        KeyCode::Left => Action::Prev,
        KeyCode::Right => Action::Next,
        KeyCode::Up => Action::PlaylistUp,
        KeyCode::Down => Action::PlaylistDown,
        KeyCode::Enter => Action::Confirm,
        _ => Action::None,
    }
}

pub fn map_mouse(ev: MouseEvent) -> Action {
    if let MouseEventKind::Down(MouseButton::Left) = ev.kind {
        return Action::MouseClick {
            col: ev.column,
            row: ev.row,
        };
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn transport_keys_map_to_their_actions() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Action::TogglePlayPause);
        assert_eq!(map_key(key(KeyCode::Char('s'))), Action::Stop);
        assert_eq!(map_key(key(KeyCode::Left)), Action::Prev);
        assert_eq!(map_key(key(KeyCode::Right)), Action::Next);
        assert_eq!(map_key(key(KeyCode::Enter)), Action::Confirm);
        assert_eq!(map_key(key(KeyCode::Char('x'))), Action::None);
    }
}
