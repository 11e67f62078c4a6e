//! Key mapping from terminal events to game intents and menu navigation.

use crate::types::{Direction, GameKind, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an intent for the active game.
///
/// Arrow keys and their WASD aliases mean different things per game -
/// a turn for Snake, a shift for Tetris, a cursor move for Memory, a
/// slide for Puzzle. Space doubles as flap and card flip. `r` restarts
/// everywhere. Keys without a meaning for the active game map to `None`.
pub fn handle_key_event(kind: GameKind, key: KeyEvent) -> Option<Intent> {
    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        return Some(Intent::Restart);
    }

    let dir = direction_of(key.code);
    match kind {
        GameKind::Snake => dir.map(Intent::Turn),
        GameKind::Tetris => match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::StepDown),
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Rotate),
            _ => None,
        },
        GameKind::Flappy => match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Intent::Flap)
            }
            _ => None,
        },
        GameKind::Memory => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::Flip),
            _ => dir.map(Intent::Cursor),
        },
        GameKind::Puzzle => dir.map(Intent::Slide),
    }
}

fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// A navigation action on the game menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNav {
    Up,
    Down,
    /// Enter the highlighted game
    Select,
    /// Jump straight to the Nth menu entry (digit keys, 0-based)
    Pick(usize),
}

/// Map keyboard input to menu navigation.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuNav> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(MenuNav::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(MenuNav::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuNav::Select),
        KeyCode::Char(c @ '1'..='9') => Some(MenuNav::Pick(c as usize - '1' as usize)),
        _ => None,
    }
}

/// Check if key should quit the arcade.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
