use crate::grid::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Reset,
    Quit,
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Pause => Some(Command::TogglePause),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Splits `area` into touch zones: the top 30% turns up, the bottom 30% turns
/// down, and the band between turns left or right by half.
pub fn command_for_click(column: u16, row: u16, area: Rect) -> Option<Command> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }

    let x = (column - area.x) as u32;
    let y = (row - area.y) as u32;
    let (width, height) = (area.width as u32, area.height as u32);

    let direction = if y * 10 < height * 3 {
        Direction::Up
    } else if y * 10 > height * 7 {
        Direction::Down
    } else if x * 2 < width {
        Direction::Left
    } else {
        Direction::Right
    };
    Some(Command::Turn(direction))
}

pub fn command_for_mouse(mouse: MouseEvent, area: Rect) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => command_for_click(mouse.column, mouse.row, area),
        _ => None,
    }
}
