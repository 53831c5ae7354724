use crate::board::{Board, Cell, CellTag};
use crate::grid::Direction;
use ratatui::prelude::*;

pub const CELL_WIDTH: u16 = 2;

const FADING_TENTHS: u32 = 10;

pub fn board_footprint(board: &Board) -> (u16, u16) {
    let size = board.size();
    (size.width * CELL_WIDTH + 2, size.height + 2)
}

pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn arrow(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

pub fn cell_look(cell: &Cell) -> (&'static str, Style) {
    match cell.tag() {
        CellTag::Empty => (" ", Style::default()),
        CellTag::Food => ("♥", Style::default().fg(Color::LightRed)),
        CellTag::SpecialFood => {
            let fading = cell
                .food()
                .and_then(|food| food.remaining_tenths())
                .is_some_and(|tenths| tenths <= FADING_TENTHS);
            let style = Style::default().fg(Color::Yellow);
            let style = if fading {
                style.add_modifier(Modifier::DIM)
            } else {
                style.add_modifier(Modifier::BOLD)
            };
            ("★", style)
        }
        CellTag::Head(dir) => (arrow(dir), Style::default().fg(Color::Yellow).bg(Color::Green)),
        CellTag::Tail(_) => ("·", Style::default().fg(Color::Black).bg(Color::Green)),
        CellTag::Snake => (" ", Style::default().bg(Color::Green)),
    }
}

pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardView { board }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (pos, cell) in self.board.cells() {
            let x = area.x + pos.col * CELL_WIDTH;
            let y = area.y + pos.row;
            // Clip what doesn't fit
            if x + CELL_WIDTH > area.right() || y >= area.bottom() {
                continue;
            }

            let (symbol, style) = cell_look(cell);
            buf[(x, y)].set_symbol(symbol).set_style(style);
            buf[(x + 1, y)].set_symbol(" ").set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use crate::grid::{Pos, Size};
    use crate::snake::Snake;
    use std::time::Duration;

    const SIZE: Size = Size {
        width: 10,
        height: 12,
    };

    fn board_with_snake() -> Board {
        let mut board = Board::new(SIZE);
        board.render_snake(&Snake::new(SIZE));
        board
    }

    #[test]
    fn test_footprint_and_centering() {
        let board = Board::new(SIZE);
        assert_eq!(board_footprint(&board), (22, 14));

        let area = Rect::new(0, 3, 80, 21);
        assert_eq!(centered(area, 22, 14), Rect::new(29, 6, 22, 14));

        // Too small: shrink to the available space
        let tiny = Rect::new(0, 0, 10, 5);
        assert_eq!(centered(tiny, 22, 14), tiny);
    }

    #[test]
    fn test_render_snake_cells() {
        let board = board_with_snake();
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);

        BoardView::new(&board).render(area, &mut buf);

        // Head at (5,3) pointing right, tail at (5,0)
        assert_eq!(buf[(6, 5)].symbol(), "▶");
        assert_eq!(buf[(6, 5)].bg, Color::Green);
        assert_eq!(buf[(0, 5)].symbol(), "·");
        assert_eq!(buf[(2, 5)].bg, Color::Green);
        assert_eq!(buf[(8, 5)].symbol(), " ");
        assert_eq!(buf[(8, 5)].bg, Color::Reset);
    }

    #[test]
    fn test_render_food() {
        let mut board = board_with_snake();
        let step = Duration::from_millis(100);
        board.place_food(Food::normal(Pos::new(0, 0), 5, step));
        board.place_food(Food::special(Pos::new(1, 1), 15, 5, step));
        board.place_food(Food::special(Pos::new(2, 2), 15, 50, step));

        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        BoardView::new(&board).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "♥");
        assert_eq!(buf[(2, 1)].symbol(), "★");
        assert!(buf[(2, 1)].modifier.contains(Modifier::DIM));
        assert!(buf[(4, 2)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_render_clips_to_area() {
        let board = board_with_snake();
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);

        // Must not index past the buffer
        BoardView::new(&board).render(area, &mut buf);
        assert_eq!(buf[(5, 2)].symbol(), " ");
    }
}
