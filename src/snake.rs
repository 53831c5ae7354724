use crate::grid::{Direction, Pos, PosDelta, Size};
use std::collections::VecDeque;

pub const INITIAL_LENGTH: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Pos>,
    alive: bool,
    direction: Direction,
    head_direction: Direction,
}

impl Snake {
    pub fn new(size: Size) -> Self {
        // Column comes from the width, not the row count, so the opening
        // snake stays on non-square boards
        let row = size.height.saturating_sub(1) / 2;
        let col = (size.width.saturating_sub(1) / 3).max(INITIAL_LENGTH as u16 - 1);

        let body = (0..INITIAL_LENGTH as u16).map(|i| Pos::new(row, col - i));
        Self::from_body(body, Direction::Right)
    }

    pub fn from_body(body: impl IntoIterator<Item = Pos>, direction: Direction) -> Self {
        let body: VecDeque<Pos> = body.into_iter().collect();
        assert!(body.len() >= 2, "a snake needs at least a head and a tail");

        Snake {
            body,
            alive: true,
            direction,
            head_direction: direction,
        }
    }

    pub fn body(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn tail(&self) -> Pos {
        self.body[self.body.len() - 1]
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head_direction(&self) -> Direction {
        self.head_direction
    }

    pub fn tail_direction(&self) -> Direction {
        let tail = self.tail();
        let before = self.body[self.body.len() - 2];
        let wrapped = PosDelta::between(tail, before).crosses_edge();

        if tail.row == before.row {
            if (tail.col > before.col) != wrapped {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if (tail.row > before.row) != wrapped {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    pub fn next_square(&self, size: Size) -> Pos {
        self.head().wrapped_add(self.direction.into(), size)
    }

    /// Turns onto the other axis. At most one turn is accepted between two
    /// moves, and turning back onto the committed heading's axis is refused.
    /// Returns whether the turn was taken.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction != self.head_direction {
            return false;
        }
        if direction.is_vertical() == self.direction.is_vertical() {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn would_bite_itself(&self, target: Pos) -> bool {
        // The head is leaving and the tail is about to vacate its cell
        let len = self.body.len();
        self.body
            .iter()
            .skip(1)
            .take(len.saturating_sub(2))
            .any(|&segment| segment == target)
    }

    /// Moves into `target` without growing. Biting any segment other than
    /// the head or tail kills the snake and leaves the body in place.
    pub fn move_to(&mut self, target: Pos) {
        if self.would_bite_itself(target) {
            self.alive = false;
            return;
        }
        self.eat(target);
        self.body.pop_back();
    }

    pub fn eat(&mut self, target: Pos) {
        self.head_direction = self.direction;
        self.body.push_front(target);
    }
}
