use crate::food::{Decay, Food};
use crate::grid::{Direction, Pos, Size};
use crate::snake::Snake;
use log::debug;
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellTag {
    #[default]
    Empty,
    Food,
    SpecialFood,
    Head(Direction),
    Tail(Direction),
    Snake,
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellTag::Empty => f.write_str("empty"),
            CellTag::Food => f.write_str("food"),
            CellTag::SpecialFood => f.write_str("special-food"),
            CellTag::Head(dir) => write!(f, "head-{}", dir),
            CellTag::Tail(dir) => write!(f, "tail-{}", dir),
            CellTag::Snake => f.write_str("snake"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    tag: CellTag,
    food: Option<Food>,
}

impl Cell {
    pub fn tag(&self) -> CellTag {
        self.tag
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }
}

/// Fixed-size grid of cells. Each cell owns the food placed on it, so a food
/// item can only ever be removed once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: Size,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: Size) -> Self {
        Board {
            size,
            cells: vec![Cell::default(); size.cells()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size.width as usize + pos.col as usize
    }

    fn pos_at(&self, index: usize) -> Pos {
        let width = self.size.width as usize;
        Pos::new((index / width) as u16, (index % width) as u16)
    }

    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        let index = self.index(pos);
        &mut self.cells[index]
    }

    pub fn tag(&self, pos: Pos) -> CellTag {
        self.cell(pos).tag
    }

    pub fn food(&self, pos: Pos) -> Option<&Food> {
        self.cell(pos).food.as_ref()
    }

    pub(crate) fn food_mut(&mut self, pos: Pos) -> Option<&mut Food> {
        self.cell_mut(pos).food.as_mut()
    }

    pub fn has_food(&self, pos: Pos) -> bool {
        self.cell(pos).food.is_some()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (self.pos_at(index), cell))
    }

    pub fn foods(&self) -> impl Iterator<Item = &Food> + '_ {
        self.cells.iter().filter_map(|cell| cell.food.as_ref())
    }

    pub fn food_positions(&self) -> Vec<Pos> {
        self.foods().map(Food::pos).collect()
    }

    pub(crate) fn foods_mut(&mut self) -> impl Iterator<Item = &mut Food> + '_ {
        self.cells.iter_mut().filter_map(|cell| cell.food.as_mut())
    }

    pub fn empty_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.tag == CellTag::Empty)
            .count()
    }

    pub fn random_empty_cell(&self, rng: &mut impl Rng) -> Option<Pos> {
        if self.empty_cells() == 0 {
            return None;
        }
        loop {
            let pos = Pos::new(
                rng.gen_range(0..self.size.height),
                rng.gen_range(0..self.size.width),
            );
            if self.tag(pos) == CellTag::Empty {
                return Some(pos);
            }
        }
    }

    pub fn place_food(&mut self, food: Food) {
        let cell = self.cell_mut(food.pos());
        assert!(
            cell.tag == CellTag::Empty && cell.food.is_none(),
            "Attempted to place food on an occupied cell"
        );
        cell.tag = food.tag();
        cell.food = Some(food);
    }

    /// Takes the food off `pos` and returns its points. A cell that no longer
    /// holds food yields `None`, so a food item can't be scored twice.
    pub fn eat_food(&mut self, pos: Pos) -> Option<u32> {
        let cell = self.cell_mut(pos);
        let food = cell.food.take()?;
        cell.tag = CellTag::Empty;
        Some(food.consume())
    }

    /// Runs one decay tick for the food on `pos`. Expired food is removed
    /// from the board and scores nothing.
    pub fn decay_food(&mut self, pos: Pos) -> Option<Decay> {
        let cell = self.cell_mut(pos);
        let food = cell.food.as_mut()?;
        cell.tag = food.tag();

        let decay = food.decay_tick();
        if decay == Decay::Expired {
            debug!("Special food at {:?} expired", pos);
            cell.food = None;
            cell.tag = CellTag::Empty;
        }
        Some(decay)
    }

    pub fn set_food_timers(&mut self, active: bool) {
        for food in self.foods_mut() {
            food.set_active(active);
        }
    }

    pub fn render_snake(&mut self, snake: &Snake) {
        for cell in self.cells.iter_mut().filter(|cell| cell.food.is_none()) {
            cell.tag = CellTag::Empty;
        }

        let last = snake.len() - 1;
        let head = CellTag::Head(snake.head_direction());
        let tail = CellTag::Tail(snake.tail_direction());
        for (i, &pos) in snake.body().iter().enumerate() {
            let tag = match i {
                0 => head,
                i if i == last => tail,
                _ => CellTag::Snake,
            };
            self.cell_mut(pos).tag = tag;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
