//! Snake on a wrap-around board: the game engine plus a ratatui front end.
//!
//! The engine ([`game::SnakeGame`]) is driven purely by game time passed to
//! [`game::SnakeGame::advance`], so it runs the same under a terminal loop or a test.

pub mod app;
pub mod board;
pub mod chronometer;
pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod high_score;
pub mod input;
pub mod snake;
pub mod ui;

pub use board::{Board, CellTag};
pub use config::{GameConfig, Settings};
pub use food::{Food, FoodKind};
pub use game::{format_score, GameStatus, SnakeGame, StepResult};
pub use grid::{Direction, Pos, Size};
pub use snake::Snake;
