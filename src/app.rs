use crate::chronometer::Chronometer;
use crate::config::{ConfigError, Settings};
use crate::game::{GameStatus, SnakeGame};
use crate::high_score::HighScoreStore;
use crate::input::{command_for_key, command_for_mouse, Command};
use crate::ui::{board_footprint, centered, BoardView};
use crossterm::event::Event;
use log::info;
use rand::rngs::ThreadRng;
use rand::Rng;
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

pub struct App<R = ThreadRng> {
    game: SnakeGame<R>,
    chronometer: Chronometer,
    high_scores: HighScoreStore,
    show_timer: bool,
    saved_high_score: u32,
    screen: Rect,
    exit: bool,
}

impl App<ThreadRng> {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let high_scores = HighScoreStore::new(settings.high_score_file);
        let game = SnakeGame::new(settings.game, high_scores.load())?;
        let mut app = App::with_game(game, high_scores, settings.show_timer);
        app.chronometer = Chronometer::from_time_or_zero(&settings.timer_start);
        Ok(app)
    }
}

impl<R: Rng> App<R> {
    pub fn with_game(game: SnakeGame<R>, high_scores: HighScoreStore, show_timer: bool) -> Self {
        App {
            saved_high_score: game.max_score(),
            game,
            chronometer: Chronometer::new(0),
            high_scores,
            show_timer,
            screen: Rect::default(),
            exit: false,
        }
    }

    pub fn game(&self) -> &SnakeGame<R> {
        &self.game
    }

    pub fn chronometer(&self) -> &Chronometer {
        &self.chronometer
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn handle_event(&mut self, event: Event) {
        let command = match event {
            Event::Key(key) => command_for_key(key),
            Event::Mouse(mouse) => command_for_mouse(mouse, self.screen),
            _ => None,
        };
        if let Some(command) = command {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        let over = self.game.status().is_over();
        match command {
            Command::Quit => {
                info!("Quitting with score {}", self.game.score());
                self.exit = true;
            }
            Command::Turn(direction) if !over => {
                self.game.set_direction(direction);
            }
            Command::TogglePause if !over => {
                self.game.toggle_pause();
                self.chronometer.set_running(!self.game.is_paused());
            }
            Command::TogglePause | Command::Reset if over => self.reset(),
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.game.reset_game();
        self.chronometer.reset();
    }

    pub fn update(&mut self, dt: Duration) {
        self.game.advance(dt);
        self.chronometer.advance(dt);

        if self.game.status().is_over() {
            self.chronometer.set_running(false);
            if self.game.max_score() > self.saved_high_score {
                self.high_scores.save(self.game.max_score());
                self.saved_high_score = self.game.max_score();
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.screen = frame.area();

        let mut header = format!(
            "SNEK    Score: {}    High Score: {}",
            self.game.formatted_score(),
            self.game.formatted_max_score()
        );
        if self.show_timer {
            header.push_str(&format!("    Time: {}", self.chronometer));
        }

        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score line
                Constraint::Min(0),    // Board
            ])
            .split(self.screen);

        frame.render_widget(
            Paragraph::new(header)
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        let (width, height) = board_footprint(self.game.board());
        let board_area = centered(layout[1], width, height);
        let title = match self.game.status() {
            GameStatus::InProgress if self.game.is_paused() => "Paused (SPACE)",
            GameStatus::InProgress => "Playing",
            GameStatus::Won | GameStatus::Lost => "Game over",
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner_area = block.inner(board_area);

        frame.render_widget(block, board_area);
        frame.render_widget(BoardView::new(self.game.board()), inner_area);

        if self.game.status().is_over() {
            let banner = match self.game.status() {
                GameStatus::Won => "YOU WIN",
                _ => "GAME OVER",
            };
            frame.render_widget(
                Paragraph::new(format!(
                    "{}\nScore: {}\nSPACE to play again",
                    banner,
                    self.game.formatted_score()
                ))
                .alignment(Alignment::Center)
                .style(Style::default().bold()),
                inner_area,
            );
        }
    }
}
