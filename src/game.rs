use crate::board::Board;
use crate::clock::Interval;
use crate::config::{ConfigError, GameConfig, SpawnTimerPolicy};
use crate::food::{Food, FoodKind};
use crate::grid::{Direction, Pos};
use crate::snake::Snake;
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::Won => "WIN",
            GameStatus::Lost => "LOSE",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved,     // Plain move into an empty cell
    Fed(u32),  // Ate food worth this many points
    Won,       // Snake fills the board
    Lost,      // Bit itself
}

pub fn format_score(score: u32) -> String {
    format!("{:03}", score)
}

#[derive(Debug)]
pub struct SnakeGame<R = ThreadRng> {
    config: GameConfig,
    rng: R,
    board: Board,
    snake: Snake,
    score: u32,
    max_score: u32,
    main_loop: Interval,
}

impl SnakeGame<ThreadRng> {
    pub fn new(config: GameConfig, max_score: u32) -> Result<Self, ConfigError> {
        Self::with_rng(config, max_score, rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn with_rng(config: GameConfig, max_score: u32, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let snake = Snake::new(config.size());
        Self::with_snake(config, max_score, rng, snake)
    }

    pub fn with_snake(
        config: GameConfig,
        max_score: u32,
        rng: R,
        snake: Snake,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.size();
        if let Some(pos) = snake
            .body()
            .iter()
            .find(|pos| pos.row >= size.height || pos.col >= size.width)
        {
            return Err(ConfigError::Invalid(format!(
                "snake segment {:?} is off the {}x{} board",
                pos, size.width, size.height
            )));
        }

        let board = Board::new(config.size());
        let main_loop = Interval::new(config.tick_interval(snake.len()));
        let mut game = SnakeGame {
            config,
            rng,
            board,
            snake,
            score: 0,
            max_score,
            main_loop,
        };
        game.set_up_board();
        info!(
            "New {}x{} game, high score {}",
            game.config.width, game.config.height, game.max_score
        );
        Ok(game)
    }

    fn set_up_board(&mut self) {
        self.board.clear();
        self.board.render_snake(&self.snake);
        self.spawn_food(FoodKind::Normal);
        if !self.config.start_paused {
            self.set_running(true);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn formatted_score(&self) -> String {
        format_score(self.score)
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn formatted_max_score(&self) -> String {
        format_score(self.max_score)
    }

    pub fn is_paused(&self) -> bool {
        !self.main_loop.is_running()
    }

    pub fn tick_interval(&self) -> Duration {
        self.main_loop.period()
    }

    pub fn status(&self) -> GameStatus {
        if self.snake.len() == self.board.size().cells() {
            GameStatus::Won
        } else if !self.snake.is_alive() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_paused() || self.status().is_over() {
            return false;
        }
        self.snake.set_direction(direction)
    }

    pub fn set_direction_named(&mut self, name: &str) -> bool {
        name.parse().map_or(false, |direction| self.set_direction(direction))
    }

    pub fn toggle_pause(&mut self) {
        if self.status().is_over() {
            return;
        }
        let running = self.is_paused();
        self.set_running(running);
        debug!("Game {}", if running { "resumed" } else { "paused" });
    }

    fn set_running(&mut self, running: bool) {
        if running {
            self.main_loop
                .restart(self.config.tick_interval(self.snake.len()));
        } else {
            self.main_loop.stop();
        }
        self.board.set_food_timers(running);
    }

    pub fn reset_game(&mut self) {
        self.score = 0;
        self.snake = Snake::new(self.config.size());
        self.main_loop.stop();
        self.set_up_board();
        info!("Game reset, high score {}", self.max_score);
    }

    pub fn tick(&mut self) -> StepResult {
        match self.status() {
            GameStatus::Won => return StepResult::Won,
            GameStatus::Lost => return StepResult::Lost,
            GameStatus::InProgress => {}
        }

        let next = self.snake.next_square(self.board.size());
        let result = if self.board.has_food(next) {
            self.feed_snake(next)
        } else {
            self.snake.move_to(next);
            self.board.render_snake(&self.snake);
            StepResult::Moved
        };

        match self.status() {
            GameStatus::InProgress => result,
            GameStatus::Won => {
                self.finish_game();
                StepResult::Won
            }
            GameStatus::Lost => {
                self.finish_game();
                StepResult::Lost
            }
        }
    }

    fn feed_snake(&mut self, pos: Pos) -> StepResult {
        let kind = self.board.food(pos).map(Food::kind);
        let points = self.board.eat_food(pos).unwrap_or(0);
        self.score += points;
        self.snake.eat(pos);
        self.board.render_snake(&self.snake);
        debug!(
            "Ate {:?} food at {:?} for {} points, length {}",
            kind,
            pos,
            points,
            self.snake.len()
        );

        if kind != Some(FoodKind::Special) {
            self.spawn_food(FoodKind::Normal);
        }
        if self.special_food_due() {
            self.spawn_food(FoodKind::Special);
        }

        // Longer snake, faster loop
        if self.main_loop.is_running() {
            self.main_loop
                .restart(self.config.tick_interval(self.snake.len()));
        }
        StepResult::Fed(points)
    }

    fn special_food_due(&self) -> bool {
        let len = self.snake.len();
        len % self.config.special_food_every == 0 && len + 2 <= self.board.size().cells()
    }

    pub fn spawn_food(&mut self, kind: FoodKind) -> Option<Pos> {
        let Some(pos) = self.board.random_empty_cell(&mut self.rng) else {
            debug!("No empty cell left for {:?} food", kind);
            return None;
        };

        let step = self.config.decay_step();
        let mut food = match kind {
            FoodKind::Normal => Food::normal(pos, self.config.food_points, step),
            FoodKind::Special => {
                let spread = match self.config.special_spread_tenths {
                    0 => 0,
                    n => self.rng.gen_range(0..n),
                };
                let lifetime = self.config.special_min_tenths + spread;
                Food::special(pos, self.config.special_food_points, lifetime, step)
            }
        };

        let active = match self.config.spawn_timer_policy {
            SpawnTimerPolicy::FollowGame => !self.is_paused(),
            SpawnTimerPolicy::HoldUntilResume => false,
        };
        food.set_active(active);
        self.board.place_food(food);
        debug!("Spawned {:?} food at {:?}", kind, pos);
        Some(pos)
    }

    fn finish_game(&mut self) {
        self.main_loop.stop();
        self.board.set_food_timers(false);
        if self.score > self.max_score {
            info!("New high score {} (was {})", self.score, self.max_score);
            self.max_score = self.score;
        }
        info!(
            "Game over: {} with score {}, length {}",
            self.status(),
            self.score,
            self.snake.len()
        );
    }

    /// Lets `dt` of game time pass, firing food countdowns and main loop
    /// steps in the order they fall due. Callbacks due at the same instant
    /// run food first. Returns the main loop steps that ran.
    pub fn advance(&mut self, dt: Duration) -> Vec<StepResult> {
        let mut steps = Vec::new();
        let mut left = dt;

        while let Some(wait) = self.next_deadline() {
            if wait > left {
                self.elapse(left);
                break;
            }
            self.elapse(wait);
            left -= wait;
            self.fire_due(&mut steps);
        }
        steps
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.board
            .foods()
            .filter_map(|food| food.timer().until_next())
            .chain(self.main_loop.until_next())
            .min()
    }

    fn elapse(&mut self, dt: Duration) {
        self.main_loop.elapse(dt);
        for food in self.board.foods_mut() {
            food.timer_mut().elapse(dt);
        }
    }

    fn fire_due(&mut self, steps: &mut Vec<StepResult>) {
        let due: Vec<Pos> = self
            .board
            .foods()
            .filter(|food| food.timer().is_due())
            .map(Food::pos)
            .collect();
        for pos in due {
            if let Some(food) = self.board.food_mut(pos) {
                food.timer_mut().rearm();
            }
            self.board.decay_food(pos);
        }

        if self.main_loop.is_due() {
            self.main_loop.rearm();
            steps.push(self.tick());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellTag;
    use crate::grid::Size;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const STEP: Duration = Duration::from_millis(100);

    fn seeded(config: GameConfig) -> SnakeGame<StdRng> {
        SnakeGame::with_rng(config, 0, StdRng::seed_from_u64(42)).unwrap()
    }

    fn seeded_with(config: GameConfig, snake: Snake) -> SnakeGame<StdRng> {
        SnakeGame::with_snake(config, 0, StdRng::seed_from_u64(42), snake).unwrap()
    }

    fn clear_food(game: &mut SnakeGame<StdRng>) {
        for pos in game.board.food_positions() {
            game.board.eat_food(pos);
        }
        game.board.render_snake(&game.snake);
    }

    fn put_food(game: &mut SnakeGame<StdRng>, mut food: Food) {
        food.set_active(!game.is_paused());
        game.board.place_food(food);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "000");
        assert_eq!(format_score(5), "005");
        assert_eq!(format_score(15), "015");
        assert_eq!(format_score(42), "042");
        assert_eq!(format_score(100), "100");
        assert_eq!(format_score(1234), "1234");
    }

    #[test]
    fn test_new_game() {
        let game = seeded(GameConfig::default());

        assert!(game.is_paused());
        assert_eq!(game.score(), 0);
        assert_eq!(game.formatted_score(), "000");
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.status().as_str(), "");
        assert_eq!(game.board().foods().count(), 1);

        let food = game.board().foods().next().unwrap();
        assert_eq!(food.kind(), FoodKind::Normal);
        assert!(!food.is_active());
        assert!(!game.snake().body().contains(&food.pos()));
    }

    #[test]
    fn test_start_unpaused() {
        let game = seeded(GameConfig {
            start_paused: false,
            ..GameConfig::default()
        });
        assert!(!game.is_paused());
        assert_eq!(game.tick_interval(), Duration::from_millis(580));
        assert!(game.board().foods().all(Food::is_active));
    }

    #[test]
    fn test_direction_ignored_while_paused() {
        let mut game = seeded(GameConfig::default());
        assert!(!game.set_direction(Direction::Up));
        assert_eq!(game.snake().direction(), Direction::Right);

        game.toggle_pause();
        assert!(!game.set_direction(Direction::Left));
        assert!(game.set_direction(Direction::Up));
        assert!(!game.set_direction(Direction::Down));
        assert_eq!(game.snake().direction(), Direction::Up);
    }

    #[test]
    fn test_direction_by_name() {
        let mut game = seeded(GameConfig::default());
        game.toggle_pause();

        assert!(!game.set_direction_named("sideways"));
        assert!(!game.set_direction_named("LEFT"));
        assert!(game.set_direction_named("Down"));
        assert_eq!(game.snake().direction(), Direction::Down);
    }

    #[test]
    fn test_move_keeps_length() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);

        for _ in 0..25 {
            assert_eq!(game.tick(), StepResult::Moved);
            assert_eq!(game.snake().len(), 4);
        }
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().tag(game.snake().head()), CellTag::Head(Direction::Right));
    }

    #[test]
    fn test_feeding_grows_and_scores() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        let next = game.snake().next_square(game.board().size());
        put_food(&mut game, Food::normal(next, 5, STEP));

        assert_eq!(game.tick(), StepResult::Fed(5));
        assert_eq!(game.score(), 5);
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.snake().head(), next);

        // A fresh normal food replaces the eaten one
        let foods: Vec<&Food> = game.board().foods().collect();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].kind(), FoodKind::Normal);
        assert_ne!(foods[0].pos(), next);
    }

    #[test]
    fn test_special_food_spawns_every_eighth_segment() {
        let snake = Snake::from_body((0..7).map(|i| Pos::new(5, 8 - i)), Direction::Right);
        let mut game = seeded_with(GameConfig::default(), snake);
        clear_food(&mut game);
        put_food(&mut game, Food::normal(Pos::new(5, 9), 5, STEP));

        assert_eq!(game.tick(), StepResult::Fed(5));
        assert_eq!(game.snake().len(), 8);

        let normal = game.board().foods().filter(|f| !f.is_special()).count();
        let special: Vec<&Food> = game.board().foods().filter(|f| f.is_special()).collect();
        assert_eq!(normal, 1);
        assert_eq!(special.len(), 1);
        assert_eq!(special[0].points(), 15);
        let tenths = special[0].remaining_tenths().unwrap();
        assert!((30..60).contains(&tenths), "lifetime {} out of range", tenths);
    }

    #[test]
    fn test_eating_special_food_spawns_nothing() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        let next = game.snake().next_square(game.board().size());
        put_food(&mut game, Food::special(next, 15, 40, STEP));

        assert_eq!(game.tick(), StepResult::Fed(15));
        assert_eq!(game.score(), 15);
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.board().foods().count(), 0);
    }

    #[test]
    fn test_self_bite_loses() {
        // Heading up from (5,5) runs into (4,5), an interior segment
        let snake = Snake::from_body(
            [
                Pos::new(5, 5),
                Pos::new(5, 4),
                Pos::new(4, 4),
                Pos::new(4, 5),
                Pos::new(4, 6),
            ],
            Direction::Up,
        );
        let mut game = SnakeGame::with_snake(
            GameConfig::default(),
            10,
            StdRng::seed_from_u64(1),
            snake,
        )
        .unwrap();
        clear_food(&mut game);
        game.toggle_pause();
        game.score = 20;

        assert_eq!(game.tick(), StepResult::Lost);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.status().as_str(), "LOSE");
        assert!(game.is_paused());
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.max_score(), 20);

        // Terminal: nothing moves any more
        game.toggle_pause();
        assert!(game.is_paused());
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.tick(), StepResult::Lost);
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let snake = Snake::from_body(
            [
                Pos::new(5, 5),
                Pos::new(5, 4),
                Pos::new(4, 4),
                Pos::new(4, 5),
                Pos::new(4, 6),
            ],
            Direction::Up,
        );
        let mut game =
            SnakeGame::with_snake(GameConfig::default(), 90, StdRng::seed_from_u64(1), snake)
                .unwrap();
        clear_food(&mut game);
        game.score = 20;

        assert_eq!(game.tick(), StepResult::Lost);
        assert_eq!(game.max_score(), 90);
    }

    #[test]
    fn test_full_board_is_a_win() {
        let config = GameConfig {
            width: 4,
            height: 1,
            ..GameConfig::default()
        };
        let snake = Snake::from_body(
            [Pos::new(0, 3), Pos::new(0, 2), Pos::new(0, 1), Pos::new(0, 0)],
            Direction::Right,
        );
        let game = seeded_with(config, snake);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.status().as_str(), "WIN");
        assert_eq!(game.board().foods().count(), 0);
    }

    #[test]
    fn test_eating_last_cell_wins() {
        let config = GameConfig {
            width: 4,
            height: 1,
            ..GameConfig::default()
        };
        let snake = Snake::from_body(
            [Pos::new(0, 2), Pos::new(0, 1), Pos::new(0, 0)],
            Direction::Right,
        );
        let mut game = seeded_with(config, snake);

        // The only empty cell got the opening food
        assert_eq!(game.board().food_positions(), vec![Pos::new(0, 3)]);
        game.toggle_pause();

        assert_eq!(game.tick(), StepResult::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.score(), 5);
        assert_eq!(game.max_score(), 5);
        assert!(game.is_paused());
        assert_eq!(game.board().foods().count(), 0);
    }

    #[test]
    fn test_reset_keeps_only_high_score() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        let next = game.snake().next_square(game.board().size());
        put_food(&mut game, Food::normal(next, 5, STEP));
        game.toggle_pause();
        game.tick();
        game.finish_game();
        assert_eq!(game.max_score(), 5);

        game.reset_game();

        assert_eq!(game.score(), 0);
        assert_eq!(game.max_score(), 5);
        assert_eq!(game.snake(), &Snake::new(game.board().size()));
        assert!(game.is_paused());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board().foods().count(), 1);
        assert_eq!(game.board().empty_cells(), 120 - 4 - 1);
    }

    #[test]
    fn test_advance_runs_main_loop_on_schedule() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        let head = game.snake().head();

        // Paused: time passes, nothing moves
        assert!(game.advance(Duration::from_secs(5)).is_empty());
        assert_eq!(game.snake().head(), head);

        game.toggle_pause();
        assert!(game.advance(Duration::from_millis(579)).is_empty());
        assert_eq!(game.advance(Duration::from_millis(1)), vec![StepResult::Moved]);
        assert_eq!(game.snake().head(), Pos::new(head.row, head.col + 1));

        let steps = game.advance(Duration::from_millis(580 * 3));
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_feeding_speeds_up_loop() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        game.toggle_pause();
        assert_eq!(game.tick_interval(), Duration::from_millis(580));

        let next = game.snake().next_square(game.board().size());
        put_food(&mut game, Food::normal(next, 5, STEP));
        assert_eq!(game.advance(Duration::from_millis(580)), vec![StepResult::Fed(5)]);
        assert_eq!(game.tick_interval(), Duration::from_millis(575));
    }

    #[test]
    fn test_special_food_expires_without_points() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        game.toggle_pause();
        let pos = Pos::new(0, 0);
        put_food(&mut game, Food::special(pos, 15, 30, STEP));

        game.advance(Duration::from_millis(2900));
        assert_eq!(game.board().food(pos).and_then(Food::remaining_tenths), Some(1));
        assert_eq!(game.board().tag(pos), CellTag::SpecialFood);

        game.advance(STEP);
        assert!(!game.board().has_food(pos));
        assert_eq!(game.board().tag(pos), CellTag::Empty);
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_food_expiring_as_snake_arrives_is_not_eaten() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        game.toggle_pause();
        assert!(game.advance(Duration::from_millis(480)).is_empty());

        // Last tenth runs out on the same instant the snake steps onto it
        let next = game.snake().next_square(game.board().size());
        put_food(&mut game, Food::special(next, 15, 1, STEP));
        assert_eq!(game.next_deadline(), Some(STEP));

        assert_eq!(game.advance(STEP), vec![StepResult::Moved]);
        assert_eq!(game.snake().head(), next);
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().foods().count(), 0);
    }

    #[test]
    fn test_food_eaten_on_its_last_tick_scores_once() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        game.toggle_pause();
        assert!(game.advance(Duration::from_millis(480)).is_empty());

        let next = game.snake().next_square(game.board().size());
        put_food(&mut game, Food::special(next, 15, 2, STEP));

        assert_eq!(game.advance(STEP), vec![StepResult::Fed(15)]);
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.score(), 15);
        assert!(!game.board().has_food(next));

        // Its countdown went with it
        assert_eq!(game.advance(Duration::from_secs(1)), vec![StepResult::Moved]);
        assert_eq!(game.score(), 15);
        assert_eq!(game.board().foods().count(), 0);
    }

    #[test]
    fn test_constructors_reject_bad_config() {
        let never_special = GameConfig {
            special_food_every: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            SnakeGame::with_rng(never_special, 0, StdRng::seed_from_u64(1)),
            Err(ConfigError::Invalid(_))
        ));

        let narrow = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert!(matches!(
            SnakeGame::with_rng(narrow, 0, StdRng::seed_from_u64(1)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_snake_off_the_board_is_rejected() {
        let snake = Snake::from_body([Pos::new(12, 0), Pos::new(11, 0)], Direction::Down);
        let result =
            SnakeGame::with_snake(GameConfig::default(), 0, StdRng::seed_from_u64(1), snake);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_pause_freezes_food_countdown() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        game.toggle_pause();
        let pos = Pos::new(0, 0);
        put_food(&mut game, Food::special(pos, 15, 30, STEP));

        game.advance(Duration::from_secs(1));
        assert_eq!(game.board().food(pos).and_then(Food::remaining_tenths), Some(20));

        game.toggle_pause();
        assert!(game.board().foods().all(|food| !food.is_active()));
        game.advance(Duration::from_secs(60));
        assert_eq!(game.board().food(pos).and_then(Food::remaining_tenths), Some(20));

        // Resuming picks the countdown up where it stopped
        game.toggle_pause();
        game.advance(Duration::from_millis(500));
        assert_eq!(game.board().food(pos).and_then(Food::remaining_tenths), Some(15));
    }

    #[test]
    fn test_hold_until_resume_policy() {
        let config = GameConfig {
            spawn_timer_policy: SpawnTimerPolicy::HoldUntilResume,
            ..GameConfig::default()
        };
        let mut game = seeded(config);
        clear_food(&mut game);
        game.toggle_pause();

        let pos = game.spawn_food(FoodKind::Special).unwrap();
        assert!(!game.board().food(pos).unwrap().is_active());

        game.toggle_pause();
        game.toggle_pause();
        assert!(game.board().food(pos).unwrap().is_active());
    }

    #[test]
    fn test_follow_game_policy() {
        let mut game = seeded(GameConfig::default());
        clear_food(&mut game);
        game.toggle_pause();

        let pos = game.spawn_food(FoodKind::Special).unwrap();
        assert!(game.board().food(pos).unwrap().is_active());
        assert_eq!(game.board().tag(pos), CellTag::SpecialFood);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won.to_string(), "WIN");
        assert_eq!(GameStatus::Lost.to_string(), "LOSE");
        assert_eq!(GameStatus::InProgress.to_string(), "");
        assert!(GameStatus::Lost.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }

    #[test]
    fn test_board_size_matches_config() {
        let game = seeded(GameConfig {
            width: 16,
            height: 9,
            ..GameConfig::default()
        });
        assert_eq!(
            game.board().size(),
            Size {
                width: 16,
                height: 9
            }
        );
        assert_eq!(game.snake().head(), Pos::new(4, 5));
    }
}
