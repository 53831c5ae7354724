use crate::grid::Size;
use crate::snake::INITIAL_LENGTH;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "snekrs.json";
pub const CONFIG_ENV: &str = "SNEKRS_CONFIG";
pub const HIGH_SCORE_FILE: &str = ".snekrs_high_score.txt";
pub const LOG_FILE: &str = "snekrs.log";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnTimerPolicy {
    // Runs while the game loop runs
    #[default]
    FollowGame,
    // Stays frozen until the next resume, even if the game is running
    HoldUntilResume,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub base_tick_ms: u64,
    pub tick_step_ms: u64,
    pub min_tick_ms: u64,
    pub food_points: u32,
    pub special_food_points: u32,
    pub special_food_every: usize,
    pub decay_step_ms: u64,
    pub special_min_tenths: u32,
    pub special_spread_tenths: u32,
    pub spawn_timer_policy: SpawnTimerPolicy,
    pub start_paused: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 10,
            height: 12,
            base_tick_ms: 600,
            tick_step_ms: 5,
            min_tick_ms: 50,
            food_points: 5,
            special_food_points: 15,
            special_food_every: 8,
            decay_step_ms: 100,
            special_min_tenths: 30,
            special_spread_tenths: 30,
            spawn_timer_policy: SpawnTimerPolicy::FollowGame,
            start_paused: true,
        }
    }
}

impl GameConfig {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn decay_step(&self) -> Duration {
        Duration::from_millis(self.decay_step_ms)
    }

    pub fn tick_interval(&self, length: usize) -> Duration {
        let speedup = self.tick_step_ms.saturating_mul(length as u64);
        let ms = self.base_tick_ms.saturating_sub(speedup).max(self.min_tick_ms);
        Duration::from_millis(ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (self.width as usize) < INITIAL_LENGTH || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be at least {}x1, got {}x{}",
                INITIAL_LENGTH, self.width, self.height
            )));
        }
        if self.min_tick_ms == 0 || self.decay_step_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick and decay periods must be positive".to_string(),
            ));
        }
        if self.special_food_every == 0 {
            return Err(ConfigError::Invalid(
                "special_food_every must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub high_score_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    pub show_timer: bool,
    pub timer_start: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            game: GameConfig::default(),
            high_score_file: PathBuf::from(HIGH_SCORE_FILE),
            log_file: PathBuf::from(LOG_FILE),
            log_level: "info".to_string(),
            show_timer: true,
            timer_start: "00:00:00".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.game.validate()?;
        Ok(settings)
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn or_default(path: &Path, loaded: Result<Settings, ConfigError>) -> Settings {
        match loaded {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("No settings file at {}, using defaults", path.display());
                Settings::default()
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read settings: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}
