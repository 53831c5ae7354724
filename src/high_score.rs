use log::{error, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> io::Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        text.trim()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => score,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No high score saved yet at {}", self.path.display());
                0
            }
            Err(e) => {
                warn!("Error loading high score: {}", e);
                0
            }
        }
    }

    pub fn save(&self, score: u32) {
        if let Err(e) = fs::write(&self.path, score.to_string()) {
            error!("Error saving high score: {}", e);
        }
    }
}
