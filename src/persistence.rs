//! High score persistence.
//!
//! The simulation only hands out a plain integer; this module keeps it in a
//! small text file between sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::game::GameError;

/// Storage for the best score across sessions.
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    /// Persist `score` unless a higher value is already stored.
    fn save(&self, score: u32) -> Result<(), GameError>;
}

/// High score kept as a decimal number in a text file.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return 0,
            Err(err) => {
                warn!("[HighScore] Cannot read {}: {}", self.path.display(), err);
                return 0;
            }
        };

        match contents.trim().parse() {
            Ok(score) => score,
            Err(err) => {
                warn!("[HighScore] Corrupt high score in {}: {}", self.path.display(), err);
                0
            }
        }
    }

    fn save(&self, score: u32) -> Result<(), GameError> {
        let best = self.load().max(score);
        fs::write(&self.path, best.to_string())?;
        debug!("[HighScore] Saved {} to {}", best, self.path.display());
        Ok(())
    }
}
