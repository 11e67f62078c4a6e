//! Snake high score persistence.
//!
//! The score lives in `~/.tui-arcade/snakeHighScore` as a bare base-10
//! string. Loading is forgiving: a missing or unparseable file reads as
//! zero, so a corrupt score can never block a run. Saving writes the
//! maximum of the stored and offered values.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = ".tui-arcade";
const SNAKE_FILE: &str = "snakeHighScore";

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// The store in the user's home directory.
    pub fn open() -> Result<Self> {
        let home = dirs::home_dir().context("no home directory")?;
        Ok(Self::at(home.join(APP_DIR).join(SNAKE_FILE)))
    }

    /// A store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The stored score, zero when absent or unreadable.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist `score` if it beats the stored one.
    pub fn save(&self, score: u32) -> Result<()> {
        let best = self.load().max(score);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&self.path, best.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}
