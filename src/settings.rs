//! Game settings and the persisted high score
//!
//! Passed explicitly into the simulation tick; persisted as JSON between
//! sessions.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Obstacle fall speed (units/s)
    pub fn obstacle_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => EASY_OBSTACLE_SPEED,
            Difficulty::Medium => MEDIUM_OBSTACLE_SPEED,
            Difficulty::Hard => HARD_OBSTACLE_SPEED,
        }
    }
}

/// Player preferences and cross-session record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Read on every obstacle spawn
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Best score across sessions
    #[serde(default)]
    pub high_score: u32,
}

impl Settings {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Record a finished run; returns true if it set a new high score
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt settings at {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Could not read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("obstacle_avoid_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_difficulty_speeds_increase() {
        assert!(Difficulty::Easy.obstacle_speed() < Difficulty::Medium.obstacle_speed());
        assert!(Difficulty::Medium.obstacle_speed() < Difficulty::Hard.obstacle_speed());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        assert_eq!(Difficulty::from_str(Difficulty::Easy.as_str()), Some(Difficulty::Easy));
    }

    #[test]
    fn test_record_score_only_when_greater() {
        let mut settings = Settings::default();
        assert!(settings.record_score(10));
        assert!(!settings.record_score(10));
        assert!(!settings.record_score(3));
        assert_eq!(settings.high_score, 10);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save_load");
        let settings = Settings {
            difficulty: Difficulty::Hard,
            high_score: 42,
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_or_corrupt_file_falls_back() {
        let missing = temp_path("missing");
        let _ = fs::remove_file(&missing);
        assert_eq!(Settings::load_from(&missing), Settings::default());

        let corrupt = temp_path("corrupt");
        fs::write(&corrupt, "not json").unwrap();
        let loaded = Settings::load_from(&corrupt);
        let _ = fs::remove_file(&corrupt);
        assert_eq!(loaded, Settings::default());
    }
}
