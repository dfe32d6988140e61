//! Timer-driven scoring and the eased HUD counter

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u32,
    /// Cosmetic counter chasing `score`, never ahead of it
    displayed: f32,
    /// Seconds since the last award
    timer: f32,
}

impl ScoreKeeper {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn displayed(&self) -> u32 {
        self.displayed as u32
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Award a random increment once per scoring interval; returns the points added
    pub fn accrue<R: Rng>(&mut self, dt: f32, config: &GameConfig, rng: &mut R) -> Option<u32> {
        self.timer += dt;
        if dt <= 0.0 || self.timer < config.score_every {
            return None;
        }
        self.timer = 0.0;

        let min = config.score_increment_min;
        let max = config.score_increment_max.max(min);
        let points = rng.random_range(min..=max);
        self.score = self.score.saturating_add(points);
        Some(points)
    }

    /// Move the displayed score toward the real one at `rate` points/s
    pub fn ease_display(&mut self, dt: f32, rate: f32) {
        let target = self.score as f32;
        if self.displayed < target {
            self.displayed = (self.displayed + rate * dt).min(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_accrue_on_interval() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut keeper = ScoreKeeper::default();

        assert_eq!(keeper.accrue(config.score_every / 2.0, &config, &mut rng), None);
        assert_eq!(keeper.score(), 0);

        let points = keeper.accrue(config.score_every, &config, &mut rng).unwrap();
        assert!((config.score_increment_min..=config.score_increment_max).contains(&points));
        assert_eq!(keeper.score(), points);
        assert_eq!(keeper.timer(), 0.0);
    }

    #[test]
    fn test_fixed_increment() {
        let config = GameConfig {
            score_every: 1.0,
            score_increment_min: 3,
            score_increment_max: 3,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(0);
        let mut keeper = ScoreKeeper::default();
        for _ in 0..4 {
            keeper.accrue(1.0, &config, &mut rng);
        }
        assert_eq!(keeper.score(), 12);
    }

    #[test]
    fn test_display_eases_and_never_overshoots() {
        let config = GameConfig {
            score_every: 1.0,
            score_increment_min: 5,
            score_increment_max: 5,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(0);
        let mut keeper = ScoreKeeper::default();
        keeper.accrue(1.0, &config, &mut rng);

        keeper.ease_display(0.05, 60.0);
        assert_eq!(keeper.displayed(), 3);

        keeper.ease_display(1.0, 60.0);
        assert_eq!(keeper.displayed(), 5);
    }
}
