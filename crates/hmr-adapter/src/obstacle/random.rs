//! Random obstacle source - a biased coin per move

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hmr_domain::ObstacleSource;

#[derive(Debug, Clone)]
pub struct RandomObstacleSource {
    probability: f64,
    rng: StdRng,
}

impl RandomObstacleSource {
    /// Unseeded source backed by OS entropy
    ///
    /// `probability` is clamped to [0, 1].
    pub fn new(probability: f64) -> Self {
        Self {
            probability: clamp_probability(probability),
            rng: StdRng::from_entropy(),
        }
    }

    /// Repeatable source for reproducible runs
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self {
            probability: clamp_probability(probability),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomObstacleSource {
    /// Even odds
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ObstacleSource for RandomObstacleSource {
    fn detect_obstacle(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        return 0.0;
    }
    probability.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_extremes() {
        let mut never = RandomObstacleSource::seeded(0.0, 1);
        let mut always = RandomObstacleSource::seeded(1.0, 1);

        for _ in 0..100 {
            assert!(!never.detect_obstacle());
            assert!(always.detect_obstacle());
        }
    }

    #[test]
    fn test_probability_clamped() {
        assert_eq!(RandomObstacleSource::seeded(3.0, 0).probability(), 1.0);
        assert_eq!(RandomObstacleSource::seeded(-1.0, 0).probability(), 0.0);
        assert_eq!(RandomObstacleSource::seeded(f64::NAN, 0).probability(), 0.0);
    }

    #[test]
    fn test_even_odds_produce_both_answers() {
        let mut source = RandomObstacleSource::seeded(0.5, 99);
        let answers: Vec<bool> = (0..200).map(|_| source.detect_obstacle()).collect();

        assert!(answers.iter().any(|&a| a));
        assert!(answers.iter().any(|&a| !a));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomObstacleSource::seeded(0.3, 1234);
        let mut b = RandomObstacleSource::seeded(0.3, 1234);

        for _ in 0..50 {
            assert_eq!(a.detect_obstacle(), b.detect_obstacle());
        }
    }

    #[test]
    fn test_default_is_even_odds() {
        assert_eq!(RandomObstacleSource::default().probability(), 0.5);
    }
}
