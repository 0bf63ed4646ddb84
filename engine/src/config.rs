//! Simulation configuration.

use crate::error::{EngineError, Result};

/// Smallest board side length. A 2×2 board still has eight (repeated) neighbors per cell.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board side length accepted by [`GridState`](crate::GridState).
pub const MAX_BOARD_SIZE: usize = 1024;

/// Parameters needed to start a seeded simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Seed for the random stream used by the initial fill and static noise.
    pub seed: u64,
    /// Per-cell probability of a forced flip on every step.
    pub static_noise_probability: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            board_size: 64,
            seed: 0,
            static_noise_probability: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        check_board_size(self.board_size)?;
        check_probability(self.static_noise_probability)
    }
}

pub(crate) fn check_board_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(EngineError::InvalidBoardSize {
            size,
            max: MAX_BOARD_SIZE,
        })
    }
}

pub(crate) fn check_probability(p: f32) -> Result<()> {
    // `contains` is false for NaN
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EngineError::OutOfRange(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_tiny_and_huge_boards() {
        for size in [0, 1, MAX_BOARD_SIZE + 1] {
            let config = SimulationConfig {
                board_size: size,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(EngineError::InvalidBoardSize {
                    size,
                    max: MAX_BOARD_SIZE
                })
            );
        }
    }

    #[test]
    fn rejects_bad_probabilities() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(matches!(check_probability(-0.1), Err(EngineError::OutOfRange(_))));
        assert!(matches!(check_probability(1.5), Err(EngineError::OutOfRange(_))));
        assert!(matches!(check_probability(f32::NAN), Err(EngineError::OutOfRange(_))));
    }
}
