use crate::config::check_probability;
use crate::error::Result;
use crate::random::RandomSource;

/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*/
pub fn rule_flips(is_alive: bool, live_neighbors: u8) -> bool {
    match (is_alive, live_neighbors) {
        (true, 2..=3) => false, // Survives
        (true, _) => true,      // Dies
        (false, 3) => true,     // Becomes alive
        (false, _) => false,    // Remains dead
    }
}

/// Probability that any cell is flipped on a step regardless of the rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticNoise {
    probability: f32,
}

impl StaticNoise {
    pub fn new(probability: f32) -> Result<Self> {
        check_probability(probability)?;
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }

    /// Draws one sample from `rng`, whatever the probability. Skipping the
    /// draw would shift the random stream for every later cell.
    pub fn fires(&self, rng: &mut impl RandomSource) -> bool {
        self.probability > rng.next_uniform()
    }
}

/// Birth/survival rule with static noise OR-ed on top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionRule {
    pub noise: StaticNoise,
}

impl TransitionRule {
    pub fn new(noise: StaticNoise) -> Self {
        Self { noise }
    }

    /// Decide whether one cell flips. Consumes exactly one uniform sample.
    pub fn should_flip(&self, is_alive: bool, live_neighbors: u8, rng: &mut impl RandomSource) -> bool {
        let do_flip = rule_flips(is_alive, live_neighbors);
        let forced = self.noise.fires(rng);
        do_flip || forced
    }
}
