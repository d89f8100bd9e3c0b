use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::arrangement::{grid_neighbors, Arrangement};

/// Tuning for one scramble. `min_difficulty` of `None` means the default
/// floor of `max(6, 2 * (total_blocks - 1))`.
#[derive(Debug, Clone, Copy)]
pub struct ShuffleConfig {
    pub min_moves: usize,
    pub max_moves: usize,
    pub min_difficulty: Option<usize>,
    /// Hard cap on scramble attempts. The retry loop is only
    /// probabilistically bounded, so a cap keeps a degenerate grid or a
    /// pathological RNG from spinning forever; past it the best arrangement
    /// seen so far is returned.
    pub max_attempts: usize,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self { min_moves: 30, max_moves: 100, min_difficulty: None, max_attempts: 100_000 }
    }
}

pub fn default_min_difficulty(total_blocks: usize) -> usize {
    6.max(2 * (total_blocks.saturating_sub(1)))
}

/// Produces scrambled arrangements that are solvable by construction: every
/// scramble is a walk of legal reversible slides starting from the solved
/// state, so no parity or solvability check exists anywhere in the crate.
pub struct Shuffler {
    rng: rand::rngs::StdRng,
}

impl Shuffler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn shuffle(&mut self, num_blocks_x: usize, num_blocks_y: usize) -> Arrangement {
        self.shuffle_with(num_blocks_x, num_blocks_y, &ShuffleConfig::default())
    }

    pub fn shuffle_with(
        &mut self,
        num_blocks_x: usize,
        num_blocks_y: usize,
        config: &ShuffleConfig,
    ) -> Arrangement {
        let total = num_blocks_x * num_blocks_y;
        let min_difficulty = config
            .min_difficulty
            .unwrap_or_else(|| default_min_difficulty(total));

        let mut best: Option<(Arrangement, usize)> = None;
        for attempt in 1..=config.max_attempts {
            let arr = self.walk(num_blocks_x, num_blocks_y, config);
            let score = arr.manhattan_distance(num_blocks_x);
            if score >= min_difficulty {
                log::debug!(
                    "scramble accepted after {} attempt(s), difficulty {} (floor {})",
                    attempt,
                    score,
                    min_difficulty
                );
                return arr;
            }
            if best.as_ref().map_or(true, |&(_, b)| score > b) {
                best = Some((arr, score));
            }
        }

        // Unreachable floor (1xN grids) or a broken RNG; hand back the
        // hardest scramble found.
        let (arr, score) = best.expect("max_attempts must be at least 1");
        log::warn!(
            "scramble attempts exhausted ({}); difficulty {} below floor {}",
            config.max_attempts,
            score,
            min_difficulty
        );
        arr
    }

    /// One scramble attempt: a random walk of the blank over the identity
    /// arrangement. After the first move the neighbor the blank just came
    /// from is excluded whenever more than one neighbor is available, which
    /// stops immediate undo moves from wasting scramble entropy.
    fn walk(
        &mut self,
        num_blocks_x: usize,
        num_blocks_y: usize,
        config: &ShuffleConfig,
    ) -> Arrangement {
        let mut arr = Arrangement::identity(num_blocks_x * num_blocks_y);
        let moves = self.rng.gen_range(config.min_moves..config.max_moves.max(config.min_moves + 1));
        let mut came_from: Option<usize> = None;

        for _ in 0..moves {
            let mut neighbors = grid_neighbors(arr.blank_index(), num_blocks_x, num_blocks_y);
            if let Some(prev) = came_from {
                if neighbors.len() > 1 {
                    neighbors.retain(|&n| n != prev);
                }
            }
            let Some(&next) = neighbors.choose(&mut self.rng) else {
                break; // 1x1 grid: the blank has nowhere to go
            };
            came_from = Some(arr.blank_index());
            arr.swap_with_blank(next);
        }
        arr
    }
}
