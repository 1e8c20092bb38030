//! Seeded randomness for card draws.
//!
//! Every random card a game shows comes out of the `GameRng` stored in
//! its `GameState`. The RNG is a plain value: cloning a state clones the
//! stream position with it, so re-applying an action to a kept snapshot
//! draws the same card again.
//!
//! ```
//! use dare_or_dodge::core::GameRng;
//!
//! let dares = ["d1", "d2", "d3"];
//! let mut live = GameRng::new(7);
//! let mut kept = live.clone();
//!
//! assert_eq!(live.choose(&dares), kept.choose(&dares));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream plus the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Start a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Start a stream from an OS-random seed. The seed is still recorded.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `pool`, or `None` if it is empty.
    pub fn choose<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        pool.choose(&mut self.stream)
    }

    /// Checkpoint of the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a stream from a checkpoint.
    #[must_use]
    pub fn from_state(checkpoint: &GameRngState) -> Self {
        let mut rng = Self::new(checkpoint.seed);
        rng.stream.set_word_pos(checkpoint.word_pos);
        rng
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

/// Seed and stream position; enough to resume the exact same draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    pub seed: u64,
    /// 32-bit words consumed from the ChaCha8 stream.
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: [&str; 4] = ["d1", "d2", "d3", "d4"];

    fn draws(rng: &mut GameRng, n: usize) -> Vec<&'static str> {
        (0..n).map(|_| *rng.choose(&POOL).unwrap()).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);
        assert_eq!(draws(&mut a, 50), draws(&mut b, 50));
    }

    #[test]
    fn test_seed_changes_draws() {
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(12);
        assert_ne!(draws(&mut a, 50), draws(&mut b, 50));
    }

    #[test]
    fn test_clone_keeps_position() {
        let mut rng = GameRng::new(9);
        draws(&mut rng, 3);

        let mut copy = rng.clone();
        assert_eq!(rng, copy);
        assert_eq!(draws(&mut rng, 5), draws(&mut copy, 5));
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = GameRng::new(1);
        let before = rng.state();

        let nothing: [&str; 0] = [];
        assert!(rng.choose(&nothing).is_none());
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_every_card_reachable() {
        let mut rng = GameRng::new(3);
        let seen = draws(&mut rng, 200);
        assert!(POOL.iter().all(|card| seen.contains(card)));
    }

    #[test]
    fn test_resume_from_checkpoint() {
        let mut rng = GameRng::new(21);
        draws(&mut rng, 17);

        let checkpoint = rng.state();
        let expected = draws(&mut rng, 10);

        let mut resumed = GameRng::from_state(&checkpoint);
        assert_eq!(draws(&mut resumed, 10), expected);
    }

    #[test]
    fn test_checkpoint_json() {
        let checkpoint = GameRng::new(4).state();
        let json = serde_json::to_string(&checkpoint).unwrap();

        assert!(json.contains("\"wordPos\":0"));
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, checkpoint);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        assert_eq!(rng.state().seed, rng.seed());
    }
}
