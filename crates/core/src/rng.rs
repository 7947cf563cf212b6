//! RNG module - seven-bag piece generation
//!
//! Implements the "7-bag" randomizer used in modern Tetris. The bag holds one
//! of each piece type; every draw removes a uniformly chosen entry, and an
//! empty bag is refilled before the next draw. Any 7 consecutive draws
//! starting at a refill contain each type exactly once.
//!
//! A randomizer built with a seed is fully deterministic: two instances with
//! the same seed produce the same sequence, which keeps multi-instance games
//! fair. Without a seed the sequence comes from OS entropy.

use arrayvec::ArrayVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Seven-bag piece factory
#[derive(Debug, Clone)]
pub struct Randomizer {
    /// Types not yet drawn from the current bag
    bag: ArrayVec<PieceKind, 7>,
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl Randomizer {
    /// Create a randomizer with a non-reproducible sequence
    pub fn new() -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Create a deterministic randomizer
    pub fn with_seed(seed: u64) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded when `seed` is `Some`, process-random otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// The seed this randomizer was built with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw the next piece
    pub fn next(&mut self) -> Piece {
        if self.bag.is_empty() {
            self.refill_bag();
        }

        let i = self.rng.gen_range(0..self.bag.len());
        let kind = self.bag.remove(i);
        Self::generate(kind)
    }

    /// Instantiate a specific piece type, outside of the bag
    pub fn generate(kind: PieceKind) -> Piece {
        Piece::new(kind)
    }

    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
    }

    /// Types still waiting in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draw_fills_bag() {
        let mut r = Randomizer::with_seed(1);
        assert!(r.remaining().is_empty());

        r.next();
        assert_eq!(r.remaining().len(), 6);
    }

    #[test]
    fn test_draws_all_seven() {
        let mut r = Randomizer::with_seed(12345);

        let drawn: Vec<PieceKind> = (0..7).map(|_| r.next().kind()).collect();
        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert!(r.remaining().is_empty());
    }

    #[test]
    fn test_auto_refill() {
        let mut r = Randomizer::with_seed(7);
        for _ in 0..7 {
            r.next();
        }

        r.next();
        assert_eq!(r.remaining().len(), 6);
    }

    #[test]
    fn test_generate_is_first_orientation() {
        let piece = Randomizer::generate(PieceKind::L);
        assert_eq!(piece.kind(), PieceKind::L);
        assert_eq!(piece.orientation(), 0);
    }

    #[test]
    fn test_seed_reported() {
        assert_eq!(Randomizer::with_seed(99).seed(), Some(99));
        assert_eq!(Randomizer::new().seed(), None);
        assert_eq!(Randomizer::from_seed(Some(3)).seed(), Some(3));
    }
}
