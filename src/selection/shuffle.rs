//! Shuffle strategies used to draw a selection.
//!
//! Strategies are trait-based so the selector can run either:
//! - `FisherYates`: uniform over all permutations
//! - `CoinFlipInsertion`: a "random comparator" sort, reproducing the bias of
//!   sorting with a comparator that answers at random
//!
//! `ShuffleKind` (from config) implements the trait by dispatching to one of
//! the two.

use crate::core::config::ShuffleKind;
use crate::core::rng::SurfaceRng;

/// Permutes a slice in place.
pub trait ShuffleStrategy: Send + Sync {
    /// Shuffle `items` using `rng`.
    ///
    /// Every permutation must have non-zero probability.
    fn shuffle<T>(&self, items: &mut [T], rng: &mut SurfaceRng);
}

/// Uniform Fisher-Yates shuffle.
#[derive(Clone, Copy, Debug, Default)]
pub struct FisherYates;

impl ShuffleStrategy for FisherYates {
    fn shuffle<T>(&self, items: &mut [T], rng: &mut SurfaceRng) {
        rng.shuffle(items);
    }
}

/// Binary insertion sort whose comparator is a fair coin flip.
///
/// Each element is inserted at the position a binary search lands on when
/// every comparison is random. All insertion points are reachable, so every
/// permutation can occur, but positions are not equally likely unless the
/// number of insertion points is a power of two.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinFlipInsertion;

impl ShuffleStrategy for CoinFlipInsertion {
    fn shuffle<T>(&self, items: &mut [T], rng: &mut SurfaceRng) {
        for i in 1..items.len() {
            let (mut lo, mut hi) = (0, i);
            while lo < hi {
                let mid = (lo + hi) / 2;
                if rng.gen_bool(0.5) {
                    hi = mid;
                } else {
                    lo = mid + 1;
                }
            }
            items[lo..=i].rotate_right(1);
        }
    }
}

impl ShuffleStrategy for ShuffleKind {
    fn shuffle<T>(&self, items: &mut [T], rng: &mut SurfaceRng) {
        match self {
            ShuffleKind::FisherYates => FisherYates.shuffle(items, rng),
            ShuffleKind::CoinFlip => CoinFlipInsertion.shuffle(items, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn permutation_counts<S: ShuffleStrategy>(strategy: &S, n: usize, rounds: usize) -> HashMap<Vec<usize>, usize> {
        let mut rng = SurfaceRng::new(7);
        let mut counts = HashMap::new();
        for _ in 0..rounds {
            let mut items: Vec<usize> = (0..n).collect();
            strategy.shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_fisher_yates_keeps_elements() {
        let mut rng = SurfaceRng::new(1);
        let mut items = vec![1, 2, 3, 4, 5, 6];
        FisherYates.shuffle(&mut items, &mut rng);
        items.sort();
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_coin_flip_keeps_elements() {
        let mut rng = SurfaceRng::new(1);
        for _ in 0..100 {
            let mut items = vec![1, 2, 3, 4, 5, 6];
            CoinFlipInsertion.shuffle(&mut items, &mut rng);
            items.sort();
            assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = SurfaceRng::new(1);
        let mut empty: Vec<u8> = vec![];
        CoinFlipInsertion.shuffle(&mut empty, &mut rng);
        FisherYates.shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        CoinFlipInsertion.shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_fisher_yates_is_uniform() {
        // 6 permutations of 3 elements, 6000 draws: expect ~1000 each.
        let counts = permutation_counts(&FisherYates, 3, 6000);
        assert_eq!(counts.len(), 6);
        for &count in counts.values() {
            assert!((850..=1150).contains(&count), "count {} far from 1000", count);
        }
    }

    #[test]
    fn test_coin_flip_reaches_every_permutation() {
        let counts = permutation_counts(&CoinFlipInsertion, 4, 10_000);
        assert_eq!(counts.len(), 24);
    }

    #[test]
    fn test_coin_flip_is_biased() {
        // Inserting the third element into a prefix of two lands on
        // positions 0, 1, 2 with probability 1/4, 1/4, 1/2.
        let mut rng = SurfaceRng::new(11);
        let rounds = 8000;
        let mut stays_last = 0;
        for _ in 0..rounds {
            let mut items = [0usize, 1, 2];
            CoinFlipInsertion.shuffle(&mut items, &mut rng);
            if items[2] == 2 {
                stays_last += 1;
            }
        }
        let share = stays_last as f64 / rounds as f64;
        assert!((0.45..0.55).contains(&share), "share was {}", share);
    }

    #[test]
    fn test_kind_dispatch_is_deterministic() {
        for kind in [ShuffleKind::FisherYates, ShuffleKind::CoinFlip] {
            let mut a = SurfaceRng::new(5);
            let mut b = SurfaceRng::new(5);
            let mut x = vec![1, 2, 3, 4, 5, 6];
            let mut y = x.clone();
            kind.shuffle(&mut x, &mut a);
            kind.shuffle(&mut y, &mut b);
            assert_eq!(x, y);
        }
    }
}
