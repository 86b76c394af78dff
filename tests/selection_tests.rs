//! Statistical checks on selections.
//!
//! Draws are seeded, so these are deterministic; the tolerances are still
//! loose enough to hold for any reasonable seed.

use std::collections::HashMap;

use tap_select::{
    CoinFlipInsertion, FisherYates, Marker, PlayerCount, Point, SelectionSurface, Selector,
    SequenceNumber, ShuffleKind, ShuffleStrategy, SurfaceConfig, SurfaceRng,
};

fn markers(count: u8) -> Vec<Marker> {
    (1..=count)
        .map(|n| Marker::new(Point::new(n as f32 * 40.0, 80.0), SequenceNumber::new(n)))
        .collect()
}

fn pair_counts<S: ShuffleStrategy>(strategy: S, rounds: usize) -> HashMap<Vec<u8>, usize> {
    let selector = Selector::new(strategy);
    let placed = markers(3);
    let two = PlayerCount::new(2, 6).unwrap();
    let mut rng = SurfaceRng::new(31);

    let mut counts = HashMap::new();
    for _ in 0..rounds {
        let result = selector.select(&placed, two, &mut rng).unwrap();
        let pair: Vec<u8> = result.sorted().into_iter().map(SequenceNumber::get).collect();
        *counts.entry(pair).or_insert(0) += 1;
    }
    counts
}

/// Two players, three markers: every pair shows up with roughly equal share.
#[test]
fn test_pairs_are_uniform() {
    let rounds = 3000;
    let counts = pair_counts(FisherYates, rounds);

    assert_eq!(counts.len(), 3);
    for pair in [vec![1, 2], vec![1, 3], vec![2, 3]] {
        let count = counts[&pair];
        assert!(
            (850..=1150).contains(&count),
            "pair {:?} drawn {} times out of {}",
            pair,
            count,
            rounds
        );
    }
}

/// The legacy strategy is biased but still reaches every pair.
#[test]
fn test_coin_flip_reaches_every_pair() {
    let counts = pair_counts(CoinFlipInsertion, 3000);

    assert_eq!(counts.len(), 3);
    for &count in counts.values() {
        assert!(count > 300, "a pair was drawn only {} times", count);
    }
}

/// Each marker is picked about players/markers of the time.
#[test]
fn test_each_marker_equally_likely() {
    let selector = Selector::new(FisherYates);
    let placed = markers(6);
    let three = PlayerCount::new(3, 6).unwrap();
    let mut rng = SurfaceRng::new(8);

    let rounds = 6000;
    let mut hits = [0usize; 6];
    for _ in 0..rounds {
        for seq in selector.select(&placed, three, &mut rng).unwrap().iter() {
            hits[seq.index().unwrap()] += 1;
        }
    }

    // Expect 3000 per marker.
    for (i, &count) in hits.iter().enumerate() {
        assert!((2800..=3200).contains(&count), "marker {} hit {} times", i + 1, count);
    }
}

/// Repeated play on a fixed surface visits every pair.
#[test]
fn test_surface_replay_visits_all_pairs() {
    let config = SurfaceConfig::new()
        .with_seed(77)
        .with_initial_players(2)
        .with_shuffle(ShuffleKind::FisherYates);
    let mut surface = SelectionSurface::new(config).unwrap();
    for x in [60.0, 160.0, 260.0] {
        surface.place(Point::new(x, 200.0)).unwrap();
    }

    let mut seen = HashMap::new();
    for _ in 0..600 {
        let pair = surface.play().unwrap().sorted();
        *seen.entry(pair).or_insert(0usize) += 1;
    }

    assert_eq!(seen.len(), 3);
    for &count in seen.values() {
        assert!((140..=260).contains(&count), "pair count {}", count);
    }
}
