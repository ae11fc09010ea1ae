use crate::*;
use alloc::vec::Vec;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, pairs: PairCount) -> Deck;
}

/// Deck in value order, `1-a, 1-b, 2-a, 2-b, ...`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrderedDeckGenerator;

impl DeckGenerator for OrderedDeckGenerator {
    fn generate(self, pairs: PairCount) -> Deck {
        Deck::from_tiles_unchecked(ordered_tiles(pairs))
    }
}

/// Shuffled deck of `pairs` pairs for the given seed.
pub fn generate(pairs: PairCount, seed: u64) -> Deck {
    ShuffledDeckGenerator::new(seed).generate(pairs)
}

fn ordered_tiles(pairs: PairCount) -> Vec<Tile> {
    let pairs = if pairs == 0 {
        log::warn!("Deck needs at least one pair, generating a single pair instead");
        1
    } else {
        pairs
    };

    (1..=pairs)
        .flat_map(|value| Twin::BOTH.map(|twin| Tile::new(value, twin)))
        .collect()
}
