use super::*;

/// Every tile ordering is equally likely; the same seed always yields the same deck.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, pairs: PairCount) -> Deck {
        use rand::prelude::*;

        let mut tiles = ordered_tiles(pairs);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // Fisher-Yates, back to front
        for i in (1..tiles.len()).rev() {
            let j = rng.random_range(0..=i);
            tiles.swap(i, j);
        }

        log::debug!("generated deck of {} tiles, seed: {}", tiles.len(), self.seed);
        Deck::from_tiles_unchecked(tiles)
    }
}
