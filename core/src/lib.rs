#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::Index;
use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use notification::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod notification;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub pairs: PairCount,
    /// Pause showing a matched pair before the turn clears.
    pub match_delay: Duration,
    /// Pause showing a mismatched pair before both tiles are concealed again.
    pub mismatch_delay: Duration,
}

impl GameConfig {
    pub const DEFAULT_PAIRS: PairCount = 6;
    pub const MATCH_DELAY: Duration = Duration::from_millis(300);
    pub const MISMATCH_DELAY: Duration = Duration::from_millis(900);

    pub const fn new_unchecked(pairs: PairCount) -> Self {
        Self {
            pairs,
            match_delay: Self::MATCH_DELAY,
            mismatch_delay: Self::MISMATCH_DELAY,
        }
    }

    pub fn new(pairs: PairCount) -> Self {
        Self::new_unchecked(pairs.clamp(1, PairCount::MAX))
    }

    pub const fn total_tiles(&self) -> TileCount {
        double(self.pairs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_PAIRS)
    }
}

/// Ordered sequence of tiles holding exactly two tiles for every value in `1..=pair_count`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        if tiles.len() % 2 != 0 {
            return Err(GameError::OddTileCount);
        }
        let pairs = tiles.len() / 2;

        // with unique ids and in-range values, a full count forces every value to have both twins
        let mut ids = BTreeSet::new();
        for tile in &tiles {
            let value = tile.value();
            if value == 0 || usize::from(value) > pairs {
                return Err(GameError::ValueOutOfRange(value));
            }
            if !ids.insert(tile.id()) {
                return Err(GameError::DuplicateTile);
            }
        }

        Ok(Self { tiles })
    }

    /// Builds a deck from ids in display order, see [`Deck::from_tiles`].
    pub fn from_ids(ids: impl IntoIterator<Item = TileId>) -> Result<Self> {
        Self::from_tiles(ids.into_iter().map(Tile::from).collect())
    }

    pub(crate) fn from_tiles_unchecked(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> TileCount {
        self.tiles.len().try_into().unwrap_or(TileCount::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn pair_count(&self) -> PairCount {
        (self.tiles.len() / 2).try_into().unwrap_or(PairCount::MAX)
    }

    pub fn position(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().map(Tile::id)
    }
}

impl Index<usize> for Deck {
    type Output = Tile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Tile;
    type IntoIter = core::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn id(text: &str) -> TileId {
        text.parse().unwrap()
    }

    #[test]
    fn config_clamps_pairs_to_at_least_one() {
        assert_eq!(GameConfig::new(0).pairs, 1);
        assert_eq!(GameConfig::new(6).total_tiles(), 12);
        assert_eq!(GameConfig::new(PairCount::MAX).total_tiles(), 510);
    }

    #[test]
    fn default_config_uses_six_pairs_and_fixed_delays() {
        let config = GameConfig::default();

        assert_eq!(config.pairs, 6);
        assert_eq!(config.match_delay, Duration::from_millis(300));
        assert_eq!(config.mismatch_delay, Duration::from_millis(900));
        assert!(config.match_delay < config.mismatch_delay);
    }

    #[test]
    fn deck_accepts_any_order_of_complete_pairs() {
        let deck = Deck::from_ids([id("2-b"), id("1-a"), id("2-a"), id("1-b")]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert_eq!(deck.position(id("1-a")), Some(1));
        assert_eq!(deck[0].id(), id("2-b"));
        assert_eq!(deck.get(id("3-a")), None);
    }

    #[test]
    fn deck_rejects_broken_layouts() {
        assert_eq!(Deck::from_tiles(vec![]), Err(GameError::EmptyDeck));
        assert_eq!(
            Deck::from_ids([id("1-a"), id("1-b"), id("2-a")]),
            Err(GameError::OddTileCount)
        );
        assert_eq!(
            Deck::from_ids([id("1-a"), id("3-b")]),
            Err(GameError::ValueOutOfRange(3))
        );
        assert_eq!(
            Deck::from_ids([id("1-a"), id("1-a")]),
            Err(GameError::DuplicateTile)
        );
    }
}
