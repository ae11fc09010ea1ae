use thiserror::Error;

use crate::PairValue;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck has no tiles")]
    EmptyDeck,
    #[error("Deck has an odd number of tiles")]
    OddTileCount,
    #[error("Tile value {0} is outside of the deck's pair range")]
    ValueOutOfRange(PairValue),
    #[error("Tile id appears more than once")]
    DuplicateTile,
    #[error("Invalid tile id")]
    InvalidTileId,
}

pub type Result<T> = core::result::Result<T, GameError>;
