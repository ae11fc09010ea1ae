use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Which of the two tiles of a pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Twin {
    A,
    B,
}

impl Twin {
    pub const BOTH: [Twin; 2] = [Twin::A, Twin::B];

    const fn suffix(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
        }
    }
}

/// Identity of a tile, stable for the lifetime of one deck. Formats as `"<value>-a"` or `"<value>-b"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub value: PairValue,
    pub twin: Twin,
}

impl TileId {
    pub const fn new(value: PairValue, twin: Twin) -> Self {
        Self { value, twin }
    }

    /// The other tile of the same pair.
    pub const fn twin_id(self) -> Self {
        let twin = match self.twin {
            Twin::A => Twin::B,
            Twin::B => Twin::A,
        };
        Self::new(self.value, twin)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.value, self.twin.suffix())
    }
}

impl FromStr for TileId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let (value, twin) = s.split_once('-').ok_or(GameError::InvalidTileId)?;
        let value: PairValue = value.parse().map_err(|_| GameError::InvalidTileId)?;
        if value == 0 {
            return Err(GameError::InvalidTileId);
        }
        let twin = match twin {
            "a" => Twin::A,
            "b" => Twin::B,
            _ => return Err(GameError::InvalidTileId),
        };
        Ok(Self::new(value, twin))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    value: PairValue,
}

impl Tile {
    pub const fn new(value: PairValue, twin: Twin) -> Self {
        Self {
            id: TileId::new(value, twin),
            value,
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn value(&self) -> PairValue {
        self.value
    }

    pub const fn pairs_with(&self, other: &Tile) -> bool {
        self.value == other.value
    }
}

impl From<TileId> for Tile {
    fn from(id: TileId) -> Self {
        Self::new(id.value, id.twin)
    }
}

/// How a tile should currently be shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFace {
    Concealed,
    FaceUp,
    Matched,
}

impl TileFace {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::FaceUp | Self::Matched)
    }
}

impl Default for TileFace {
    fn default() -> Self {
        Self::Concealed
    }
}
