use core::time::Duration;

/// Face value shared by the two tiles of a pair, numbered from 1.
pub type PairValue = u8;

/// Count type used for the configured number of pairs and matched pairs.
pub type PairCount = u8;

/// Count type used for the number of tiles in a deck.
pub type TileCount = u16;

/// Counter of completed two-tile turns.
pub type AttemptCount = u32;

pub const fn double(pairs: PairCount) -> TileCount {
    (pairs as TileCount) * 2
}

/// Whole milliseconds of `duration`, saturating at `u64::MAX`.
pub fn millis(duration: Duration) -> u64 {
    duration.as_millis().try_into().unwrap_or(u64::MAX)
}
