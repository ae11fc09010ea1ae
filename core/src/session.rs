use alloc::collections::{BTreeSet, VecDeque, vec_deque};
use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Idle,
    OneSelected,
    Resolving,
    Completed,
}

impl TurnState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed)
    }

    pub const fn accepts_selection(self) -> bool {
        matches!(self, Self::Idle | Self::OneSelected)
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Identifies one scheduled resolution. Tickets from before a replay never match the current session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    generation: u32,
    turn: AttemptCount,
}

/// Turn waiting for its delay to elapse. The host must call [`Session::resolve`] with the ticket once `delay` has
/// passed; until then the session is locked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingResolution {
    pub ticket: ResolutionTicket,
    pub verdict: Verdict,
    pub delay: Duration,
    pub due_at: Instant,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    Locked,
    UnknownTile,
    AlreadyMatched,
    AlreadySelected,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    Ignored(IgnoreReason),
    Flipped,
    Resolving(PendingResolution),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored(_))
    }

    pub const fn pending(self) -> Option<PendingResolution> {
        match self {
            Self::Resolving(pending) => Some(pending),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    /// Ticket does not belong to the pending turn.
    Stale,
    /// Fired before the turn's delay elapsed, nothing changed.
    TooEarly(Duration),
    /// Mismatched tiles turned face down again.
    Concealed,
    /// Matched turn cleared, both tiles stay revealed.
    Cleared,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Concealed | Self::Cleared)
    }
}

/// Tiles face up for the current turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    first: Option<Tile>,
    second: Option<Tile>,
}

impl Selection {
    pub const fn first(&self) -> Option<Tile> {
        self.first
    }

    pub const fn second(&self) -> Option<Tile> {
        self.second
    }

    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.ids().any(|selected| selected == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> + use<> {
        self.first.into_iter().chain(self.second).map(|tile| tile.id())
    }
}

/// One game from the first flip to completion, restartable with [`Session::replay`].
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    deck: Deck,
    selection: Selection,
    matched: BTreeSet<PairValue>,
    attempts: AttemptCount,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    completed: bool,
    pending: Option<PendingResolution>,
    generation: u32,
    notifications: VecDeque<Notification>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let deck = ShuffledDeckGenerator::new(seed).generate(config.pairs);
        Self::from_deck(config, deck)
    }

    /// Starts a session on a prepared deck; the deck's pair count overrides `config.pairs`.
    pub fn from_deck(config: GameConfig, deck: Deck) -> Self {
        let config = GameConfig {
            pairs: deck.pair_count(),
            ..config
        };
        Self {
            config,
            deck,
            selection: Selection::default(),
            matched: BTreeSet::new(),
            attempts: 0,
            started_at: None,
            finished_at: None,
            completed: false,
            pending: None,
            generation: 0,
            notifications: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn face_up_ids(&self) -> impl Iterator<Item = TileId> + use<> {
        self.selection.ids()
    }

    pub fn matched_values(&self) -> &BTreeSet<PairValue> {
        &self.matched
    }

    pub fn pairs_found(&self) -> PairCount {
        self.matched.len().try_into().unwrap_or(PairCount::MAX)
    }

    pub fn attempts(&self) -> AttemptCount {
        self.attempts
    }

    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn pending(&self) -> Option<PendingResolution> {
        self.pending
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn state(&self) -> TurnState {
        if self.pending.is_some() {
            TurnState::Resolving
        } else if self.completed {
            TurnState::Completed
        } else if self.selection.is_empty() {
            TurnState::Idle
        } else {
            TurnState::OneSelected
        }
    }

    pub fn face_of(&self, id: TileId) -> TileFace {
        match self.deck.get(id) {
            Some(tile) if self.matched.contains(&tile.value()) => TileFace::Matched,
            Some(_) if self.selection.contains(id) => TileFace::FaceUp,
            _ => TileFace::Concealed,
        }
    }

    /// Time since the first flip, frozen once the game completes.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .finished_at
                .unwrap_or(now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    /// Takes every notification queued since the last drain, oldest first.
    pub fn drain_notifications(&mut self) -> vec_deque::Drain<'_, Notification> {
        self.notifications.drain(..)
    }

    pub fn select_tile(&mut self, id: TileId, now: Instant) -> SelectOutcome {
        use IgnoreReason::*;

        if self.pending.is_some() {
            log::trace!("locked, ignoring {}", id);
            return SelectOutcome::Ignored(Locked);
        }
        let Some(&tile) = self.deck.get(id) else {
            return SelectOutcome::Ignored(UnknownTile);
        };
        if self.matched.contains(&tile.value()) {
            return SelectOutcome::Ignored(AlreadyMatched);
        }

        match self.selection.first {
            Some(first) if first.id() == id => SelectOutcome::Ignored(AlreadySelected),
            Some(first) => SelectOutcome::Resolving(self.complete_turn(first, tile, now)),
            None => {
                self.selection.first = Some(tile);
                self.mark_started(now);
                log::debug!("flipped {}", id);
                SelectOutcome::Flipped
            }
        }
    }

    /// Applies a scheduled resolution. Each turn resolves once, never before its delay.
    pub fn resolve(&mut self, ticket: ResolutionTicket, now: Instant) -> ResolveOutcome {
        let Some(pending) = self.pending else {
            return ResolveOutcome::Stale;
        };
        if pending.ticket != ticket {
            log::debug!("ignoring stale resolution {:?}", ticket);
            return ResolveOutcome::Stale;
        }
        if now < pending.due_at {
            return ResolveOutcome::TooEarly(pending.due_at.duration_since(now));
        }

        self.pending = None;
        self.selection = Selection::default();
        match pending.verdict {
            Verdict::Match => ResolveOutcome::Cleared,
            Verdict::Mismatch => ResolveOutcome::Concealed,
        }
    }

    /// Starts over with a freshly shuffled deck.
    pub fn replay(&mut self, seed: u64) {
        self.replay_with(ShuffledDeckGenerator::new(seed));
    }

    pub fn replay_with(&mut self, generator: impl DeckGenerator) {
        self.deck = generator.generate(self.config.pairs);
        self.selection = Selection::default();
        self.matched.clear();
        self.attempts = 0;
        self.started_at = None;
        self.finished_at = None;
        self.completed = false;
        self.pending = None;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("replay, generation {}", self.generation);
    }

    /// Exit control, only available after completion.
    pub fn exit(&mut self) -> bool {
        if self.completed {
            self.notifications.push_back(Notification::ExitClick);
        }
        self.completed
    }

    fn mark_started(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            self.notifications.push_back(Notification::GameStart);
        }
    }

    fn complete_turn(&mut self, first: Tile, second: Tile, now: Instant) -> PendingResolution {
        self.selection.second = Some(second);
        self.attempts = self.attempts.saturating_add(1);

        let verdict = if first.pairs_with(&second) {
            self.matched.insert(first.value());
            self.notifications.push_back(Notification::PairMatch {
                pairs_found: self.pairs_found(),
                attempts: self.attempts,
            });
            log::debug!("matched {} and {}", first.id(), second.id());
            self.check_completed(now);
            Verdict::Match
        } else {
            log::debug!("mismatched {} and {}", first.id(), second.id());
            Verdict::Mismatch
        };

        let delay = match verdict {
            Verdict::Match => self.config.match_delay,
            Verdict::Mismatch => self.config.mismatch_delay,
        };
        let pending = PendingResolution {
            ticket: ResolutionTicket {
                generation: self.generation,
                turn: self.attempts,
            },
            verdict,
            delay,
            due_at: now + delay,
        };
        self.pending = Some(pending);
        pending
    }

    fn check_completed(&mut self, now: Instant) {
        if self.completed || self.pairs_found() < self.config.pairs {
            return;
        }

        self.completed = true;
        self.finished_at = Some(now);
        let time_ms = millis(self.elapsed(now));
        self.notifications.push_back(Notification::GameComplete {
            attempts: self.attempts,
            time_ms,
        });
        log::debug!("completed in {} attempts, {} ms", self.attempts, time_ms);
    }
}
