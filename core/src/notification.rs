use serde::{Deserialize, Serialize};

use crate::*;

/// Outbound events for observers of a session, such as analytics or the page hosting the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Notification {
    /// First accepted selection of a fresh session.
    GameStart,
    #[serde(rename_all = "camelCase")]
    PairMatch {
        pairs_found: PairCount,
        attempts: AttemptCount,
    },
    #[serde(rename_all = "camelCase")]
    GameComplete {
        attempts: AttemptCount,
        time_ms: u64,
    },
    /// Player left through the exit control shown after completion.
    ExitClick,
}

impl Notification {
    /// Name of the DOM event this notification is published as.
    pub const fn event_name(&self) -> &'static str {
        use Notification::*;
        match self {
            GameStart => "bm_game_start",
            PairMatch { .. } => "bm_pair_match",
            GameComplete { .. } => "bm_game_complete",
            ExitClick => "bm_exit_click",
        }
    }

    pub const fn has_detail(&self) -> bool {
        matches!(self, Self::PairMatch { .. } | Self::GameComplete { .. })
    }
}
