//! Game state types.

use crate::hand::Role;
use crate::result::{Judgement, Verdict};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting to evaluate the given turn.
    Playing(usize),
    /// The game is over.
    Ended(EndReason),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player went over 21.
    PlayerBust,
    /// The player reached exactly 21.
    PlayerBlackJack,
    /// The dealer went over 21.
    DealerBust,
    /// The dealer reached exactly 21.
    DealerBlackJack,
    /// The user chose not to continue.
    UserDeclined,
    /// A hand ran out of cards.
    DeckExhausted,
}

impl EndReason {
    /// Maps a terminal verdict to its end reason.
    ///
    /// Returns `None` for a live verdict.
    #[must_use]
    pub const fn from_judgement(judgement: &Judgement) -> Option<Self> {
        match (judgement.role, judgement.verdict) {
            (Role::Player, Verdict::Bust) => Some(Self::PlayerBust),
            (Role::Player, Verdict::BlackJack) => Some(Self::PlayerBlackJack),
            (Role::Dealer, Verdict::Bust) => Some(Self::DealerBust),
            (Role::Dealer, Verdict::BlackJack) => Some(Self::DealerBlackJack),
            (_, Verdict::Live(_)) => None,
        }
    }
}
