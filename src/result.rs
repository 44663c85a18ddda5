//! Verdicts for a single turn.

use core::fmt;

use crate::hand::{Role, TWENTY_ONE};

/// Classification of one hand's score at one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No combination of values stays at or below 21.
    Bust,
    /// The best total is exactly 21.
    BlackJack,
    /// The best total is below 21 and play may continue.
    Live(u8),
}

impl Verdict {
    /// Returns whether this verdict ends the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Live(_))
    }
}

/// A verdict labelled with the hand it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    /// The hand that was judged.
    pub role: Role,
    /// The outcome for that hand.
    pub verdict: Verdict,
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verdict {
            Verdict::Bust => write!(f, "{} Bust !", self.role),
            Verdict::BlackJack => write!(f, "{} Black Jack !", self.role),
            Verdict::Live(score) => write!(f, "{}: {score}", self.role),
        }
    }
}

/// Classifies a score for `role`.
///
/// ```
/// use twentyone::{Role, Verdict, judge};
///
/// assert_eq!(judge(None, Role::Player).verdict, Verdict::Bust);
/// assert_eq!(judge(Some(21), Role::Player).verdict, Verdict::BlackJack);
/// assert_eq!(judge(Some(17), Role::Dealer).verdict, Verdict::Live(17));
/// ```
#[must_use]
pub fn judge(score: Option<u8>, role: Role) -> Judgement {
    let verdict = match score {
        None => Verdict::Bust,
        Some(TWENTY_ONE) => Verdict::BlackJack,
        Some(score) => Verdict::Live(score),
    };

    Judgement { role, verdict }
}

/// Both verdicts for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The turn these verdicts were computed for.
    pub turn: usize,
    /// The player's verdict.
    pub player: Judgement,
    /// The dealer's verdict.
    pub dealer: Judgement,
}

impl RoundResult {
    /// Returns whether both hands are still live.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !self.player.verdict.is_terminal() && !self.dealer.verdict.is_terminal()
    }

    /// Returns the verdicts that end the game, player first.
    pub fn terminal(&self) -> impl Iterator<Item = &Judgement> {
        [&self.player, &self.dealer]
            .into_iter()
            .filter(|judgement| judgement.verdict.is_terminal())
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {} -- {}, {}", self.turn, self.player, self.dealer)
    }
}
