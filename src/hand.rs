//! Player and dealer hands, and hand scoring.

use std::collections::BTreeSet;

use core::fmt;

use crate::card::Rank;

/// Highest valid hand total.
pub const TWENTY_ONE: u8 = 21;

/// Number of cards each hand holds at turn 0.
pub const INITIAL_CARDS: usize = 2;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The player, dealt the odd positions of the shuffled deck.
    Player,
    /// The dealer, dealt the even positions of the shuffled deck.
    Dealer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

/// The two hands split out of a shuffled deck.
///
/// Hands never change after the deal. A turn only decides how long a prefix
/// of each hand is in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hands {
    player: Vec<Rank>,
    dealer: Vec<Rank>,
}

impl Hands {
    /// Splits a shuffled deck: the player takes odd indices and the dealer
    /// takes even indices, both in deck order.
    ///
    /// ```
    /// use twentyone::{Hands, Rank, Role};
    ///
    /// let hands = Hands::deal(&[Rank::Ace, Rank::Two, Rank::Three]);
    /// assert_eq!(hands.cards(Role::Player), &[Rank::Two]);
    /// assert_eq!(hands.cards(Role::Dealer), &[Rank::Ace, Rank::Three]);
    /// ```
    #[must_use]
    pub fn deal(deck: &[Rank]) -> Self {
        let (dealer, player): (Vec<_>, Vec<_>) = deck
            .iter()
            .enumerate()
            .partition(|(index, _)| index % 2 == 0);

        Self {
            player: player.into_iter().map(|(_, &card)| card).collect(),
            dealer: dealer.into_iter().map(|(_, &card)| card).collect(),
        }
    }

    /// Returns every card dealt to `role`.
    #[must_use]
    pub fn cards(&self, role: Role) -> &[Rank] {
        match role {
            Role::Player => &self.player,
            Role::Dealer => &self.dealer,
        }
    }

    /// Returns the cards in play for `role` at `turn`: the first `turn + 2`.
    ///
    /// Returns `None` when the hand holds fewer cards than the turn needs.
    #[must_use]
    pub fn at_turn(&self, role: Role, turn: usize) -> Option<&[Rank]> {
        self.cards(role).get(..turn.checked_add(INITIAL_CARDS)?)
    }

    /// Returns the last turn both hands can play.
    #[must_use]
    pub fn last_turn(&self) -> Option<usize> {
        self.player
            .len()
            .min(self.dealer.len())
            .checked_sub(INITIAL_CARDS)
    }
}

/// Returns the best total not exceeding 21, or `None` if the hand is bust.
///
/// Every attainable total is enumerated, one admissible value per card.
/// Totals above 21 are dropped as soon as they appear, since later cards
/// only add points, so the set never holds more than 22 entries.
///
/// ```
/// use twentyone::{Rank, score};
///
/// assert_eq!(score(&[Rank::Ace, Rank::Ace]), Some(12));
/// assert_eq!(score(&[Rank::King, Rank::Queen, Rank::Two]), None);
/// ```
#[must_use]
pub fn score(cards: &[Rank]) -> Option<u8> {
    let totals = cards
        .iter()
        .map(|card| card.points())
        .fold(BTreeSet::from([0_u8]), |totals, points| {
            totals
                .iter()
                .flat_map(|&total| points.iter().map(move |&point| total + point))
                .filter(|&total| total <= TWENTY_ONE)
                .collect()
        });

    totals.last().copied()
}
