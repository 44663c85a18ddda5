//! Card ranks, point values, and deck construction.

use core::fmt;

/// A card rank. Suits are not modeled: only the rank contributes points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in deck cycle order: A, 2 through 10, J, Q, K.
    pub const ALL: [Self; RANKS] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the point values this rank may contribute to a hand.
    ///
    /// Every set is non-empty and ordered; only the ace has more than one
    /// admissible value.
    ///
    /// ```
    /// use twentyone::Rank;
    ///
    /// assert_eq!(Rank::Ace.points(), &[1, 11]);
    /// assert_eq!(Rank::Queen.points(), &[10]);
    /// ```
    #[must_use]
    pub const fn points(self) -> &'static [u8] {
        match self {
            Self::Ace => &[1, 11],
            Self::Two => &[2],
            Self::Three => &[3],
            Self::Four => &[4],
            Self::Five => &[5],
            Self::Six => &[6],
            Self::Seven => &[7],
            Self::Eight => &[8],
            Self::Nine => &[9],
            Self::Ten | Self::Jack | Self::Queen | Self::King => &[10],
        }
    }

    /// Returns the short label printed for this rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of distinct ranks.
pub const RANKS: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS * 4;

/// Builds the unshuffled deck: the rank cycle repeated four times.
#[must_use]
pub fn deck() -> Vec<Rank> {
    Rank::ALL
        .iter()
        .copied()
        .cycle()
        .take(DECK_SIZE)
        .collect()
}
