//! Game engine and the turn loop.

use std::io::{self, Write};

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Rank, deck};
use crate::console::{HIT_QUESTION, Prompt};
use crate::error::GameError;
use crate::hand::{Hands, Role, score};
use crate::options::GameOptions;
use crate::result::{RoundResult, judge};
use crate::shuffle::{RandomSource, UniformSource, shuffle};

pub mod state;

pub use state::{EndReason, GameState};

/// Line written when the user declines to continue.
pub const FAREWELL: &str = "See you !";

/// Line written when a hand has no cards left for the next turn.
pub const DECK_EXHAUSTED: &str = "No cards left.";

/// A single game: one shuffled deck, two hands, and a turn counter.
///
/// The deck and hands are fixed at construction. Every turn rescores both
/// hands from scratch using the first `turn + 2` cards of each.
#[derive(Debug, Clone)]
pub struct Game {
    /// The shuffled deck.
    deck: Vec<Rank>,
    /// Hands dealt from the deck.
    hands: Hands,
    /// Current game state.
    state: GameState,
    /// Seed used for the shuffle, when the game was seeded.
    seed: Option<u64>,
}

impl Game {
    /// Creates a game shuffled from the configured seed, or from a fresh
    /// random seed when none is set.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(&GameOptions::default().with_seed(42));
    /// assert_eq!(game.seed(), Some(42));
    /// assert_eq!(game.deck().len(), twentyone::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        debug!("Shuffling with seed {seed}");

        let mut random = UniformSource(ChaCha8Rng::seed_from_u64(seed));
        Self {
            seed: Some(seed),
            ..Self::with_source(&mut random)
        }
    }

    /// Creates a game shuffled by the given random source.
    #[must_use]
    pub fn with_source<R: RandomSource + ?Sized>(random: &mut R) -> Self {
        Self::from_shuffled(shuffle(&deck(), random))
    }

    /// Creates a game from an already shuffled deck.
    #[must_use]
    pub fn from_shuffled(deck: Vec<Rank>) -> Self {
        let hands = Hands::deal(&deck);

        Self {
            deck,
            hands,
            state: GameState::Playing(0),
            seed: None,
        }
    }

    /// Returns the seed the deck was shuffled with, if known.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the shuffled deck, kept for inspecting or replaying a game.
    #[must_use]
    pub fn deck(&self) -> &[Rank] {
        &self.deck
    }

    /// Returns the dealt hands.
    #[must_use]
    pub const fn hands(&self) -> &Hands {
        &self.hands
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Scores and judges both hands at `turn`.
    ///
    /// Returns `None` if either hand holds fewer than `turn + 2` cards.
    #[must_use]
    pub fn evaluate(&self, turn: usize) -> Option<RoundResult> {
        let player = self.hands.at_turn(Role::Player, turn)?;
        let dealer = self.hands.at_turn(Role::Dealer, turn)?;

        Some(RoundResult {
            turn,
            player: judge(score(player), Role::Player),
            dealer: judge(score(dealer), Role::Dealer),
        })
    }

    /// Advances the game by one turn and returns the new state.
    ///
    /// A turn where either hand is bust or at 21 writes the first deciding
    /// verdict, player before dealer, and ends the game without prompting.
    /// Otherwise both scores are written and the user is asked whether to
    /// hit: an empty answer moves to the next turn, anything else (or a
    /// closed input) ends the game. Stepping an ended game returns its state
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt or the output fails.
    pub fn step<P, W>(&mut self, prompt: &mut P, output: &mut W) -> Result<GameState, GameError>
    where
        P: Prompt + ?Sized,
        W: Write + ?Sized,
    {
        let GameState::Playing(turn) = self.state else {
            return Ok(self.state);
        };

        let Some(round) = self.evaluate(turn) else {
            writeln!(output, "{DECK_EXHAUSTED}").map_err(GameError::Output)?;
            return Ok(self.end(EndReason::DeckExhausted));
        };
        debug!("{round}");

        let deciding = round.terminal().find_map(|judgement| {
            EndReason::from_judgement(judgement).map(|reason| (judgement, reason))
        });
        if let Some((judgement, reason)) = deciding {
            writeln!(output, "{judgement}").map_err(GameError::Output)?;
            return Ok(self.end(reason));
        }

        writeln!(output, "{round}").map_err(GameError::Output)?;

        let declined = match prompt.ask(HIT_QUESTION) {
            Ok(answer) => !answer.is_empty(),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Prompt input closed");
                true
            }
            Err(err) => return Err(GameError::Prompt(err)),
        };

        if declined {
            writeln!(output, "{FAREWELL}").map_err(GameError::Output)?;
            return Ok(self.end(EndReason::UserDeclined));
        }

        self.state = GameState::Playing(turn + 1);
        Ok(self.state)
    }

    /// Plays turns until the game ends and returns why it ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt or the output fails.
    pub fn run<P, W>(&mut self, prompt: &mut P, output: &mut W) -> Result<EndReason, GameError>
    where
        P: Prompt + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            if let GameState::Ended(reason) = self.step(prompt, output)? {
                return Ok(reason);
            }
        }
    }

    fn end(&mut self, reason: EndReason) -> GameState {
        info!("Game ended: {reason:?}");
        self.state = GameState::Ended(reason);
        self.state
    }
}
