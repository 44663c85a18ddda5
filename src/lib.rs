//! A turn-by-turn Player vs Dealer twenty-one scoring game.
//!
//! One shuffled deck is split into two hands at the start of a game. Each
//! turn puts one more card of each hand in play, scores both hands with aces
//! counted as 1 or 11, and ends the game as soon as either hand is bust or
//! at 21. While both hands are live the user decides whether to continue.
//!
//! # Example
//!
//! ```
//! use twentyone::{EndReason, Game, GameOptions};
//!
//! let mut game = Game::new(&GameOptions::default().with_seed(42));
//! let mut stop = |_: &str| -> std::io::Result<String> { Ok("q".into()) };
//! let mut output = Vec::new();
//!
//! let reason = game.run(&mut stop, &mut output).unwrap();
//! assert_ne!(reason, EndReason::DeckExhausted);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shuffle;

// Re-export main types
pub use card::{DECK_SIZE, Rank, deck};
pub use console::{HIT_QUESTION, Prompt, StdinPrompt};
pub use error::GameError;
pub use game::{EndReason, FAREWELL, Game, GameState};
pub use hand::{Hands, Role, TWENTY_ONE, score};
pub use options::GameOptions;
pub use result::{Judgement, RoundResult, Verdict, judge};
pub use shuffle::{RandomSource, UniformSource, shuffle};
