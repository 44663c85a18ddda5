//! Deck shuffling and the random source seam.

use rand::{Rng, RngCore};

/// A source of uniform values in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a source, which keeps shuffles
/// reproducible in tests:
///
/// ```
/// use twentyone::{Rank, shuffle};
///
/// let cards = [Rank::Ace, Rank::Two, Rank::Three];
/// let mut never_swap = || 0.999;
/// assert_eq!(shuffle(&cards, &mut never_swap), cards);
/// ```
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapts a [`rand`] generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct UniformSource<R>(pub R);

impl<R: RngCore> RandomSource for UniformSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Returns a Fisher-Yates permutation of `cards`, leaving the input untouched.
///
/// Walks `i` from the last index down to 1 and swaps `i` with
/// `floor(next_unit() * (i + 1))`.
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(cards: &[T], random: &mut R) -> Vec<T> {
    let mut shuffled = cards.to_vec();

    for i in (1..shuffled.len()).rev() {
        #[expect(
            clippy::cast_precision_loss,
            reason = "deck indices are far below f64 precision"
        )]
        let j = (random.next_unit() * (i + 1) as f64).floor() as usize;
        shuffled.swap(i, j.min(i));
    }

    shuffled
}
