//! Game configuration options.

/// Configuration options for a game.
///
/// Rules are fixed; the only knob is the seed of the shuffle.
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default().with_seed(42);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameOptions {
    /// Seed for the shuffle. A random seed is drawn when unset.
    pub seed: Option<u64>,
}

impl GameOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
