//! Round configuration options.

/// Configuration options for a round.
///
/// Game rules are fixed; the options only control where the shuffle's
/// randomness comes from.
///
/// ```
/// use bjcli::RoundOptions;
///
/// let options = RoundOptions::default().with_seed(42);
/// assert_eq!(options.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOptions {
    /// Seed for the shuffle. `None` seeds from operating system entropy.
    pub seed: Option<u64>,
}

impl RoundOptions {
    /// Sets a fixed shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clears any fixed seed so the shuffle uses fresh entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_seed(7).with_entropy();
    /// assert_eq!(options.seed, None);
    /// ```
    #[must_use]
    pub const fn with_entropy(mut self) -> Self {
        self.seed = None;
        self
    }
}
