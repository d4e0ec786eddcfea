use std::ops::RangeInclusive;

/// Tuning knobs for [`PuzzleGenerator`](crate::PuzzleGenerator).
///
/// The defaults reproduce the classic game: 6 to 9 words of at least three
/// letters, 50 random fallback tries per word, 40 whole attempts, and at least
/// 18 letters on an accepted grid.
///
/// # Examples
///
/// ```
/// use crossgrid_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .word_count(4..=5)
///     .min_letters(12);
/// assert_eq!((config.min_words, config.max_words), (4, 5));
/// assert_eq!(config.max_attempts, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fewest words an attempt selects.
    pub min_words: usize,
    /// Most words an attempt selects.
    pub max_words: usize,
    /// Shortest answer eligible for selection.
    pub min_answer_len: usize,
    /// Random positions tried for a word without an intersection.
    pub fallback_tries: usize,
    /// Whole attempts made before giving up.
    pub max_attempts: usize,
    /// Letters an attempt must reach to be accepted.
    pub min_letters: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_words: 6,
            max_words: 9,
            min_answer_len: 3,
            fallback_tries: 50,
            max_attempts: 40,
            min_letters: 18,
        }
    }
}

impl GeneratorConfig {
    /// Sets how many words an attempt selects; the count is drawn uniformly
    /// from `range`.
    ///
    /// An empty range is treated as its start.
    #[must_use]
    pub fn word_count(mut self, range: RangeInclusive<usize>) -> Self {
        let (min, max) = range.into_inner();
        self.min_words = min;
        self.max_words = max.max(min);
        self
    }

    /// Sets the shortest answer eligible for selection.
    #[must_use]
    pub fn min_answer_len(mut self, len: usize) -> Self {
        self.min_answer_len = len;
        self
    }

    /// Sets how many random positions are tried for a word without an
    /// intersection.
    #[must_use]
    pub fn fallback_tries(mut self, tries: usize) -> Self {
        self.fallback_tries = tries;
        self
    }

    /// Sets how many whole attempts are made before giving up.
    #[must_use]
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the letter count an attempt must reach to be accepted.
    #[must_use]
    pub fn min_letters(mut self, letters: usize) -> Self {
        self.min_letters = letters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_range_collapses_to_start() {
        let config = GeneratorConfig::default().word_count(5..=2);
        assert_eq!((config.min_words, config.max_words), (5, 5));
    }
}
