//! Riddle/answer pairs and the bank they are drawn from.

use std::{slice, str::FromStr};

use crate::riddles::RIDDLES;

/// A single answer together with the riddle that clues it.
///
/// The answer is stored both as text and as a sequence of letters; lengths and
/// offsets always count letters, never bytes.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{WordEntry, WordEntryError};
///
/// let entry = WordEntry::new("ЛУНА", "Ночная спутница Земли.")?;
/// assert_eq!(entry.len(), 4);
/// assert_eq!(entry.letters()[1], 'У');
///
/// assert!(matches!(
///     WordEntry::new("луна", "Ночная спутница Земли."),
///     Err(WordEntryError::Lowercase { .. })
/// ));
/// # Ok::<(), WordEntryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct WordEntry {
    answer: String,
    #[serde(skip)]
    letters: Vec<char>,
    clue: String,
}

/// Errors returned by [`WordEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordEntryError {
    /// The answer has no letters.
    #[display("answer is empty")]
    EmptyAnswer,
    /// The answer contains something other than a letter.
    #[display("answer {answer:?} contains non-letter {ch:?}")]
    NonLetter {
        /// The rejected answer.
        answer: String,
        /// The first offending character.
        ch: char,
    },
    /// The answer contains a lowercase letter.
    #[display("answer {answer:?} contains lowercase letter {ch:?}")]
    Lowercase {
        /// The rejected answer.
        answer: String,
        /// The first offending character.
        ch: char,
    },
    /// The clue is blank.
    #[display("clue for {answer:?} is empty")]
    EmptyClue {
        /// The answer whose clue is missing.
        answer: String,
    },
}

impl WordEntry {
    /// Creates an entry after validating the answer and the clue.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is empty, contains a non-letter or a
    /// lowercase letter, or if the clue is blank.
    pub fn new(answer: impl Into<String>, clue: impl Into<String>) -> Result<Self, WordEntryError> {
        let answer = answer.into();
        let clue = clue.into();

        if answer.is_empty() {
            return Err(WordEntryError::EmptyAnswer);
        }
        if let Some(ch) = answer.chars().find(|ch| !ch.is_alphabetic()) {
            return Err(WordEntryError::NonLetter { answer, ch });
        }
        if let Some(ch) = answer.chars().find(|ch| ch.is_lowercase()) {
            return Err(WordEntryError::Lowercase { answer, ch });
        }
        if clue.trim().is_empty() {
            return Err(WordEntryError::EmptyClue { answer });
        }

        let letters = answer.chars().collect();
        Ok(Self {
            answer,
            letters,
            clue,
        })
    }

    /// Returns the answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the answer as letters.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the riddle.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the number of letters in the answer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; an entry cannot have an empty answer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// An ordered, read-only collection of [`WordEntry`] values.
///
/// # Text format
///
/// A bank can be parsed from text with one entry per line, the answer and the
/// clue separated by the first `|` or tab. Blank lines and lines starting with
/// `#` are skipped, and answers are uppercased on load.
///
/// ```
/// use crossgrid_core::WordBank;
///
/// let bank: WordBank = "\
/// ## animals
/// кот | Кто мурлычет у окна?
/// рыба\tОбитатель воды с плавниками.
/// ".parse()?;
/// assert_eq!(bank.len(), 2);
/// assert_eq!(bank.entries()[0].answer(), "КОТ");
/// assert_eq!(bank.entries()[0].clue(), "Кто мурлычет у окна?");
/// # Ok::<(), crossgrid_core::WordBankError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct WordBank {
    entries: Vec<WordEntry>,
}

/// Errors returned when parsing a [`WordBank`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordBankError {
    /// A line has no `|` or tab between answer and clue.
    #[display("line {line}: missing separator between answer and clue")]
    MissingSeparator {
        /// One-based line number.
        line: usize,
    },
    /// A line holds an invalid entry.
    #[display("line {line}: {source}")]
    InvalidEntry {
        /// One-based line number.
        line: usize,
        /// What was wrong with the entry.
        source: WordEntryError,
    },
}

impl WordBank {
    /// Creates a bank from already validated entries.
    #[must_use]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Returns the built-in bank of thirty Russian riddles.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossgrid_core::WordBank;
    ///
    /// let bank = WordBank::builtin();
    /// assert_eq!(bank.len(), 30);
    /// assert!(bank.iter().all(|entry| entry.len() >= 3));
    /// ```
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn builtin() -> Self {
        let entries = RIDDLES
            .iter()
            .map(|&(answer, clue)| WordEntry::new(answer, clue).expect("built-in riddles are valid"))
            .collect();
        Self { entries }
    }

    /// Returns the entries in bank order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Iterates over the entries in bank order.
    pub fn iter(&self) -> slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bank has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a WordEntry;
    type IntoIter = slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<WordEntry> for WordBank {
    fn from_iter<T: IntoIterator<Item = WordEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for WordBank {
    type Err = WordBankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = vec![];
        for (i, raw) in s.lines().enumerate() {
            let line = i + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let (answer, clue) = text
                .split_once(['|', '\t'])
                .ok_or(WordBankError::MissingSeparator { line })?;
            let entry = WordEntry::new(answer.trim().to_uppercase(), clue.trim())
                .map_err(|source| WordBankError::InvalidEntry { line, source })?;
            entries.push(entry);
        }
        Ok(Self::new(entries))
    }
}
