/// How a player's entry compares with the expected letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// The entry matches.
    Correct,
    /// The entry is a different letter.
    Incorrect,
    /// Nothing has been entered.
    Empty,
}

/// Compares an entered letter with the expected one.
///
/// Letters are compared after uppercasing, so `'к'` is a correct entry for
/// `'К'`.
///
/// # Examples
///
/// ```
/// use crossgrid_game::{EntryStatus, validate_entry};
///
/// assert_eq!(validate_entry('К', Some('к')), EntryStatus::Correct);
/// assert_eq!(validate_entry('К', Some('Т')), EntryStatus::Incorrect);
/// assert_eq!(validate_entry('К', None), EntryStatus::Empty);
/// ```
#[must_use]
pub fn validate_entry(expected: char, entered: Option<char>) -> EntryStatus {
    match entered {
        None => EntryStatus::Empty,
        Some(entered) if uppercase(entered) == uppercase(expected) => EntryStatus::Correct,
        Some(_) => EntryStatus::Incorrect,
    }
}

/// Turns raw cell input into the letter to store.
///
/// The input is uppercased and stripped of everything but letters; the last
/// remaining letter wins, as when typing over a single-letter cell. Returns
/// `None` when no letter is left, which clears the cell.
///
/// # Examples
///
/// ```
/// use crossgrid_game::normalize_entry;
///
/// assert_eq!(normalize_entry("ё"), Some('Ё'));
/// assert_eq!(normalize_entry(" к1 "), Some('К'));
/// assert_eq!(normalize_entry("ат"), Some('Т'));
/// assert_eq!(normalize_entry("7"), None);
/// assert_eq!(normalize_entry(""), None);
/// ```
#[must_use]
pub fn normalize_entry(input: &str) -> Option<char> {
    input
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .map(uppercase)
        .last()
}

fn uppercase(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry_latin_and_cyrillic() {
        assert!(validate_entry('A', Some('a')).is_correct());
        assert!(validate_entry('Ё', Some('ё')).is_correct());
        assert!(validate_entry('Е', Some('Ё')).is_incorrect());
        // Cyrillic 'С' and Latin 'C' look alike but differ.
        assert!(validate_entry('С', Some('C')).is_incorrect());
        assert!(validate_entry('С', None).is_empty());
    }

    #[test]
    fn test_normalize_entry_strips_non_letters() {
        assert_eq!(normalize_entry("--"), None);
        assert_eq!(normalize_entry("\tд\n"), Some('Д'));
        assert_eq!(normalize_entry("a"), Some('A'));
    }
}
