use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes puzzle generation reproducible.
///
/// Seeds are written as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use crossgrid_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("кроссворд");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), crossgrid_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from a free-form phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the PCG generator driven by this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex digits, found {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// Zero-based character offset.
        offset: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        for (offset, ch) in s.chars().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let nibble = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { offset, ch })? as u8;
            bytes[offset / 2] |= if offset % 2 == 0 { nibble << 4 } else { nibble };
        }
        Ok(Self(bytes))
    }
}

impl serde::Serialize for PuzzleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
