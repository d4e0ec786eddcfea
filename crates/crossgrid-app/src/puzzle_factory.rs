use std::{fs, path::Path};

use crossgrid_core::WordBank;
use crossgrid_game::PuzzleState;
use crossgrid_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

use crate::error::AppError;

/// Reads a word bank from `path`, or returns the built-in riddles.
pub fn load_bank(path: Option<&Path>) -> Result<WordBank, AppError> {
    let Some(path) = path else {
        return Ok(WordBank::builtin());
    };
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadWords {
        path: path.to_owned(),
        source,
    })?;
    let bank: WordBank = text.parse().map_err(|source| AppError::ParseWords {
        path: path.to_owned(),
        source,
    })?;
    if bank.is_empty() {
        return Err(AppError::EmptyBank {
            path: path.to_owned(),
        });
    }
    log::debug!("loaded {} entries from {}", bank.len(), path.display());
    Ok(bank)
}

/// Produces the puzzles of a session.
///
/// The first puzzle uses the seed given at startup, if any; later ones use
/// fresh random seeds.
#[derive(Debug)]
pub struct PuzzleFactory {
    bank: WordBank,
    config: GeneratorConfig,
    pending_seed: Option<PuzzleSeed>,
}

impl PuzzleFactory {
    #[must_use]
    pub fn new(bank: WordBank, seed: Option<PuzzleSeed>) -> Self {
        Self::with_config(bank, GeneratorConfig::default(), seed)
    }

    #[must_use]
    pub fn with_config(bank: WordBank, config: GeneratorConfig, seed: Option<PuzzleSeed>) -> Self {
        Self {
            bank,
            config,
            pending_seed: seed,
        }
    }

    pub fn next_puzzle(&mut self) -> PuzzleState {
        let seed = self.pending_seed.take().unwrap_or_else(PuzzleSeed::random);
        let generator = PuzzleGenerator::with_config(&self.bank, self.config.clone());
        let puzzle = generator.generate_with_seed(seed);
        log::debug!(
            "new puzzle {seed}: {} words, {} letters",
            puzzle.items.len(),
            puzzle.grid.count_letters()
        );
        PuzzleState::new(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_builtin_bank_without_path() {
        let bank = load_bank(None).unwrap();
        assert_eq!(bank.len(), WordBank::builtin().len());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/nonexistent/crossgrid-words.txt");
        let err = load_bank(Some(path)).unwrap_err();
        assert!(matches!(err, AppError::ReadWords { .. }));
        assert!(err.to_string().contains("crossgrid-words.txt"));
    }

    #[test]
    fn test_word_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("crossgrid-bank-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# animals").unwrap();
        writeln!(file, "кот|Кто мурлычет у окна?").unwrap();
        writeln!(file, "пёс\tКто лает?").unwrap();
        drop(file);

        let bank = load_bank(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        let answers: Vec<_> = bank.iter().map(|entry| entry.answer()).collect();
        assert_eq!(answers, ["КОТ", "ПЁС"]);
    }

    #[test]
    fn test_seed_is_used_once() {
        let seed = PuzzleSeed::from_phrase("factory");
        let mut factory = PuzzleFactory::new(WordBank::builtin(), Some(seed));
        let first = factory.next_puzzle();
        assert_eq!(first.seed(), Some(seed));
        let second = factory.next_puzzle();
        assert_ne!(second.seed(), Some(seed));
    }
}
