//! A single generation attempt: word selection and placement.

use crossgrid_core::{GRID_SIZE, Grid, Orientation, Position, WordBank, WordEntry};

use crate::{
    GeneratorConfig,
    random::{RandomSource, shuffle},
};

/// Where a word was written on the grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Placement {
    /// The placed entry.
    pub word: WordEntry,
    /// Cell holding the first letter.
    pub start: Position,
    /// Direction the word runs in.
    pub orientation: Orientation,
}

/// Grid and words produced by one attempt, accepted or not.
#[derive(Debug, Default)]
pub(crate) struct Attempt {
    pub(crate) grid: Grid,
    pub(crate) placements: Vec<Placement>,
}

impl Attempt {
    fn commit(&mut self, word: &WordEntry, start: Position, orientation: Orientation) {
        log::trace!("placing {} at {start:?} {orientation}", word.answer());
        self.grid.place(word.letters(), start, orientation);
        self.placements.push(Placement {
            word: word.clone(),
            start,
            orientation,
        });
    }
}

/// Runs one attempt.
///
/// The first selected word goes horizontally in the middle row. Every other
/// word is placed across an existing letter when possible and at a random
/// free spot otherwise. The first word that cannot be placed ends the attempt.
pub(crate) fn run_attempt<R>(bank: &WordBank, config: &GeneratorConfig, source: &mut R) -> Attempt
where
    R: RandomSource + ?Sized,
{
    let selected = select_words(bank, config, source);
    let mut attempt = Attempt::default();

    let Some((first, rest)) = selected.split_first() else {
        return attempt;
    };
    let start = centered_start(first.len());
    if !attempt
        .grid
        .can_place(first.letters(), start, Orientation::Horizontal)
    {
        log::trace!("{} does not fit the grid", first.answer());
        return attempt;
    }
    attempt.commit(first, start, Orientation::Horizontal);

    for word in rest {
        let spot = pick_intersection(&attempt.grid, word.letters(), source).or_else(|| {
            find_free_spot(
                &attempt.grid,
                word.letters(),
                config.fallback_tries,
                source,
            )
        });
        let Some((start, orientation)) = spot else {
            log::trace!(
                "no room for {}, dropping the remaining words",
                word.answer()
            );
            break;
        };
        attempt.commit(word, start, orientation);
    }

    attempt
}

/// Shuffles the bank and keeps the first `K` eligible entries, `K` drawn
/// uniformly from the configured word count range.
pub(crate) fn select_words<'a, R>(
    bank: &'a WordBank,
    config: &GeneratorConfig,
    source: &mut R,
) -> Vec<&'a WordEntry>
where
    R: RandomSource + ?Sized,
{
    let mut shuffled: Vec<&WordEntry> = bank.iter().collect();
    shuffle(source, &mut shuffled);

    let span = config.max_words.saturating_sub(config.min_words) + 1;
    let count = config.min_words + source.index(span);

    shuffled
        .into_iter()
        .filter(|word| word.len() >= config.min_answer_len)
        .take(count)
        .collect()
}

/// Start of a horizontal word of `len` letters centered on the middle row.
pub(crate) fn centered_start(len: usize) -> Position {
    Position::new(GRID_SIZE / 2, GRID_SIZE.saturating_sub(len) / 2)
}

/// Lists every placement of `word` that crosses an existing letter.
///
/// Letter cells are visited in row-major order; for each matching offset in
/// `word` the horizontal candidate comes before the vertical one. The same
/// spot can appear more than once when it shares several letters.
pub(crate) fn intersection_candidates(grid: &Grid, word: &[char]) -> Vec<(Position, Orientation)> {
    let mut candidates = vec![];
    for (pos, letter) in grid.letters() {
        for (offset, _) in word.iter().enumerate().filter(|(_, l)| **l == letter) {
            if let Some(col) = pos.col.checked_sub(offset) {
                let start = Position::new(pos.row, col);
                if grid.can_place(word, start, Orientation::Horizontal) {
                    candidates.push((start, Orientation::Horizontal));
                }
            }
            if let Some(row) = pos.row.checked_sub(offset) {
                let start = Position::new(row, pos.col);
                if grid.can_place(word, start, Orientation::Vertical) {
                    candidates.push((start, Orientation::Vertical));
                }
            }
        }
    }
    candidates
}

fn pick_intersection<R>(grid: &Grid, word: &[char], source: &mut R) -> Option<(Position, Orientation)>
where
    R: RandomSource + ?Sized,
{
    let candidates = intersection_candidates(grid, word);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[source.index(candidates.len())])
}

/// Tries up to `tries` uniformly random spots and returns the first that fits.
fn find_free_spot<R>(
    grid: &Grid,
    word: &[char],
    tries: usize,
    source: &mut R,
) -> Option<(Position, Orientation)>
where
    R: RandomSource + ?Sized,
{
    (0..tries).find_map(|_| {
        let orientation = if source.flip() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = source.index(GRID_SIZE);
        let col = source.index(GRID_SIZE);
        let start = Position::new(row, col);
        grid.can_place(word, start, orientation)
            .then_some((start, orientation))
    })
}
