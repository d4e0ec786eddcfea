use crossgrid_core::{Grid, WordEntry};
use crossgrid_game::{CluePlacement, PuzzleState};
use crossgrid_generator::PuzzleSeed;

use crate::error::AppError;

/// JSON shape of an exported puzzle.
#[derive(Debug, serde::Serialize)]
pub struct PuzzleExport<'a> {
    pub seed: Option<PuzzleSeed>,
    pub grid: &'a Grid,
    pub items: &'a [WordEntry],
    pub across: &'a [CluePlacement],
    pub down: &'a [CluePlacement],
}

impl<'a> PuzzleExport<'a> {
    #[must_use]
    pub fn new(state: &'a PuzzleState) -> Self {
        Self {
            seed: state.seed(),
            grid: state.grid(),
            items: state.items(),
            across: state.clues().across(),
            down: state.clues().down(),
        }
    }
}

pub fn to_json(state: &PuzzleState) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&PuzzleExport::new(state))?)
}
