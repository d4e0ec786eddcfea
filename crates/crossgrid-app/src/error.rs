use std::{io, path::PathBuf};

use crossgrid_core::WordBankError;

/// Errors reported by the `crossgrid` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("failed to read word file {}: {source}", path.display())]
    ReadWords { path: PathBuf, source: io::Error },
    #[display("invalid word file {}: {source}", path.display())]
    ParseWords {
        path: PathBuf,
        source: WordBankError,
    },
    #[display("word file {} has no usable entries", path.display())]
    EmptyBank { path: PathBuf },
    #[display("terminal I/O failed: {_0}")]
    #[from]
    Io(io::Error),
    #[display("failed to write JSON: {_0}")]
    #[from]
    Json(serde_json::Error),
}
