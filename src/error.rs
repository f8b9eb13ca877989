use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading the question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot read question file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question file: {0}")]
    Csv(#[from] csv::Error),
    #[error("question file is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: `Right Answer` must be one of A, B, C, D (found `{value}`)")]
    InvalidAnswer { row: usize, value: String },
    #[error("question file contains no questions")]
    Empty,
}

/// Errors raised while reading the optional reference document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    #[error("no reference document configured")]
    NotConfigured,
    #[error("cannot read reference document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
