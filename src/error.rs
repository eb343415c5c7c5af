//! Errors that can appear while loading, validating and rendering grammars.

use std::path::PathBuf;
use thiserror::Error;

/// Loading a grammar file failed.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// The file that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// The loaded productions do not form a well-formed grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// Two productions share a name
    #[error("The production '{0}' is defined more than once")]
    DuplicateProduction(String),

    /// A non-terminal references a production that does not exist
    #[error("The non-terminal '{0}' is referenced but never defined")]
    MissingProduction(String),

    /// A choice without any branches
    #[error("The production '{0}' contains a choice without alternatives")]
    EmptyAlternation(String),

    /// A sequence without any items
    #[error("The production '{0}' contains an empty sequence")]
    EmptySequence(String),

    /// A repetition whose upper bound is below its lower bound
    #[error("The production '{production}' repeats between {min} and {max} times")]
    InvalidRepetition {
        /// Production containing the repetition
        production: String,
        /// Lower bound
        min: usize,
        /// Upper bound
        max: usize,
    },
}

/// Writing a grammar with one of the [`backends`](crate::backends) failed.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output stream rejected a write
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A term cannot be expressed in the target format
    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    /// The grammar could not be serialized
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
