//! Error types for the quiz

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad class of a [`QuizError`], used to decide how far a failure reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Word list missing, unreadable or empty. Aborts the session before it starts.
    Configuration,
    /// A line of the word list could not be split into two fields.
    DataFormat,
    /// Speech synthesis or audio playback failed. Never fatal.
    ExternalService,
    /// Standard input reached end-of-file while an answer was expected.
    InputClosed,
    /// Console or report file I/O.
    Io,
}

/// Main error type for the quiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("word list '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read word list '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("word list '{}' contains no words", path.display())]
    EmptyWordList { path: PathBuf },

    #[error("{}:{line}: expected two fields separated by '{delimiter}'", origin.display())]
    DataFormat {
        origin: PathBuf,
        line: usize,
        delimiter: char,
    },

    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("audio playback failed: {0}")]
    Playback(String),

    #[error("input closed while waiting for an answer")]
    InputClosed,

    #[error("failed to write report '{}': {source}", path.display())]
    Report { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl QuizError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuizError::NotFound { .. } | QuizError::Read { .. } | QuizError::EmptyWordList { .. } => {
                ErrorCategory::Configuration
            }
            QuizError::DataFormat { .. } => ErrorCategory::DataFormat,
            QuizError::Synthesis(_) | QuizError::Playback(_) => ErrorCategory::ExternalService,
            QuizError::InputClosed => ErrorCategory::InputClosed,
            QuizError::Report { .. } | QuizError::Io(_) => ErrorCategory::Io,
        }
    }

    /// Whether the failure only affects the current word list, so remaining
    /// lists can still be quizzed.
    pub fn is_session_local(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Configuration | ErrorCategory::DataFormat
        )
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;
