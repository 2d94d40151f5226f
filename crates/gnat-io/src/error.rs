//! Error types for the IO layer

use thiserror::Error;

/// Result type for IO operations
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors that can occur while reading inputs or writing edges
#[derive(Error, Debug)]
pub enum IoError {
    /// A line of an input file could not be parsed
    #[error("Parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// A record referenced a neuron outside the declared population
    #[error(transparent)]
    Domain(#[from] gnat_core::CoreError),

    /// Underlying I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        /// Source I/O error
        source: std::io::Error,
    },
}

impl IoError {
    /// Create a parse error for a given 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
