// ⚠️ Line-level errors for the arrivals feed
// File-level failures use anyhow; a single bad line gets one of these.

use thiserror::Error;

/// Why one arrivals line was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected at least 8 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("could not tokenize line: {0}")]
    Tokenize(String),

    #[error("unreadable line: {0}")]
    Unreadable(String),

    #[error("invalid age '{0}'")]
    InvalidAge(String),

    #[error("invalid weight '{0}'")]
    InvalidWeight(String),

    #[error("invalid arrival date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl LineError {
    /// Short label for the failure kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            LineError::TooFewFields { .. } => "too_few_fields",
            LineError::Tokenize(_) => "tokenize",
            LineError::Unreadable(_) => "unreadable",
            LineError::InvalidAge(_) => "number",
            LineError::InvalidWeight(_) => "number",
            LineError::InvalidDate(_) => "date",
        }
    }
}
