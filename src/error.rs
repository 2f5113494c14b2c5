//! Typed errors for the search engine and the grid collaborator.
//!
//! Contract violations are errors; a search that merely finds no path is
//! not (it reports a plain unsuccessful outcome instead).

use std::fmt;

/// Failure of a frontier or engine contract.
///
/// These are caller defects, never data-dependent outcomes: an unreachable
/// goal produces an unsuccessful [`SearchOutcome`](crate::search::SearchOutcome),
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A beam frontier was constructed with width zero.
    InvalidWidth { width: usize },
    /// `pop` was invoked with no live entry remaining. Callers must check
    /// `is_empty` first; this is never a control-flow signal.
    EmptyFrontierPop,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(f, "beam width must be positive, got {width}")
            }
            Self::EmptyFrontierPop => write!(f, "pop called on an empty frontier"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Failure to obtain a usable grid from an input source.
#[derive(Debug)]
pub enum GridError {
    /// No `A` cell in the input.
    MissingStart,
    /// No `B` cell in the input.
    MissingGoal,
    /// More than one `A` cell in the input.
    MultipleStarts { count: usize },
    /// More than one `B` cell in the input.
    MultipleGoals { count: usize },
    /// Underlying file read/write failure.
    Io(std::io::Error),
    /// Malformed JSON grid file.
    Json(serde_json::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "grid needs a single start cell 'A', found none"),
            Self::MissingGoal => write!(f, "grid needs a single goal cell 'B', found none"),
            Self::MultipleStarts { count } => {
                write!(f, "grid needs a single start cell 'A', found {count}")
            }
            Self::MultipleGoals { count } => {
                write!(f, "grid needs a single goal cell 'B', found {count}")
            }
            Self::Io(e) => write!(f, "grid io failure: {e}"),
            Self::Json(e) => write!(f, "grid json failure: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(e: std::io::Error) -> Self {
        GridError::Io(e)
    }
}

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        GridError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_messages_name_the_contract() {
        let msg = SearchError::InvalidWidth { width: 0 }.to_string();
        assert!(msg.contains("beam width"));
        assert!(msg.contains('0'));

        let msg = SearchError::EmptyFrontierPop.to_string();
        assert!(msg.contains("empty frontier"));
    }

    #[test]
    fn grid_error_reports_endpoint_counts() {
        let msg = GridError::MultipleStarts { count: 3 }.to_string();
        assert!(msg.contains('3'));
        assert!(GridError::MissingGoal.to_string().contains('B'));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: GridError = io.into();
        assert!(matches!(err, GridError::Io(_)));
    }
}
