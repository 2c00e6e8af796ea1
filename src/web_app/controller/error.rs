// web_app/controller/error.rs - Search failure taxonomy

use thiserror::Error;

use crate::web_app::model::{NotifyKind, MSG_EMPTY_QUERY, MSG_FETCH_FAILED, MSG_NO_RESULTS};

/// Every way a search can end without new cards
///
/// None of these are fatal: each one is reported once as a notification and
/// the controller stays usable for the next submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Blank query, rejected before any request
    #[error("empty search query")]
    EmptyQuery,

    /// Well-formed response with zero hits
    #[error("no images matched the query")]
    NoResults,

    /// Network failure, non-success status, malformed body or server function error
    #[error("transport error: {0}")]
    Transport(String),
}

impl SearchError {
    pub fn notify_kind(&self) -> NotifyKind {
        match self {
            SearchError::EmptyQuery => NotifyKind::Warning,
            SearchError::NoResults | SearchError::Transport(_) => NotifyKind::Failure,
        }
    }

    /// Message shown to the user; transport details stay in the logs
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => MSG_EMPTY_QUERY,
            SearchError::NoResults => MSG_NO_RESULTS,
            SearchError::Transport(_) => MSG_FETCH_FAILED,
        }
    }
}
