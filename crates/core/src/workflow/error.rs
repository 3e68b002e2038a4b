//! Workflow error types for the purchase request lifecycle.

use thiserror::Error;

use crate::workflow::types::RequestStatus;

/// Errors that can occur during workflow checks.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The backend sent a status code outside the known set.
    #[error("Unknown request status code {0}")]
    UnknownStatus(u8),

    /// The user's departement carries no executive seat.
    #[error("Departement {departement} cannot review requests")]
    NotExecutive {
        /// The departement that attempted the review.
        departement: String,
    },

    /// The request is not in a status the executive can act on.
    #[error("Request in status {status} is not awaiting review")]
    NotReviewable {
        /// The request's current status.
        status: RequestStatus,
    },
}

impl WorkflowError {
    /// Returns the error code for console and log output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStatus(_) => "UNKNOWN_STATUS",
            Self::NotExecutive { .. } => "NOT_EXECUTIVE",
            Self::NotReviewable { .. } => "NOT_REVIEWABLE",
        }
    }
}
