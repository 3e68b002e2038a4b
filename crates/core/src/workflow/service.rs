//! Gating and transition rules for the purchase request lifecycle.

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{Executive, RequestStatus, UserRole};

/// Stateless service answering who may act on a request in its current
/// status.
pub struct RequestWorkflow;

impl RequestWorkflow {
    /// Whether the purchase order column may be edited.
    ///
    /// Only purchasers may fill purchase orders, and only once the
    /// request has been validated.
    #[must_use]
    pub fn can_edit_purchase_orders(roles: &[UserRole], status: RequestStatus) -> bool {
        roles.contains(&UserRole::Purchaser) && status == RequestStatus::Validated
    }

    /// Whether the given executive seat may review a request in the
    /// given status.
    ///
    /// The COO signs requests awaiting the COO, the CFO those awaiting
    /// the CFO; either may sign first while the request awaits both.
    #[must_use]
    pub fn can_review(executive: Executive, status: RequestStatus) -> bool {
        match executive {
            Executive::Coo => matches!(
                status,
                RequestStatus::AwaitingCoo | RequestStatus::AwaitingExecutives
            ),
            Executive::Cfo => matches!(
                status,
                RequestStatus::AwaitingCfo | RequestStatus::AwaitingExecutives
            ),
        }
    }

    /// Checks that a user from the given departement may validate or
    /// reject a request in the given status.
    ///
    /// # Errors
    /// * `WorkflowError::NotExecutive` if the departement carries no
    ///   executive seat
    /// * `WorkflowError::NotReviewable` if the request is not awaiting
    ///   that seat's signature
    pub fn authorize_review(
        departement: &str,
        status: RequestStatus,
    ) -> Result<Executive, WorkflowError> {
        let executive = Executive::from_departement(departement).ok_or_else(|| {
            WorkflowError::NotExecutive {
                departement: departement.to_string(),
            }
        })?;

        if Self::can_review(executive, status) {
            Ok(executive)
        } else {
            Err(WorkflowError::NotReviewable { status })
        }
    }

    /// The status a request reaches after the given executive validates.
    ///
    /// From the double-pending status the request moves on to await the
    /// other seat; from a single-pending status it completes. `None`
    /// when that executive has nothing to sign.
    #[must_use]
    pub fn next_after_validation(
        executive: Executive,
        status: RequestStatus,
    ) -> Option<RequestStatus> {
        match (executive, status) {
            (Executive::Coo, RequestStatus::AwaitingExecutives) => Some(RequestStatus::AwaitingCfo),
            (Executive::Cfo, RequestStatus::AwaitingExecutives) => Some(RequestStatus::AwaitingCoo),
            (Executive::Coo, RequestStatus::AwaitingCoo)
            | (Executive::Cfo, RequestStatus::AwaitingCfo) => Some(RequestStatus::Done),
            _ => None,
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Created → Validated | Rejected | Cancelled
    /// - Validated → AwaitingExecutives
    /// - AwaitingExecutives → AwaitingCfo | AwaitingCoo | Rejected
    /// - AwaitingCfo → Done | Rejected
    /// - AwaitingCoo → Done | Rejected
    /// - Done → WorkOrder
    #[must_use]
    pub fn is_valid_transition(from: RequestStatus, to: RequestStatus) -> bool {
        matches!(
            (from, to),
            (
                RequestStatus::Created,
                RequestStatus::Validated | RequestStatus::Rejected | RequestStatus::Cancelled
            ) | (RequestStatus::Validated, RequestStatus::AwaitingExecutives)
                | (
                    RequestStatus::AwaitingExecutives,
                    RequestStatus::AwaitingCfo
                        | RequestStatus::AwaitingCoo
                        | RequestStatus::Rejected
                )
                | (
                    RequestStatus::AwaitingCfo | RequestStatus::AwaitingCoo,
                    RequestStatus::Done | RequestStatus::Rejected
                )
                | (RequestStatus::Done, RequestStatus::WorkOrder)
        )
    }
}
