//! Purchase request lifecycle: statuses, roles, and review gating.

pub mod error;
pub mod service;
pub mod types;

pub use error::WorkflowError;
pub use service::RequestWorkflow;
pub use types::{Executive, HistoryEntry, PurchaseRequest, RequestStatus, Requester, UserRole};
