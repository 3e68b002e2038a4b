//! Workflow domain types for the purchase request lifecycle.
//!
//! The backend stores request statuses as numeric codes and user roles
//! as single letters; both are decoded into enums here.

use chrono::{DateTime, Utc};
use procura_shared::types::{RequestCode, UserCode};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workflow::error::WorkflowError;

/// Purchase request status in the approval workflow.
///
/// The valid transitions are:
/// - Created → Validated (purchaser validates) | Rejected | Cancelled
/// - Validated → AwaitingExecutives (sent for executive review)
/// - AwaitingExecutives → AwaitingCfo | AwaitingCoo (first signature)
/// - AwaitingCfo | AwaitingCoo → Done (second signature)
/// - AwaitingExecutives | AwaitingCfo | AwaitingCoo → Rejected
/// - Done → WorkOrder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RequestStatus {
    /// Request has been opened and can still be edited.
    Created,
    /// Both executives have signed off.
    Done,
    /// A work order has been issued for the completed request.
    WorkOrder,
    /// Request was withdrawn by its requester.
    Cancelled,
    /// A purchaser validated the request and its supplier selection.
    Validated,
    /// Request was rejected at some review stage.
    Rejected,
    /// Awaiting both the COO and CFO signatures.
    AwaitingExecutives,
    /// The COO signed; the CFO signature is still pending.
    AwaitingCfo,
    /// The CFO signed; the COO signature is still pending.
    AwaitingCoo,
}

impl RequestStatus {
    /// Returns the numeric code the backend stores for this status.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Created => 0,
            Self::Done => 1,
            Self::WorkOrder => 2,
            Self::Cancelled => 3,
            Self::Validated => 4,
            Self::Rejected => 5,
            Self::AwaitingExecutives => 6,
            Self::AwaitingCfo => 7,
            Self::AwaitingCoo => 8,
        }
    }

    /// Decodes a backend status code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Created),
            1 => Some(Self::Done),
            2 => Some(Self::WorkOrder),
            3 => Some(Self::Cancelled),
            4 => Some(Self::Validated),
            5 => Some(Self::Rejected),
            6 => Some(Self::AwaitingExecutives),
            7 => Some(Self::AwaitingCfo),
            8 => Some(Self::AwaitingCoo),
            _ => None,
        }
    }

    /// Returns the display label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Done => "Done",
            Self::WorkOrder => "WO",
            Self::Cancelled => "Cancel",
            Self::Validated => "Validated",
            Self::Rejected => "Rejected",
            Self::AwaitingExecutives => "Awaiting executives",
            Self::AwaitingCfo => "Awaiting CFO",
            Self::AwaitingCoo => "Awaiting COO",
        }
    }

    /// Returns true if the request still awaits at least one executive
    /// signature.
    #[must_use]
    pub const fn is_awaiting_review(self) -> bool {
        matches!(
            self,
            Self::AwaitingExecutives | Self::AwaitingCfo | Self::AwaitingCoo
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for RequestStatus {
    type Error = WorkflowError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(WorkflowError::UnknownStatus(code))
    }
}

impl From<RequestStatus> for u8 {
    fn from(status: RequestStatus) -> Self {
        status.code()
    }
}

/// User role, stored by the backend as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Manages users and settings.
    #[serde(rename = "A")]
    Admin,
    /// Runs sourcing and fills purchase orders.
    #[serde(rename = "P")]
    Purchaser,
    /// Opens purchase requests for their departement.
    #[serde(rename = "D")]
    Requester,
    /// Reviews requests before executive sign-off.
    #[serde(rename = "V")]
    Validator,
}

impl UserRole {
    /// Parses a role from its letter or full name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" | "ADMIN" => Some(Self::Admin),
            "P" | "PURCHASER" => Some(Self::Purchaser),
            "D" | "REQUESTER" => Some(Self::Requester),
            "V" | "VALIDATOR" => Some(Self::Validator),
            _ => None,
        }
    }

    /// Returns the single-letter wire form.
    #[must_use]
    pub const fn as_letter(self) -> &'static str {
        match self {
            Self::Admin => "A",
            Self::Purchaser => "P",
            Self::Requester => "D",
            Self::Validator => "V",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_letter())
    }
}

/// Executive reviewer seat, derived from the user's departement name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executive {
    /// Chief operating officer.
    Coo,
    /// Chief financial officer.
    Cfo,
}

impl Executive {
    /// Maps a departement name to its executive seat, if it carries one.
    #[must_use]
    pub fn from_departement(departement: &str) -> Option<Self> {
        match departement.trim().to_uppercase().as_str() {
            "COO" => Some(Self::Coo),
            "CFO" => Some(Self::Cfo),
            _ => None,
        }
    }
}

impl fmt::Display for Executive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coo => f.write_str("COO"),
            Self::Cfo => f.write_str("CFO"),
        }
    }
}

/// Name of the user who opened a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

impl Requester {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Purchase request header as listed and reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Request code, unique per request.
    pub code: RequestCode,
    /// Who opened the request.
    #[serde(rename = "demandeur")]
    pub requester: Requester,
    /// When the request was opened.
    pub opened_at: DateTime<Utc>,
    /// Current workflow status. `None` when the backend sends a code
    /// this client does not know; unknown codes fail every gate but
    /// must not break listing.
    #[serde(with = "lenient_status")]
    pub status: Option<RequestStatus>,
}

impl PurchaseRequest {
    /// Display label for the status, empty for unknown codes.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        self.status.map_or("", RequestStatus::label)
    }
}

mod lenient_status {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::RequestStatus;

    pub fn serialize<S: Serializer>(
        status: &Option<RequestStatus>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match status {
            Some(status) => serializer.serialize_u8(status.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<RequestStatus>, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Ok(RequestStatus::from_code(code))
    }
}

/// One audit trail entry for a purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Code of the user who acted.
    pub user_code: UserCode,
    /// Human-readable description of the change.
    pub details: String,
    /// When the change happened.
    pub date_changed: DateTime<Utc>,
}
