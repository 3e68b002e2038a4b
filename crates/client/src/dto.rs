//! Envelopes and write payloads dictated by the backend's JSON shapes.
//!
//! Domain entities decode straight into `procura-core` types; this module
//! covers what those types do not: the reference-preserving `$values`
//! array wrapper some endpoints emit, the paged listing envelope, and the
//! bodies of write calls.

use procura_core::budget::{BudgetSnapshot, MonthlySeries};
use procura_core::sourcing::Offer;
use procura_core::workflow::UserRole;
use procura_shared::types::{ArticleId, Paged, RequestCode, SupplierId, UserCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Array payload that may arrive plain or wrapped in the backend
/// serializer's reference-preserving envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireList<T> {
    /// Plain JSON array.
    Plain(Vec<T>),
    /// `{"$id": …, "$values": […]}` envelope.
    Preserved {
        /// The wrapped items.
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
}

impl<T> WireList<T> {
    /// Unwraps into the plain item vector.
    pub fn into_inner(self) -> Vec<T> {
        match self {
            Self::Plain(items) | Self::Preserved { values: items } => items,
        }
    }
}

/// Paged listing envelope returned by `/Demande`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedWire<T> {
    /// Items for the requested page, possibly `$values`-wrapped.
    pub items: WireList<T>,
    /// Total number of matching rows.
    pub total_count: u64,
}

impl<T> From<PagedWire<T>> for Paged<T> {
    fn from(wire: PagedWire<T>) -> Self {
        Self::new(wire.items.into_inner(), wire.total_count)
    }
}

/// Generated request code envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedCode {
    /// The freshly generated code.
    pub code: RequestCode,
}

/// Budget inputs saved back per departement.
///
/// Only the five editable series travel; actuals and turnover stay
/// backend-owned and derived series are recomputed on read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSavePayload {
    /// Departement the budget belongs to.
    pub departement: String,
    /// Initial budget allocation.
    pub initial_budget: MonthlySeries,
    /// Budgeted sales.
    pub sales_budget: MonthlySeries,
    /// Forecast sales.
    pub sales_forecast: MonthlySeries,
    /// Adjustment percentage.
    pub adjustment: MonthlySeries,
    /// IP budget.
    #[serde(rename = "budgetIP")]
    pub budget_ip: MonthlySeries,
}

impl BudgetSavePayload {
    /// Builds the payload from a snapshot's editable series.
    #[must_use]
    pub fn from_snapshot(departement: &str, snapshot: &BudgetSnapshot) -> Self {
        Self {
            departement: departement.to_string(),
            initial_budget: snapshot.initial_budget.clone(),
            sales_budget: snapshot.sales_budget.clone(),
            sales_forecast: snapshot.sales_forecast.clone(),
            adjustment: snapshot.adjustment.clone(),
            budget_ip: snapshot.budget_ip.clone(),
        }
    }
}

/// One purchase order assignment from the validation grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderUpdate {
    /// Article identifier.
    pub id: ArticleId,
    /// Assigned purchase order number.
    pub purchase_order: Option<String>,
}

/// Article line sent when drafting or updating a request.
///
/// Backend identifiers are assigned server-side, so none travel here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftArticle {
    /// Article name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Requested quantity.
    pub quantity: Decimal,
    /// Product family label.
    pub famille_de_produit: String,
    /// Delivery destination.
    pub destination: String,
}

/// Payload opening a new purchase request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequestPayload {
    /// Pre-generated request code.
    pub code: RequestCode,
    /// Code of the requesting user.
    pub demandeur_code: UserCode,
    /// Backend identifier of the requesting user.
    pub demandeur_id: i64,
    /// Requested article lines.
    pub articles: Vec<DraftArticle>,
}

/// Payload replacing a request's article lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticlesPayload {
    /// Code of the editing user.
    pub user_code: UserCode,
    /// The request being edited.
    pub demande_code: RequestCode,
    /// Replacement article lines.
    pub articles: Vec<DraftArticle>,
}

/// Payload recording a supplier's offer lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    /// The quoting supplier.
    pub supplier_id: SupplierId,
    /// Offer lines keyed by article.
    pub items: Vec<Offer>,
}

/// Payload broadcasting a request to the chosen suppliers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDispatch {
    /// Code of the dispatching user.
    pub user_code: UserCode,
    /// The request to broadcast.
    pub request_code: RequestCode,
    /// Suppliers to consult.
    pub supplier_ids: Vec<SupplierId>,
}

/// Credentials for `/Auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    /// User code.
    pub code: UserCode,
    /// Password, sent as-is over the configured transport.
    pub password: String,
}

/// Authenticated session returned by `/Auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user: SessionUser,
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// The signed-in user as the backend describes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend identifier.
    pub id: i64,
    /// User code.
    pub code: UserCode,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role letters.
    #[serde(default)]
    pub roles: Vec<UserRole>,
    /// Departement name.
    pub departement: String,
    /// Whether a password change is forced at next sign-in.
    #[serde(default)]
    pub needs_password_change: bool,
    /// Whether the account is active.
    #[serde(default)]
    pub is_active: bool,
}
