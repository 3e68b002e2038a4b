//! HTTP client for the procurement backend.

use procura_core::budget::BudgetSnapshot;
use procura_core::currency::{CurrencySettings, RateTable};
use procura_core::sourcing::{
    Article, CatalogOffer, ProductSuggestion, SuggestionKind, SupplierQuote,
};
use procura_core::workflow::{HistoryEntry, PurchaseRequest};
use procura_shared::config::BackendConfig;
use procura_shared::error::{AppError, AppResult};
use procura_shared::types::{PageRequest, Paged, RequestCode, UserCode};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::dto::{
    BudgetSavePayload, GeneratedCode, LoginPayload, NewRequestPayload, PagedWire,
    PurchaseOrderUpdate, QuoteSubmission, Session, SupplierDispatch, UpdateArticlesPayload,
    WireList,
};

/// Client for the procurement REST backend.
///
/// One method per endpoint; requests are sent once, never retried, and
/// non-2xx responses are classified into [`AppError`] with the backend's
/// error body text when one was sent.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    /// Creates a client from backend configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|err| AppError::Internal(format!("HTTP client setup failed: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Returns a client that authenticates subsequent calls with `token`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// Signs in and returns the session with its bearer token.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` on bad credentials.
    pub async fn login(&self, code: &UserCode, password: &str) -> AppResult<Session> {
        let url = format!("{}/Auth/login", self.base_url);
        let payload = LoginPayload {
            code: code.clone(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, &url)
            .json(&payload)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    // ========================================================================
    // Budget
    // ========================================================================

    /// Fetches the budget snapshot of a departement.
    ///
    /// Series the backend has never stored arrive absent and decode to
    /// all-zero months; derived series are recomputed locally after fetch.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the departement has no budget.
    pub async fn fetch_budget(&self, departement: &str) -> AppResult<BudgetSnapshot> {
        let url = format!("{}/budget", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("departement", departement)])
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    /// Saves the editable budget series of a departement.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn save_budget(&self, departement: &str, snapshot: &BudgetSnapshot) -> AppResult<()> {
        let url = format!("{}/budget", self.base_url);
        let payload = BudgetSavePayload::from_snapshot(departement, snapshot);
        let response = self
            .request(Method::POST, &url)
            .json(&payload)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    // ========================================================================
    // Currency settings
    // ========================================================================

    /// Fetches the stored conversion rates as a ready-to-use table.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn fetch_rates(&self) -> AppResult<RateTable> {
        let url = format!("{}/Settings/get-currency-settings", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        let settings: CurrencySettings = Self::decode(response).await?;
        Ok(RateTable::from(settings))
    }

    /// Updates the stored conversion rates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn update_rates(&self, settings: &CurrencySettings) -> AppResult<()> {
        let url = format!("{}/Settings/update-currency-settings", self.base_url);
        let response = self
            .request(Method::PUT, &url)
            .json(settings)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    // ========================================================================
    // Purchase requests
    // ========================================================================

    /// Lists the requests raised by a user, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn list_requests(
        &self,
        user: &UserCode,
        page: PageRequest,
    ) -> AppResult<Paged<PurchaseRequest>> {
        let url = format!("{}/Demande", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("code", user.as_str())])
            .query(&[("pageNumber", page.page_number), ("pageSize", page.page_size)])
            .send()
            .await
            .map_err(Self::transport)?;
        let wire: PagedWire<PurchaseRequest> = Self::decode(response).await?;
        Ok(wire.into())
    }

    /// Fetches a single request header.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no request carries the code.
    pub async fn fetch_request(&self, code: &RequestCode) -> AppResult<PurchaseRequest> {
        let url = format!("{}/Demande/{code}", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    /// Fetches the article lines of a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn fetch_articles(&self, code: &RequestCode) -> AppResult<Vec<Article>> {
        let url = format!("{}/Demande/{code}/articles", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode_list(response).await
    }

    /// Fetches the audit history of a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn fetch_history(&self, code: &RequestCode) -> AppResult<Vec<HistoryEntry>> {
        let url = format!("{}/Demande/{code}/history", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode_list(response).await
    }

    /// Reserves the next request code for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn generate_request_code(&self, user: &UserCode) -> AppResult<RequestCode> {
        let url = format!("{}/Demande/generate-code/{user}", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        let generated: GeneratedCode = Self::decode(response).await?;
        Ok(generated.code)
    }

    /// Opens a new request with its draft articles.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the backend refuses the draft.
    pub async fn create_request(&self, payload: &NewRequestPayload) -> AppResult<()> {
        let url = format!("{}/Demande", self.base_url);
        let response = self
            .request(Method::POST, &url)
            .json(payload)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    /// Replaces the article lines of a still-editable request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn update_articles(&self, payload: &UpdateArticlesPayload) -> AppResult<()> {
        let url = format!(
            "{}/Demande/{}/update-articles",
            self.base_url, payload.demande_code
        );
        let response = self
            .request(Method::PUT, &url)
            .json(payload)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    /// Approves a request on behalf of an executive user.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` when the user may not review the request.
    pub async fn validate_request(&self, code: &RequestCode, user: &UserCode) -> AppResult<()> {
        let url = format!("{}/Demande/{code}/validate/{user}", self.base_url);
        let response = self
            .request(Method::PUT, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    /// Rejects a request on behalf of an executive user.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` when the user may not review the request.
    pub async fn reject_request(&self, code: &RequestCode, user: &UserCode) -> AppResult<()> {
        let url = format!("{}/Demande/{code}/reject/{user}", self.base_url);
        let response = self
            .request(Method::PUT, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    /// Records purchase order assignments on a validated request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn save_purchase_orders(
        &self,
        code: &RequestCode,
        updates: &[PurchaseOrderUpdate],
    ) -> AppResult<()> {
        let url = format!("{}/Demande/{code}/add-purchase-order", self.base_url);
        let response = self
            .request(Method::PUT, &url)
            .json(&updates)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    // ========================================================================
    // Sourcing
    // ========================================================================

    /// Fetches every supplier quote recorded for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn fetch_quotes(&self, code: &RequestCode) -> AppResult<Vec<SupplierQuote>> {
        let url = format!("{}/Demande/{code}/suppliers", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode_list(response).await
    }

    /// Fetches the quote of the supplier already chosen for a request.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no supplier has been selected yet.
    pub async fn selected_supplier(&self, code: &RequestCode) -> AppResult<SupplierQuote> {
        let url = format!("{}/Suppliers/selected-supplier/{code}", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    /// Broadcasts a request to the chosen suppliers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn send_to_suppliers(&self, dispatch: &SupplierDispatch) -> AppResult<()> {
        let url = format!("{}/Suppliers/send-to-suppliers", self.base_url);
        let response = self
            .request(Method::POST, &url)
            .json(dispatch)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    /// Records a supplier's offer lines for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn submit_offer(&self, submission: &QuoteSubmission) -> AppResult<()> {
        let url = format!("{}/Devis", self.base_url);
        let response = self
            .request(Method::POST, &url)
            .json(submission)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    /// Fetches historical offers matching an article, in backend order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn cheapest_offers(
        &self,
        name: &str,
        description: &str,
    ) -> AppResult<Vec<CatalogOffer>> {
        let url = format!("{}/Demande/cheapest-offers", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("name", name), ("description", description)])
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode_list(response).await
    }

    /// Fetches name or description completions for draft articles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn product_suggestions(
        &self,
        query: &str,
        kind: SuggestionKind,
    ) -> AppResult<Vec<ProductSuggestion>> {
        let url = format!("{}/Demande/products-suggestions", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("query", query), ("type", kind.as_str())])
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode_list(response).await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        response.json::<T>().await.map_err(|err| {
            tracing::error!(error = %err, "backend response did not match the wire contract");
            AppError::Decode(err.to_string())
        })
    }

    /// Decodes an array body that may or may not be `$values`-wrapped.
    async fn decode_list<T: DeserializeOwned>(response: Response) -> AppResult<Vec<T>> {
        Ok(Self::decode::<WireList<T>>(response).await?.into_inner())
    }

    async fn expect_ok(response: Response) -> AppResult<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: Response) -> AppError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status.canonical_reason().unwrap_or("unknown status").to_string(),
        };
        tracing::warn!(status = status.as_u16(), message = %message, "backend reported an error");
        AppError::from_status(status.as_u16(), message)
    }

    fn transport(err: reqwest::Error) -> AppError {
        tracing::error!(error = %err, "backend request failed");
        AppError::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let config = BackendConfig {
            base_url: "http://localhost:5000/api/".to_string(),
            token: None,
        };
        let client = BackendClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:5000/api");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_with_token() {
        let client = BackendClient::new(&BackendConfig::default())
            .unwrap()
            .with_token("jwt-token");
        assert_eq!(client.token.as_deref(), Some("jwt-token"));
    }
}
