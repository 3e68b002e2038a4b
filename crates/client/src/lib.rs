//! HTTP client for the Procura backend API.
//!
//! [`BackendClient`] wraps `reqwest` and exposes one async method per
//! backend endpoint. Responses decode straight into the domain types
//! from `procura-core`; the [`dto`] module covers the envelopes and
//! write payloads the backend's JSON shapes dictate. Calls are
//! point-to-point with no retries; failures classify into
//! `procura_shared::AppError` by HTTP status.

pub mod client;
pub mod dto;

pub use client::BackendClient;
pub use dto::Session;
