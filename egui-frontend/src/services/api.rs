//! # API Client
//!
//! HTTP transport for the expense backing store.
//!
//! ## Responsibilities:
//! - Issue authenticated requests against the `/v1` endpoints
//! - Map HTTP failures into the `ApiError` taxonomy
//! - Define the `ExpenseApi` seam the repository and reference-data store
//!   depend on
//!
//! ## Purpose:
//! The client is an explicit dependency handed to the layers above at
//! construction time. It owns nothing but connection configuration; all
//! list/draft state lives in the controller. Requests run on a shared
//! tokio runtime and are driven to completion from the UI thread, so the
//! callers above this seam are plain synchronous code.

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    ExpenseCategoryListResponse, ExpenseDto, ExpenseListResponse, ExpensePayload,
    PaymentModeListResponse,
};
use std::time::Duration;
use thiserror::Error;

static RUNTIME: Lazy<tokio::runtime::Runtime> =
    Lazy::new(|| tokio::runtime::Runtime::new().expect("tokio runtime"));

/// Failure taxonomy for calls against the backing store.
///
/// Validation problems never reach this layer; they are caught by the form
/// before a request is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server reported that the targeted id no longer exists.
    #[error("the requested record no longer exists")]
    NotFound,

    /// Network failure or an unexpected HTTP status.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response arrived but its body could not be interpreted.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Typed endpoint surface of the expense API.
///
/// `ApiClient` implements this over HTTP; tests substitute an in-memory
/// fake so the controller's sequencing can be exercised without a server.
pub trait ExpenseApi {
    fn list_expenses(&self) -> Result<ExpenseListResponse, ApiError>;
    fn get_expense(&self, id: i64) -> Result<ExpenseDto, ApiError>;
    fn create_expense(&self, payload: &ExpensePayload) -> Result<ExpenseDto, ApiError>;
    fn update_expense(&self, id: i64, payload: &ExpensePayload) -> Result<ExpenseDto, ApiError>;
    fn delete_expense(&self, id: i64) -> Result<(), ApiError>;
    fn list_categories(&self) -> Result<ExpenseCategoryListResponse, ApiError>;
    fn list_payment_modes(&self) -> Result<PaymentModeListResponse, ApiError>;
}

/// HTTP client for the expense API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given base URL, attaching `Bearer <token>`
    /// to every request when a token is provided.
    pub fn new(base_url: String, bearer_token: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url,
            bearer_token,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and decode a JSON body from a successful response.
    fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<T, ApiError> {
        RUNTIME.block_on(async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                warn!("{method} {path} -> 404");
                return Err(ApiError::NotFound);
            }
            if !status.is_success() {
                warn!("{method} {path} -> {status}");
                return Err(ApiError::Transport(format!("unexpected status {status}")));
            }
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
    }

    /// Send a request where success carries no body.
    fn send_no_content(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<(), ApiError> {
        RUNTIME.block_on(async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                warn!("{method} {path} -> 404");
                return Err(ApiError::NotFound);
            }
            if !status.is_success() {
                warn!("{method} {path} -> {status}");
                return Err(ApiError::Transport(format!("unexpected status {status}")));
            }
            Ok(())
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        info!("GET {path}");
        self.send_json(self.request(reqwest::Method::GET, path), "GET", path)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        info!("POST {path}");
        self.send_json(
            self.request(reqwest::Method::POST, path).json(body),
            "POST",
            path,
        )
    }

    fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        info!("PUT {path}");
        self.send_json(
            self.request(reqwest::Method::PUT, path).json(body),
            "PUT",
            path,
        )
    }

    fn delete(&self, path: &str) -> Result<(), ApiError> {
        info!("DELETE {path}");
        self.send_no_content(self.request(reqwest::Method::DELETE, path), "DELETE", path)
    }
}

impl ExpenseApi for ApiClient {
    fn list_expenses(&self) -> Result<ExpenseListResponse, ApiError> {
        self.get_json("/v1/expenses")
    }

    fn get_expense(&self, id: i64) -> Result<ExpenseDto, ApiError> {
        self.get_json(&format!("/v1/expenses/{id}"))
    }

    fn create_expense(&self, payload: &ExpensePayload) -> Result<ExpenseDto, ApiError> {
        self.post_json("/v1/expenses", payload)
    }

    fn update_expense(&self, id: i64, payload: &ExpensePayload) -> Result<ExpenseDto, ApiError> {
        self.put_json(&format!("/v1/expenses/{id}"), payload)
    }

    fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/v1/expenses/{id}"))
    }

    fn list_categories(&self) -> Result<ExpenseCategoryListResponse, ApiError> {
        self.get_json("/v1/expense-categories")
    }

    fn list_payment_modes(&self) -> Result<PaymentModeListResponse, ApiError> {
        self.get_json("/v1/payment-modes")
    }
}
