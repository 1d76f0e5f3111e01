//! # Globepay Client SDK
//!
//! A typed Rust client for the Globepay backend API. The backend owns
//! authentication, ledger and compliance; this crate only moves JSON.

use std::time::Duration;

use globepay_types::{
    AccountSummary, AuthResponse, AuthSession, CreateAccountRequest, CreateTransferRequest,
    CurrencyCode, GatewayError, LoginRequest, PreferencesUpdate, RateGateway, RateQuote,
    Recipient, RecipientId, RecipientRequest, RefreshTokenRequest, RegisterRequest, Transaction,
    TransactionPage, Transfer, TransferId, TransferPage, UpdateProfileRequest, User, UserPreferences,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Default per-request timeout, matching the web client's rate lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not signed in")]
    NotAuthenticated,
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::NotAuthenticated)
            || matches!(self, ClientError::Api { status: 401, .. })
    }
}

/// Globepay API client.
pub struct GlobepayClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl GlobepayClient {
    /// Creates a new client with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            http,
        }
    }

    /// Sets the bearer token for authenticated calls.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Uses the token of a stored session, if any.
    pub fn with_session(mut self, session: Option<&AuthSession>) -> Self {
        self.token = session.map(|s| s.token.clone());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Health
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the API is up.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.public(Method::GET, "/health").send().await?;
        Ok(resp.status().is_success())
    }

    /// Checks if the API and its dependencies are ready.
    pub async fn readiness(&self) -> Result<bool, ClientError> {
        let resp = self.public(Method::GET, "/health/ready").send().await?;
        Ok(resp.status().is_success())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────────────────────

    /// Signs in. The caller decides where to keep the returned session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ClientError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self
            .send(self.public(Method::POST, "/v1/auth/login").json(&req))
            .await?;
        Ok(resp.into())
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthSession, ClientError> {
        let resp: AuthResponse = self
            .send(self.public(Method::POST, "/v1/auth/register").json(req))
            .await?;
        Ok(resp.into())
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthSession, ClientError> {
        let req = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        let resp: AuthResponse = self
            .send(self.public(Method::POST, "/v1/auth/refresh").json(&req))
            .await?;
        Ok(resp.into())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<User, ClientError> {
        self.send(self.authed(Method::GET, "/v1/user/profile")?)
            .await
    }

    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<User, ClientError> {
        self.send(self.authed(Method::PUT, "/v1/user/profile")?.json(req))
            .await
    }

    /// Lists the user's currency wallets.
    pub async fn list_accounts(&self) -> Result<Vec<AccountSummary>, ClientError> {
        self.send(self.authed(Method::GET, "/v1/user/accounts")?)
            .await
    }

    pub async fn create_account(
        &self,
        currency: CurrencyCode,
    ) -> Result<AccountSummary, ClientError> {
        let req = CreateAccountRequest { currency };
        self.send(self.authed(Method::POST, "/v1/user/accounts")?.json(&req))
            .await
    }

    pub async fn get_preferences(&self) -> Result<UserPreferences, ClientError> {
        self.send(self.authed(Method::GET, "/v1/user/preferences")?)
            .await
    }

    /// Preferences, or the defaults when they cannot be fetched.
    pub async fn get_preferences_or_default(&self) -> UserPreferences {
        match self.get_preferences().await {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch preferences, showing defaults");
                UserPreferences::default()
            }
        }
    }

    /// Sends only the fields set on `update`.
    pub async fn update_preferences(
        &self,
        update: &PreferencesUpdate,
    ) -> Result<UserPreferences, ClientError> {
        self.send(self.authed(Method::PUT, "/v1/user/preferences")?.json(update))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transfers
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn list_transfers(&self, page: u32, limit: u32) -> Result<TransferPage, ClientError> {
        let req = self
            .authed(Method::GET, "/v1/transfers")?
            .query(&[("page", page), ("limit", limit)]);
        self.send(req).await
    }

    pub async fn get_transfer(&self, id: &TransferId) -> Result<Transfer, ClientError> {
        self.send(self.authed(Method::GET, &format!("/v1/transfers/{}", id))?)
            .await
    }

    pub async fn create_transfer(
        &self,
        req: &CreateTransferRequest,
    ) -> Result<Transfer, ClientError> {
        self.send(self.authed(Method::POST, "/v1/transfers")?.json(req))
            .await
    }

    pub async fn cancel_transfer(&self, id: &TransferId) -> Result<(), ClientError> {
        let req = self.authed(Method::POST, &format!("/v1/transfers/{}/cancel", id))?;
        self.send_empty(req).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transaction history
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn list_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<TransactionPage, ClientError> {
        let req = self
            .authed(Method::GET, "/v1/transactions")?
            .query(&[("page", page), ("limit", limit)]);
        self.send(req).await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, ClientError> {
        self.send(self.authed(Method::GET, &format!("/v1/transactions/{}", id))?)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Recipients
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn list_recipients(&self) -> Result<Vec<Recipient>, ClientError> {
        self.send(self.authed(Method::GET, "/v1/beneficiaries")?)
            .await
    }

    pub async fn create_recipient(&self, req: &RecipientRequest) -> Result<Recipient, ClientError> {
        self.send(self.authed(Method::POST, "/v1/beneficiaries")?.json(req))
            .await
    }

    pub async fn update_recipient(
        &self,
        id: &RecipientId,
        req: &RecipientRequest,
    ) -> Result<Recipient, ClientError> {
        let path = format!("/v1/beneficiaries/{}", id);
        self.send(self.authed(Method::PUT, &path)?.json(req)).await
    }

    pub async fn delete_recipient(&self, id: &RecipientId) -> Result<(), ClientError> {
        let path = format!("/v1/beneficiaries/{}", id);
        self.send_empty(self.authed(Method::DELETE, &path)?).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request plumbing
    // ─────────────────────────────────────────────────────────────────────────

    fn public(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = method.as_str(), url = url.as_str(), "api request");
        self.http.request(method, url)
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let token = self.token.as_ref().ok_or(ClientError::NotAuthenticated)?;
        Ok(self.public(method, path).bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        let body = self.check_status(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_empty(&self, req: RequestBuilder) -> Result<(), ClientError> {
        let resp = req.send().await?;
        self.check_status(resp).await.map(|_| ())
    }

    /// Returns the body of a 2xx response, or the API error it carries.
    async fn check_status(&self, resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            tracing::debug!(status = status.as_u16(), %message, "api request failed");
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait::async_trait]
impl RateGateway for GlobepayClient {
    async fn fetch_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: f64,
    ) -> Result<RateQuote, GatewayError> {
        let amount = amount.to_string();
        let req = self.public(Method::GET, "/v1/exchange-rates").query(&[
            ("from", from.code()),
            ("to", to.code()),
            ("amount", amount.as_str()),
        ]);

        let resp = req.send().await.map_err(gateway_error)?;
        let body = self.check_status(resp).await.map_err(|e| match e {
            ClientError::Api { status, message } => GatewayError::Status { status, message },
            ClientError::Http(e) => gateway_error(e),
            other => GatewayError::Unavailable(other.to_string()),
        })?;

        let quote: RateQuote =
            serde_json::from_str(&body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
        quote.validate()
    }
}

fn gateway_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GlobepayClient::new("http://localhost:8080/api");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = GlobepayClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_client_with_token() {
        let client = GlobepayClient::new("http://localhost:8080").with_token("test-token");
        assert_eq!(client.token, Some("test-token".to_string()));
    }

    #[test]
    fn test_authed_request_requires_token() {
        let client = GlobepayClient::new("http://localhost:8080");
        assert!(matches!(
            client.authed(Method::GET, "/v1/user/profile"),
            Err(ClientError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ClientError::NotAuthenticated.is_unauthorized());
        assert!(
            ClientError::Api {
                status: 401,
                message: "expired".into()
            }
            .is_unauthorized()
        );
        assert!(
            !ClientError::Api {
                status: 500,
                message: "boom".into()
            }
            .is_unauthorized()
        );
    }
}
