use crate::config::{api_base_url, join_url};
use crate::error::{server_message, ApiError};
use crate::models::{
    AddMoneyRequest, AuthResponse, LoginRequest, PaymentRequest, RegisterRequest, Transaction,
    User,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const PROFILE_PATH: &str = "/api/user/profile";
const WALLET_ADD_PATH: &str = "/api/wallet/add";
const TRANSACTIONS_PATH: &str = "/api/transactions";
const PAYMENT_SEND_PATH: &str = "/api/payment/send";

fn refund_path(transaction_id: &str) -> String {
    format!("/api/payment/refund/{}", transaction_id)
}

/// Client for the payment API. Cheap to build per action; it only carries the
/// base URL and the session token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Client for the configured API, authenticated with `token` when given.
    pub fn from_config(token: Option<String>) -> Self {
        Self::new(api_base_url(), token)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
            .ok_or(ApiError::Unauthenticated)
    }

    fn authorized_get(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let bearer = self.bearer()?;
        Ok(Request::get(&self.url(path)).header("Authorization", &bearer))
    }

    fn authorized_post(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let bearer = self.bearer()?;
        Ok(Request::post(&self.url(path)).header("Authorization", &bearer))
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let builder = Request::post(&self.url(LOGIN_PATH));
        let resp = send_json(builder, body).await?;
        decode(resp).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let builder = Request::post(&self.url(REGISTER_PATH));
        let resp = send_json(builder, body).await?;
        decode(resp).await
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        let resp = send(self.authorized_get(PROFILE_PATH)?).await?;
        decode(resp).await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let resp = send(self.authorized_get(TRANSACTIONS_PATH)?).await?;
        decode(resp).await
    }

    /// The updated balance is not read from the reply; callers re-fetch the
    /// profile.
    pub async fn add_money(&self, amount: f64) -> Result<(), ApiError> {
        let body = AddMoneyRequest { amount };
        send_json(self.authorized_post(WALLET_ADD_PATH)?, &body).await?;
        Ok(())
    }

    pub async fn send_payment(&self, body: &PaymentRequest) -> Result<(), ApiError> {
        send_json(self.authorized_post(PAYMENT_SEND_PATH)?, body).await?;
        Ok(())
    }

    pub async fn refund(&self, transaction_id: &str) -> Result<(), ApiError> {
        let builder = self.authorized_post(&refund_path(transaction_id))?;
        send_json(builder, &serde_json::json!({})).await?;
        Ok(())
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let resp = builder.send().await?;
    check(resp).await
}

async fn send_json<B: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let resp = builder.json(body)?.send().await?;
    check(resp).await
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    debug!(url = %resp.url(), status = resp.status(), "api response");
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = server_message(&body);
    warn!(status, message = ?message, "api request rejected");
    Err(ApiError::Server { status, message })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
