use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub balance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum TransactionStatus {
    Success,
    Failed,
    Refunded,
    /// Anything the server sends outside the known set. No filter selects it.
    Unknown,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown transaction status `{0}`")]
pub struct ParseStatusError(pub String);

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Refunded => "Refunded",
            TransactionStatus::Unknown => "Unknown",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(TransactionStatus::Success),
            "failed" => Ok(TransactionStatus::Failed),
            "refunded" => Ok(TransactionStatus::Refunded),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|err: ParseStatusError| {
            warn!(error = %err, "treating transaction status as unknown");
            TransactionStatus::Unknown
        })
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(deserialize_with = "de_id")]
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(deserialize_with = "de_id")]
    pub receiver_id: String,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    pub status: TransactionStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct AddMoneyRequest {
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub receiver_email: String,
    pub amount: f64,
}

// ids come back as integers from some backends and uuids from others
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Str(String),
        Int(i64),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Str(s) => Ok(s),
        RawId::Int(n) => Ok(n.to_string()),
    }
}

// NUMERIC columns are usually serialized as strings
fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Num(f64),
        Str(String),
        Null,
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Num(n) => Ok(n),
        RawAmount::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount `{}`", s))),
        RawAmount::Null => Ok(0.0),
    }
}

/// Parses a form amount. Only finite, strictly positive values are accepted.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
