// Path: crates/client/src/rpc.rs

use hlink_types::error::RpcError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicU64, Ordering};

/// JSON-RPC error code wallets use when the user declines a request.
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Serialize)]
struct Request<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct Response {
    /// `None` when the key is absent; an explicit `null` is `Some(Null)`.
    #[serde(default, deserialize_with = "present")]
    result: Option<JsonValue>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<JsonValue>, D::Error> {
    JsonValue::deserialize(d).map(Some)
}

#[derive(Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<JsonValue>,
}

/// Flattens the many shapes nodes use for `error.data` into a single string.
/// Revert payloads come either as a bare hex string or nested one level down.
fn normalize_error_data(data: JsonValue) -> Option<String> {
    match data {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        JsonValue::Object(mut map) => match map.remove("data") {
            Some(JsonValue::String(s)) => Some(s),
            _ => Some(JsonValue::Object(map).to_string()),
        },
        other => Some(other.to_string()),
    }
}

/// Turns an HTTP reply into the JSON-RPC `result`.
///
/// An error object wins over the HTTP status. Otherwise a non-success status is
/// reported as such whatever the body, and a success reply must carry a
/// `result` key.
fn interpret(method: &str, status: StatusCode, body: &[u8]) -> Result<JsonValue, RpcError> {
    let envelope: Response = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(_) if !status.is_success() => {
            return Err(RpcError::Http {
                status: status.as_u16(),
            })
        }
        Err(e) => return Err(RpcError::Decode(e.to_string())),
    };

    if let Some(err) = envelope.error {
        return Err(RpcError::Rpc {
            code: err.code,
            message: err.message,
            data: err.data.and_then(normalize_error_data),
        });
    }
    if !status.is_success() {
        return Err(RpcError::Http {
            status: status.as_u16(),
        });
    }
    envelope
        .result
        .ok_or_else(|| RpcError::Decode(format!("{} response has neither result nor error", method)))
}

/// A minimal HTTP JSON-RPC 2.0 client.
///
/// Timeouts are the transport defaults; nothing here retries.
#[derive(Debug)]
pub struct JsonRpcClient {
    url: String,
    http: Client,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    /// Creates a client for `url`. No connection is made until the first call.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// The endpoint this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Calls `method` with positional `params` and decodes `result` into `R`.
    ///
    /// A `null` result decodes into `Option::None` when `R` is an `Option`.
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R, RpcError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(target: "rpc", method, id, url = %self.url, "rpc request");

        let resp = self
            .http
            .post(&self.url)
            .json(&Request {
                jsonrpc: "2.0",
                id,
                method,
                params,
            })
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let result = interpret(method, status, &body).map_err(|e| {
            tracing::debug!(target: "rpc", method, id, status = status.as_u16(), "rpc error: {}", e);
            e
        })?;

        serde_json::from_value(result)
            .map_err(|e| RpcError::Decode(format!("{} result: {}", method, e)))
    }
}
