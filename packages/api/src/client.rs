//! Request plumbing shared by every domain service.
//!
//! The remote API wraps every response in `{data, message, statusCode}`;
//! the helpers here unwrap that envelope and hand callers the inner `data`
//! only. Requests always run with `credentials: include` so the httpOnly
//! session cookie rides along — the client never reads or stores any token
//! material itself.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, …).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The HTTP client only exists in browser builds.
    #[error("http client is only available in the browser")]
    Unsupported,
}

/// The standard response wrapper used by every remote endpoint.
///
/// Transport status governs success; a decoded `status_code` is carried for
/// error messages but is never used to fail an otherwise-2xx response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

const DEFAULT_BASE_URL: &str = "/api/v1";

/// Base URL of the remote API, overridable at build time.
pub fn base_url() -> &'static str {
    option_env!("RENT_ADMIN_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

pub(crate) fn url(path: &str) -> String {
    let base = base_url().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

pub(crate) fn api_failure(status: u16, message: Option<String>) -> ApiError {
    let message =
        message.unwrap_or_else(|| format!("request failed with status {status}"));
    tracing::error!(status, %message, "api request failed");
    ApiError::Api { status, message }
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::*;
    use gloo_net::http::{Request, RequestBuilder, Response};
    use web_sys::RequestCredentials;

    /// Error-arm envelope: `data` may be absent or null on failures.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct ErrorEnvelope {
        #[serde(default)]
        message: Option<String>,
    }

    fn builder(method: &str, path: &str, query: &[(&str, String)]) -> RequestBuilder {
        let url = super::url(path);
        let builder = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            _ => Request::delete(&url),
        };
        builder
            .credentials(RequestCredentials::Include)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
    }

    async fn send_json<B: Serialize>(
        method: &str,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let builder = builder(method, path, query);
        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|env| env.message);
        Err(api_failure(status, message))
    }

    async fn unwrap<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = send_json::<()>("GET", path, query, None).await?;
        unwrap(response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = send_json("POST", path, &[], Some(body)).await?;
        unwrap(response).await
    }

    /// POST whose response body is irrelevant: success is the round trip.
    pub(crate) async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
        send_json("POST", path, &[], Some(body)).await.map(|_| ())
    }

    /// Body-less POST (logout, refresh-token).
    pub(crate) async fn post_empty(path: &str) -> Result<(), ApiError> {
        send_json::<()>("POST", path, &[], None).await.map(|_| ())
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = send_json("PUT", path, &[], Some(body)).await?;
        unwrap(response).await
    }

    pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
        send_json::<()>("DELETE", path, &[], None).await.map(|_| ())
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use fetch::{delete, get, post, post_empty, post_unit, put};

// Non-browser builds get thin stubs so the domain modules (and their tests)
// compile everywhere.
#[cfg(not(target_arch = "wasm32"))]
mod fetch {
    use super::*;

    pub(crate) async fn get<T: DeserializeOwned>(
        _path: &str,
        _query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        Err(ApiError::Unsupported)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(ApiError::Unsupported)
    }

    pub(crate) async fn post_unit<B: Serialize>(_path: &str, _body: &B) -> Result<(), ApiError> {
        Err(ApiError::Unsupported)
    }

    pub(crate) async fn post_empty(_path: &str) -> Result<(), ApiError> {
        Err(ApiError::Unsupported)
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        _path: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(ApiError::Unsupported)
    }

    pub(crate) async fn delete(_path: &str) -> Result<(), ApiError> {
        Err(ApiError::Unsupported)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use fetch::{delete, get, post, post_empty, post_unit, put};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_camel_case_fields() {
        let raw = r#"{"data":{"id":"b1"},"message":"ok","statusCode":200}"#;
        #[derive(Deserialize)]
        struct Item {
            id: String,
        }
        let envelope: Envelope<Item> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.id, "b1");
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert_eq!(envelope.status_code, Some(200));
    }

    #[test]
    fn envelope_tolerates_missing_metadata() {
        let raw = r#"{"data":[1,2,3]}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert!(envelope.message.is_none());
        assert!(envelope.status_code.is_none());
    }

    #[test]
    fn api_failure_prefers_server_message() {
        let err = api_failure(401, Some("phiên đăng nhập đã hết hạn".into()));
        assert_eq!(err.to_string(), "phiên đăng nhập đã hết hạn");
        let err = api_failure(502, None);
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn url_joins_with_and_without_leading_slash() {
        assert!(url("/auth/login").ends_with("/auth/login"));
        assert!(url("auth/login").ends_with("/auth/login"));
        assert!(!url("/auth/login").contains("//auth"));
    }
}
