//! HTTP transport boundary.
//!
//! The client builds complete [`HttpRequest`] values and hands them to a
//! [`Transport`], which performs exactly one exchange and returns the status
//! and raw body. Nothing here retries or interprets the body.

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::LakeBtcError;

/// A fully built request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body, sent verbatim.
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bodiless GET request.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Status and raw body of a completed exchange.
///
/// A 2xx status does not mean the exchange accepted the request; LakeBTC
/// reports rejections inside the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, LakeBtcError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Performs one HTTP exchange.
///
/// `timeout` bounds the whole exchange, including reading the body.
pub trait Transport: Send + Sync {
    /// Send `request` and collect the response.
    fn execute(
        &self,
        request: HttpRequest,
        timeout: Option<Duration>,
    ) -> BoxFuture<'_, Result<RawResponse, LakeBtcError>>;
}

/// Default transport on top of `reqwest` with request tracing.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    /// Create a transport sending the given user agent.
    pub fn new(user_agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("lakebtc-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(concat!("lakebtc-api-client/", env!("CARGO_PKG_VERSION")))
    }
}

impl Transport for HttpTransport {
    fn execute(
        &self,
        request: HttpRequest,
        timeout: Option<Duration>,
    ) -> BoxFuture<'_, Result<RawResponse, LakeBtcError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let exchange = async {
                let response = builder.send().await?;
                let status = response.status();
                let body = response.bytes().await?.to_vec();
                Ok::<_, LakeBtcError>(RawResponse { status, body })
            };

            match timeout {
                Some(limit) => tokio::time::timeout(limit, exchange)
                    .await
                    .map_err(|_| LakeBtcError::Timeout)?,
                None => exchange.await,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_helpers() {
        let response = RawResponse {
            status: StatusCode::OK,
            body: br#"{"result":"ok"}"#.to_vec(),
        };
        assert!(response.is_success());
        assert_eq!(response.text(), r#"{"result":"ok"}"#);

        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["result"], "ok");
    }

    #[test]
    fn test_raw_response_error_status_is_not_success() {
        let response = RawResponse {
            status: StatusCode::UNAUTHORIZED,
            body: b"denied".to_vec(),
        };
        assert!(!response.is_success());
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
