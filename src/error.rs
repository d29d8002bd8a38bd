//! Error types for the LakeBTC client library.

use thiserror::Error;

/// The main error type for all LakeBTC client operations.
///
/// Variants fall into three groups:
/// - request construction: the request could not be built, nothing was sent
/// - transport: the request was built but the HTTP exchange did not complete
/// - decoding: a public endpoint answered with something that is not the
///   expected record
///
/// Authenticated calls never produce decoding errors. Their response body is
/// handed back unchecked in a [`RawResponse`](crate::rest::RawResponse).
#[derive(Error, Debug)]
pub enum LakeBtcError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Request timed out before a response arrived
    #[error("Request timed out")]
    Timeout,

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be assembled from its inputs
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: access key and secret required for authenticated methods")]
    MissingCredentials,

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LakeBtcError {
    /// True when the failure happened before anything was sent.
    pub fn is_request_construction(&self) -> bool {
        matches!(
            self,
            Self::Url(_) | Self::InvalidRequest(_) | Self::Auth(_) | Self::MissingCredentials
        )
    }

    /// True when the HTTP exchange itself failed.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(e) => !e.is_builder(),
            Self::HttpMiddleware(_) | Self::Timeout => true,
            _ => false,
        }
    }
}
