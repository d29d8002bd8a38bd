//! LakeBTC REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use url::Url;

use crate::auth::{CredentialsProvider, NonceProvider, UnixSecondsNonce};
use crate::error::LakeBtcError;
use crate::rest::endpoints::{LAKEBTC_BASE_URL, RPC_PATH, RpcMethod};
use crate::rest::private::TradeParameters;
use crate::rest::public::{OrderBook, PublicTrade, TickerResponse};
use crate::rest::signed::{SignedEnvelope, TONCE_HEADER};
use crate::rest::traits::LakeBtcApi;
use crate::rest::transport::{HttpRequest, HttpTransport, RawResponse, Transport};
use crate::types::{ExchangeProfile, OrderSide};

/// The LakeBTC REST API client.
///
/// Public endpoints are plain GETs. Authenticated methods are JSON-RPC calls
/// POSTed to a single path, signed with HMAC-SHA256 over the form-encoded
/// body.
///
/// The client performs no retries and no rate limiting; every call is one
/// HTTP exchange.
///
/// # Example
///
/// ```rust,no_run
/// use lakebtc_api_client::rest::LakeBtcClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LakeBtcClient::new();
///     let book = client.get_order_book("USD").await?;
///     println!("best ask: {:?}", book.best_ask());
///     Ok(())
/// }
/// ```
///
/// For authenticated methods, provide credentials:
///
/// ```rust,no_run
/// use lakebtc_api_client::rest::LakeBtcClient;
/// use lakebtc_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("trader@example.com", "secret"));
///     let client = LakeBtcClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let orders = client.get_orders().await?;
///     println!("{}", orders.text());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LakeBtcClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    timeout: Option<Duration>,
    profile: Arc<ExchangeProfile>,
}

impl LakeBtcClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`LakeBtcClient::builder()`] to configure credentials.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> LakeBtcClientBuilder {
        LakeBtcClientBuilder::new()
    }

    /// Exchange profile this client was built with.
    pub fn profile(&self) -> &ExchangeProfile {
        &self.profile
    }

    /// Fee for a maker (`true`) or taker (`false`) order.
    pub fn fee(&self, maker: bool) -> Decimal {
        self.profile.fee(maker)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, LakeBtcError> {
        Ok(Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            endpoint
        ))?)
    }

    /// Make a public GET request and decode the JSON body.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, LakeBtcError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, "sending public request");

        let response = self
            .transport
            .execute(HttpRequest::get(url), self.timeout)
            .await?;
        self.log_raw(endpoint, &response);

        if !response.is_success() {
            return Err(LakeBtcError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status,
                response.text()
            )));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            LakeBtcError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                response.text()
            ))
        })
    }

    /// Build the signed POST for an authenticated method without sending it.
    ///
    /// Draws a fresh nonce from the client's nonce provider.
    pub fn prepare_authenticated(
        &self,
        method: RpcMethod,
        params: &str,
    ) -> Result<(SignedEnvelope, HttpRequest), LakeBtcError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(LakeBtcError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let nonce = self.nonce_provider.next_nonce();
        let envelope = SignedEnvelope::build(creds, nonce, method, params)?;

        let mut headers = HeaderMap::new();
        headers.insert(TONCE_HEADER, HeaderValue::from(nonce));
        let authorization = HeaderValue::from_str(&envelope.authorization).map_err(|e| {
            LakeBtcError::InvalidRequest(format!("Invalid authorization header: {e}"))
        })?;
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let request = HttpRequest {
            method: Method::POST,
            url: self.endpoint_url(RPC_PATH)?,
            headers,
            body: Some(envelope.canonical.clone()),
        };

        Ok((envelope, request))
    }

    /// Sign and send an authenticated JSON-RPC call.
    ///
    /// The response is returned as received, whatever its status.
    pub async fn call_authenticated(
        &self,
        method: RpcMethod,
        params: &str,
    ) -> Result<RawResponse, LakeBtcError> {
        let (envelope, request) = self.prepare_authenticated(method, params)?;

        if self.profile.verbose {
            tracing::info!(
                %method,
                nonce = envelope.nonce,
                payload = %envelope.canonical,
                "sending authenticated request"
            );
        } else {
            tracing::debug!(%method, nonce = envelope.nonce, "sending authenticated request");
        }

        let response = self.transport.execute(request, self.timeout).await?;
        self.log_raw(method.as_str(), &response);
        Ok(response)
    }

    fn log_raw(&self, endpoint: &str, response: &RawResponse) {
        if self.profile.verbose {
            tracing::info!(
                endpoint,
                status = %response.status,
                body = %response.text(),
                "received raw response"
            );
        } else {
            tracing::trace!(
                endpoint,
                status = %response.status,
                body = %response.text(),
                "received raw response"
            );
        }
    }
}

impl Default for LakeBtcClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LakeBtcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LakeBtcClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("timeout", &self.timeout)
            .field("profile", &self.profile)
            .finish()
    }
}

/// Builder for [`LakeBtcClient`].
pub struct LakeBtcClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    transport: Option<Arc<dyn Transport>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    profile: ExchangeProfile,
}

impl LakeBtcClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: LAKEBTC_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            transport: None,
            user_agent: None,
            timeout: None,
            profile: ExchangeProfile::default(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Replace the HTTP transport.
    ///
    /// When set, [`user_agent`](Self::user_agent) is ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Bound every HTTP exchange by this duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the exchange profile.
    pub fn profile(mut self, profile: ExchangeProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Log payloads and raw responses at `info` level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.profile.verbose = verbose;
        self
    }

    /// Build the client.
    pub fn build(self) -> LakeBtcClient {
        let transport = self.transport.unwrap_or_else(|| {
            let user_agent = self
                .user_agent
                .unwrap_or_else(|| format!("lakebtc-api-client/{}", env!("CARGO_PKG_VERSION")));
            Arc::new(HttpTransport::new(&user_agent))
        });

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(UnixSecondsNonce::new()));

        LakeBtcClient {
            transport,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            timeout: self.timeout,
            profile: Arc::new(self.profile),
        }
    }
}

impl Default for LakeBtcClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// LakeBtcApi trait implementation.

impl LakeBtcApi for LakeBtcClient {
    // ========== Public Endpoints ==========

    async fn get_ticker(&self) -> Result<TickerResponse, LakeBtcError> {
        LakeBtcClient::get_ticker(self).await
    }

    async fn get_order_book(&self, currency: &str) -> Result<OrderBook, LakeBtcError> {
        LakeBtcClient::get_order_book(self, currency).await
    }

    async fn get_trade_history(&self) -> Result<Vec<PublicTrade>, LakeBtcError> {
        LakeBtcClient::get_trade_history(self).await
    }

    // ========== Authenticated Methods ==========

    async fn get_account_info(&self) -> Result<RawResponse, LakeBtcError> {
        LakeBtcClient::get_account_info(self).await
    }

    async fn trade(
        &self,
        side: OrderSide,
        params: &TradeParameters,
    ) -> Result<RawResponse, LakeBtcError> {
        LakeBtcClient::trade(self, side, params).await
    }

    async fn get_orders(&self) -> Result<RawResponse, LakeBtcError> {
        LakeBtcClient::get_orders(self).await
    }

    async fn cancel_order(&self, order_id: i64) -> Result<RawResponse, LakeBtcError> {
        LakeBtcClient::cancel_order(self, order_id).await
    }

    async fn get_trades(
        &self,
        since: Option<OffsetDateTime>,
    ) -> Result<RawResponse, LakeBtcError> {
        LakeBtcClient::get_trades(self, since).await
    }
}
