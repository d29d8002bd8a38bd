use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::OffsetDateTime;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lakebtc_api_client::OrderSide;
use lakebtc_api_client::auth::{FixedNonce, StaticCredentials};
use lakebtc_api_client::rest::LakeBtcClient;
use lakebtc_api_client::rest::private::TradeParameters;

const ACCOUNT: &str = "user@example.com";
const SECRET: &str = "test_secret";
const NONCE: u64 = 1_700_000_000;

fn build_client(server: &MockServer) -> LakeBtcClient {
    let credentials = Arc::new(StaticCredentials::new(ACCOUNT, SECRET));
    LakeBtcClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_provider(Arc::new(FixedNonce(NONCE)))
        .build()
}

fn expected_body(method: &str, params: &str) -> String {
    format!(
        "accesskey=user%40example.com&id={NONCE}&method={method}&params={params}\
         &requestmethod=POST&tnonce={NONCE}"
    )
}

fn expected_authorization(body: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
    mac.update(body.as_bytes());
    let mac_hex = hex::encode(mac.finalize().into_bytes());
    format!("Basic {}", STANDARD.encode(format!("{ACCOUNT}:{mac_hex}")))
}

async fn mount_rpc(server: &MockServer, body: String) {
    let authorization = expected_authorization(&body);
    Mock::given(method("POST"))
        .and(path("/api_v1/"))
        .and(header("Json-Rpc-Tonce", "1700000000"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(header("Authorization", authorization.as_str()))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"ok"}"#))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_buy_order_wire_format() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        expected_body("buyOrder", "100.50000000%2C0.00100000%2CUSD"),
    )
    .await;

    let client = build_client(&server);
    let response = client
        .buy_order("100.5".parse().unwrap(), "0.001".parse().unwrap(), "USD")
        .await
        .unwrap();
    assert!(response.is_success());
    assert_eq!(response.text(), r#"{"result":"ok"}"#);
}

#[tokio::test]
async fn test_sell_order_via_trade() {
    let server = MockServer::start().await;
    mount_rpc(
        &server,
        expected_body("sellOrder", "1500.00000000%2C0.25000000%2CCNY"),
    )
    .await;

    let client = build_client(&server);
    let params = TradeParameters::new("1500".parse().unwrap(), "0.25".parse().unwrap(), "CNY");
    client.trade(OrderSide::Sell, &params).await.unwrap();
}

#[tokio::test]
async fn test_get_account_info_and_orders() {
    let server = MockServer::start().await;
    mount_rpc(&server, expected_body("getAccountInfo", "")).await;
    mount_rpc(&server, expected_body("getOrders", "")).await;

    let client = build_client(&server);
    client.get_account_info().await.unwrap();
    client.get_orders().await.unwrap();
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;
    mount_rpc(&server, expected_body("cancelOrder", "42")).await;

    let client = build_client(&server);
    client.cancel_order(42).await.unwrap();
}

#[tokio::test]
async fn test_get_trades_with_and_without_since() {
    let server = MockServer::start().await;
    mount_rpc(&server, expected_body("getTrades", "")).await;
    mount_rpc(&server, expected_body("getTrades", "1700000000")).await;

    let client = build_client(&server);
    client.get_trades(None).await.unwrap();
    let since = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    client.get_trades(Some(since)).await.unwrap();
}

#[tokio::test]
async fn test_rejected_request_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_v1/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid signature"}"#),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response = client.get_orders().await.unwrap();
    assert_eq!(response.status.as_u16(), 401);
    assert!(!response.is_success());
    assert!(response.text().contains("invalid signature"));
}

#[tokio::test]
async fn test_received_body_verifies_against_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    // Default wall-clock nonce: the server must still be able to verify.
    let credentials = Arc::new(StaticCredentials::new(ACCOUNT, SECRET));
    let client = LakeBtcClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build();
    client.cancel_order(7).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    let body = String::from_utf8(request.body.clone()).unwrap();

    let authorization = request.headers.get("Authorization").unwrap().to_str().unwrap();
    assert_eq!(authorization, expected_authorization(&body));

    let fields: Vec<(String, String)> = serde_urlencoded::from_str(&body).unwrap();
    let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        ["accesskey", "id", "method", "params", "requestmethod", "tnonce"]
    );
    let tonce = request.headers.get("Json-Rpc-Tonce").unwrap().to_str().unwrap();
    assert!(fields.contains(&("tnonce".to_string(), tonce.to_string())));
    assert!(fields.contains(&("id".to_string(), tonce.to_string())));
}

#[tokio::test]
async fn test_account_id_escaped_like_query_escape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api_v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let account = "a~b*c@x.com";
    let client = LakeBtcClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(account, SECRET)))
        .nonce_provider(Arc::new(FixedNonce(NONCE)))
        .build();
    client.get_orders().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert_eq!(
        body,
        format!(
            "accesskey=a~b%2Ac%40x.com&id={NONCE}&method=getOrders&params=\
             &requestmethod=POST&tnonce={NONCE}"
        )
    );

    let fields: Vec<(String, String)> = serde_urlencoded::from_str(&body).unwrap();
    assert!(fields.contains(&("accesskey".to_string(), account.to_string())));
}
