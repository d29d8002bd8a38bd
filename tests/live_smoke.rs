use std::sync::Arc;

use lakebtc_api_client::auth::EnvCredentials;
use lakebtc_api_client::rest::LakeBtcClient;

fn live_tests_enabled() -> bool {
    std::env::var("LAKEBTC_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = LakeBtcClient::new();
    let ticker = client.get_ticker().await?;
    assert!(ticker.usd.is_some() || ticker.cny.is_some());

    let _book = client.get_order_book("USD").await?;
    let _trades = client.get_trade_history().await?;

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = LakeBtcClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let info = client.get_account_info().await?;
    assert!(!info.body.is_empty());
    let _orders = client.get_orders().await?;

    Ok(())
}
