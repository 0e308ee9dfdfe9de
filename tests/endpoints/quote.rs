use std::io::Write;
use std::sync::{Arc, Mutex};

use fmp_rs::{FmpError, Shape, quote};
use httpmock::Method::GET;
use serde_json::json;

use crate::common::{API_KEY, client_for, setup_server};

const AAPL_QUOTE: &str = r#"[{
    "symbol": "AAPL",
    "name": "Apple Inc.",
    "price": 232.8,
    "changePercentage": 2.1008,
    "change": 4.79,
    "volume": 44489128,
    "dayLow": 226.65,
    "dayHigh": 233.13,
    "yearHigh": 260.1,
    "yearLow": 164.08,
    "marketCap": 3500823120000,
    "priceAvg50": 240.2278,
    "priceAvg200": 219.98755,
    "exchange": "NASDAQ",
    "open": 227.2,
    "previousClose": 228.01,
    "timestamp": 1738702801
}]"#;

#[tokio::test]
async fn quote_parses_typed_records() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/quote")
            .query_param("symbol", "AAPL")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(AAPL_QUOTE);
    });

    let client = client_for(&server);
    let quotes = quote::quote(&client, "AAPL").await.unwrap();
    mock.assert();

    assert_eq!(quotes.len(), 1);
    let q = &quotes[0];
    assert_eq!(q.symbol, "AAPL");
    assert_eq!(q.price_avg_50, Some(240.2278));
    assert_eq!(q.exchange.as_deref(), Some("NASDAQ"));
    assert_eq!(q.timestamp, Some(1738702801));

    // typed records flatten back to camelCase rows
    let rows = Shape::from(quotes).into_rows();
    assert_eq!(rows[0]["priceAvg200"], json!(219.98755));
}

#[tokio::test]
async fn quote_short_empty_object_is_no_records() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/quote-short")
            .query_param("symbol", "NOPE");
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let quotes = quote::quote_short(&client, "NOPE").await.unwrap();
    mock.assert();
    assert!(quotes.is_empty());
}

#[tokio::test]
async fn quote_on_premium_symbol_can_be_skipped() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(402).body("Premium Endpoint");
    });

    let client = client_for(&server);
    let err = quote::quote(&client, "^N225").await.unwrap_err();
    mock.assert();
    assert!(matches!(err, FmpError::PremiumEndpoint { .. }));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn paywalled_quote_is_logged_as_warning() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(402)
            .body(r#"{"Error Message": "Premium Endpoint. Please upgrade your subscription."}"#);
    });

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = client_for(&server);
    let err = quote::quote(&client, "AAPL").await.unwrap_err();
    mock.assert();
    assert!(err.is_premium(), "got {err:?}");

    let out = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(out.contains("WARN"), "no warning in {out:?}");
    assert!(!out.contains("ERROR"), "paywalled call logged an error: {out:?}");
}
