use fmp_rs::{Endpoint, FmpError, QueryParams};
use httpmock::Method::GET;

use crate::common::{client_for, refused_client, setup_server};

#[tokio::test]
async fn refused_connection_propagates_as_http_error() {
    let client = refused_client();
    let err = client
        .get_json(&Endpoint::new("quote"), QueryParams::new().push("symbol", "AAPL"))
        .await
        .unwrap_err();

    assert!(err.is_connect(), "expected connect error, got {err:?}");
    assert!(matches!(err, FmpError::Http(_)));
}

#[tokio::test]
async fn redirect_loop_propagates_as_http_error() {
    let server = setup_server();
    let target = server.url("/stable/loop");
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/loop");
        then.status(302).header("location", target.as_str());
    });

    let client = client_for(&server);
    let err = client
        .get_json(&Endpoint::new("loop"), QueryParams::new())
        .await
        .unwrap_err();

    match err {
        FmpError::Http(e) => assert!(e.is_redirect(), "expected redirect error, got {e:?}"),
        other => panic!("expected Http error, got {other:?}"),
    }
    assert!(mock.hits() > 1);
}

#[tokio::test]
async fn exactly_one_request_per_call() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let _ = client
        .get_json(&Endpoint::new("quote"), QueryParams::new())
        .await;

    mock.assert_calls(1);
}
