use fmp_rs::{Endpoint, FmpError, QueryParams};
use httpmock::Method::GET;

use crate::common::{API_KEY, client_for, setup_server};

#[tokio::test]
async fn stable_endpoint_gets_params_and_api_key() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/company/profile")
            .query_param("symbol", "AAPL")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"symbol":"AAPL"}]"#);
    });

    let client = client_for(&server);
    let body = client
        .get_json(
            &Endpoint::new("company/profile"),
            QueryParams::new().push("symbol", "AAPL"),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(body.value()[0]["symbol"], "AAPL");
}

#[tokio::test]
async fn v4_tag_routes_to_legacy_base() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v4/social-sentiments/trending");
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let body = client
        .get_json(
            &Endpoint::new("social-sentiments/trending").version("v4"),
            QueryParams::new(),
        )
        .await
        .unwrap();

    mock.assert();
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_tags_fall_back_to_stable() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    for tag in ["v3", "stable", "v5", "nonsense"] {
        client
            .get_json(&Endpoint::new("quote").version(tag), QueryParams::new())
            .await
            .unwrap();
    }

    mock.assert_calls(4);
}

#[tokio::test]
async fn absent_optional_params_are_not_sent() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/historical-price-eod/light")
            .query_param("symbol", "MSFT")
            .query_param("to", "2024-02-01")
            .is_true(|req| !req.query_params().iter().any(|(k, _)| k == "from"));
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let params = QueryParams::new()
        .push("symbol", "MSFT")
        .push_opt("from", None::<String>)
        .push_opt("to", Some("2024-02-01"));
    client
        .get_json(&Endpoint::new("historical-price-eod/light"), params)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn special_characters_survive_encoding() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/search-name")
            .query_param("query", "AT&T Inc.")
            .query_param("exchange", "NYSE");
        then.status(200).body(r#"[{"symbol":"T"}]"#);
    });

    let client = client_for(&server);
    let params = QueryParams::new()
        .push("query", "AT&T Inc.")
        .push("exchange", "NYSE");
    client
        .get_json(&Endpoint::new("search-name"), params)
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn empty_optional_value_is_left_out() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/historical-price-eod/light")
            .query_param("symbol", "AAPL")
            .is_true(|req| !req.query_params().iter().any(|(k, _)| k == "from" || k == "to"));
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    client
        .get_json(
            &Endpoint::new("historical-price-eod/light"),
            QueryParams::new()
                .push("symbol", "AAPL")
                .push_opt("from", Some(""))
                .push_opt("to", Some(String::new())),
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn absolute_path_never_leaves_the_base() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let err = client
        .get_json(
            &Endpoint::new("https://other.test/collect"),
            QueryParams::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FmpError::PathOutsideBase { .. }), "got {err:?}");

    let err = client
        .get_json(&Endpoint::new("../api/v4/quote"), QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, FmpError::PathOutsideBase { .. }), "got {err:?}");
    mock.assert_calls(0);
}
