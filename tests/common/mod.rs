#![allow(dead_code)]

use fmp_rs::FmpClient;
use httpmock::MockServer;
use std::net::TcpListener;
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client whose stable and v4 bases point at `server`.
pub fn client_for(server: &MockServer) -> FmpClient {
    FmpClient::builder()
        .api_key(API_KEY)
        .base_stable(Url::parse(&format!("{}/stable/", server.base_url())).unwrap())
        .base_v4(Url::parse(&format!("{}/api/v4/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// A client pointed at a local port nothing listens on.
pub fn refused_client() -> FmpClient {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    FmpClient::builder()
        .api_key(API_KEY)
        .base_stable(Url::parse(&format!("http://127.0.0.1:{port}/stable/")).unwrap())
        .base_v4(Url::parse(&format!("http://127.0.0.1:{port}/api/v4/")).unwrap())
        .build()
        .unwrap()
}
