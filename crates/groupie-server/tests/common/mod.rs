// Shared test utilities for integration tests
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use groupie_server::{build_router, AppState, Config};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ARTISTS_JSON: &str = r#"[
    {"id": 1, "name": "Queen", "image": "https://img.test/queen.jpeg", "members": ["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"], "creationDate": 1970, "firstAlbum": "14-12-1973"},
    {"id": 2, "name": "SOJA", "image": "https://img.test/soja.jpeg", "members": ["Jacob Hemphill", "Bob Jefferson", "Ryan Berty"], "creationDate": 1997, "firstAlbum": "05-06-2002"},
    {"id": 3, "name": "Pink Floyd", "image": "https://img.test/pinkfloyd.jpeg", "members": ["Syd Barrett", "Roger Waters", "Nick Mason", "Richard Wright", "David Gilmour"], "creationDate": 1965, "firstAlbum": "05-08-1967"}
]"#;

pub const DATES_JSON: &str = r#"{"index": [
    {"id": 1, "dates": ["*23-08-2019", "22-08-2019"]},
    {"id": 2, "dates": ["*05-12-2019", "06-12-2019"]}
]}"#;

pub const LOCATIONS_JSON: &str = r#"[
    {"id": 1, "locations": ["north_carolina-usa", "georgia-usa"]},
    {"id": 3, "locations": ["london-uk"]}
]"#;

pub const RELATIONS_JSON: &str = r#"[
    {"id": 1, "datesLocations": {"georgia-usa": ["22-08-2019"], "north_carolina-usa": ["23-08-2019"]}}
]"#;

/// Start a stub upstream with nothing mounted.
pub async fn start_upstream() -> MockServer {
    MockServer::start().await
}

pub async fn mount(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Stub upstream serving all four tour resources.
pub async fn full_upstream() -> MockServer {
    let server = start_upstream().await;
    mount(&server, "/artists", 200, ARTISTS_JSON).await;
    mount(&server, "/dates", 200, DATES_JSON).await;
    mount(&server, "/locations", 200, LOCATIONS_JSON).await;
    mount(&server, "/relations", 200, RELATIONS_JSON).await;
    server
}

/// Create a test AppState pointing every client at the stub server.
pub fn test_app_state(server: &MockServer) -> Arc<AppState> {
    let uri = server.uri();
    let config = Config::from_lookup(|key| match key {
        "GROUPIE_API_URL" => Some(uri.clone()),
        "GEOCODE_URL" => Some(format!("{uri}/geocode/json")),
        "GEOCODE_API_KEY" => Some("test-key".to_string()),
        "UPSTREAM_TIMEOUT_SECS" => Some("5".to_string()),
        "GROUPIE_PUBLIC_URL" => Some("http://groupie.test".to_string()),
        _ => None,
    });
    Arc::new(AppState::from_config(&config).expect("should build clients"))
}

pub fn test_app(server: &MockServer) -> Router {
    build_router(test_app_state(server))
}

/// Issue a GET and return status plus body text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).unwrap_or_else(|e| panic!("not JSON ({e}): {body}"));
    (status, json)
}

pub fn ids(listing: &serde_json::Value) -> Vec<u64> {
    listing["artists"]
        .as_array()
        .expect("artists array")
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect()
}
